use rand::{CryptoRng, RngCore, rngs::OsRng};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Fills 16 bytes from the given secure source.
pub fn fill_from<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<[u8; 16], rand::Error> {
    let mut bytes = [0; 16];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

// No RNG state is kept here, every call goes to the operating system.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn generate() -> Result<[u8; 16], rand::Error> {
    match fill_from(&mut OsRng) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "secure random source unavailable");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }
        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::from(NonZeroU32::new(rand::Error::CUSTOM_START).unwrap()))
        }
    }

    impl CryptoRng for BrokenSource {}

    #[test]
    fn test_generate() {
        let a = generate().unwrap();
        let b = generate().unwrap();
        assert_ne!(a, b);
        assert_ne!(a, [0; 16]);
    }

    #[test]
    fn test_fill_from_failing_source() {
        assert!(fill_from(&mut BrokenSource).is_err());
    }
}
