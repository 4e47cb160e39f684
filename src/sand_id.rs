use std::{fmt, str::FromStr};

#[cfg(feature = "rand")]
use rand::{CryptoRng, RngCore};

#[cfg(feature = "rand")]
use crate::generator;
use crate::{FormatError, hex, util};

/// A random 128-bit identifier.
///
/// A `SandId` is 16 opaque bytes. It has no timestamp, version or variant bits:
/// every bit of a generated `SandId` comes from a cryptographically secure source.
///
/// The all-zero value ([`SandId::NIL`]) is the "unset" sentinel and is what
/// [`SandId::default()`] returns. Ordering is byte-wise lexicographic and has no
/// meaning beyond being deterministic.
///
/// # Example
///
/// ```
/// use sand_id::SandId;
///
/// let id = SandId::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
/// let s = id.to_string();
///
/// assert_eq!(s.len(), 32);
/// assert_eq!(s.parse::<SandId>(), Ok(id));
/// ```
#[derive(Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SandId([u8; 16]);

impl SandId {
    /// The zero `SandId`, used to signal an absent value.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// assert!(SandId::NIL.is_zero());
    /// assert_eq!(SandId::NIL, SandId::default());
    /// ```
    pub const NIL: Self = Self([0; 16]);

    /// The largest `SandId`, all bits set.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// assert_eq!(SandId::MAX.to_string(), "ffffffffffffffffffffffffffffffff");
    /// ```
    pub const MAX: Self = Self([0xFF; 16]);

    /// Generates a new random `SandId`.
    ///
    /// The bytes are read from the operating system's secure random source.
    /// No state is shared between calls, so this can be called from any number
    /// of threads at once.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide random bytes. A weak
    /// identifier is never returned instead. See [`SandId::try_new()`] for a
    /// variant which reports the failure.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// let u1 = SandId::new();
    /// let u2 = SandId::new();
    ///
    /// assert!(u1 != u2);
    /// assert!(!u1.is_zero());
    /// ```
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(sand_id) => sand_id,
            Err(err) => panic!("secure random source unavailable: {err}"),
        }
    }

    /// Generates a new random `SandId` and never panics.
    ///
    /// # Errors
    ///
    /// Returns the error of the operating system's random source if it is unavailable.
    #[cfg(feature = "rand")]
    pub fn try_new() -> Result<Self, rand::Error> {
        generator::generate().map(Self)
    }

    /// Generates a new `SandId` from the given secure random number generator.
    ///
    /// # Errors
    ///
    /// Passes on the error of the random number generator.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::rngs::OsRng;
    /// use sand_id::SandId;
    ///
    /// let id = SandId::try_from_rng(&mut OsRng).unwrap();
    ///
    /// assert!(!id.is_zero());
    /// ```
    #[cfg(feature = "rand")]
    pub fn try_from_rng<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, rand::Error> {
        generator::fill_from(rng).map(Self)
    }

    /// Tests if a `SandId` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// assert!(SandId::default().is_zero());
    /// assert!(!SandId::MAX.is_zero());
    /// ```
    #[must_use]
    pub const fn is_zero(self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Parses a `SandId` from its canonical text form.
    ///
    /// The string must be exactly 32 hexadecimal digits. Upper case digits are
    /// accepted, although [`Display`](fmt::Display) always writes lower case.
    ///
    /// # Errors
    ///
    /// Fails if the string has the wrong length or contains a non-hex character.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::{FormatError, SandId};
    ///
    /// assert_eq!(SandId::parse("00000000000000000000000000000000"), Ok(SandId::NIL));
    /// assert_eq!(SandId::parse("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"), Ok(SandId::MAX));
    ///
    /// assert_eq!(
    ///     SandId::parse("000000000000000g0000000000000000"),
    ///     Err(FormatError::InvalidChar { index: 15 })
    /// );
    /// ```
    pub const fn parse(s: &str) -> Result<Self, FormatError> {
        match hex::decode(s.as_bytes()) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(err) => Err(err),
        }
    }

    /// Parses a `SandId` and panics on invalid input.
    ///
    /// Meant for literals known to be valid. In a `const` context an invalid
    /// literal is a compile error.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid `SandId`.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// const ROOT: SandId = SandId::must_parse("0000000000000000000000000000002a");
    ///
    /// assert_eq!(ROOT.to_u128(), 42);
    /// ```
    #[must_use]
    pub const fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(sand_id) => sand_id,
            Err(_) => panic!("invalid SandId literal"),
        }
    }

    /// Writes the canonical text form into `buffer` and returns it as `&str`.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// let mut buffer = [0; 32];
    ///
    /// assert_eq!(SandId::NIL.encode_hex(&mut buffer), "00000000000000000000000000000000");
    /// ```
    pub fn encode_hex<'a>(&self, buffer: &'a mut [u8; 32]) -> &'a str {
        hex::encode(&self.0, buffer)
    }

    /// Returns the raw bytes of a `SandId`.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Borrows the raw bytes of a `SandId`.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a `SandId` from raw bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// let u = SandId::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0]);
    ///
    /// assert_eq!(u.to_string(), "00000000000000000000000000000100");
    /// ```
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a `SandId` from a byte slice of exactly 16 bytes.
    ///
    /// Shorter or longer input is rejected, never padded or truncated.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError::InvalidLength`] if the slice is not 16 bytes long.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::{FormatError, SandId};
    ///
    /// assert_eq!(SandId::from_slice(&[0xFF; 16]), Ok(SandId::MAX));
    /// assert_eq!(
    ///     SandId::from_slice(&[0xFF; 15]),
    ///     Err(FormatError::InvalidLength { expected: 16, actual: 15 })
    /// );
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        Ok(Self(*util::as_array(bytes)?))
    }

    /// Converts a `SandId` into a `u128`, reading the bytes as big endian.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates a `SandId` from a `u128`, writing the bytes as big endian.
    ///
    /// # Example
    ///
    /// ```
    /// use sand_id::SandId;
    ///
    /// assert_eq!(SandId::from_u128(1).to_string(), "00000000000000000000000000000001");
    /// ```
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n.to_be_bytes())
    }

    /// Return the string representation of a `SandId` and never panics.
    ///
    /// Returns `None` if the memory for the string cannot be allocated.
    #[must_use]
    pub fn try_to_string(self) -> Option<String> {
        util::try_to_string(&self.0)
    }
}

impl fmt::Debug for SandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        util::debug_sand_id("SandId", &self.0, f)
    }
}

impl fmt::Display for SandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0; hex::TEXT_LEN];
        f.write_str(hex::encode(&self.0, &mut buffer))
    }
}

impl FromStr for SandId {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<[u8]> for SandId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<SandId> for u128 {
    fn from(sand_id: SandId) -> Self {
        sand_id.to_u128()
    }
}

impl From<u128> for SandId {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<SandId> for [u8; 16] {
    fn from(sand_id: SandId) -> Self {
        sand_id.to_bytes()
    }
}

impl From<[u8; 16]> for SandId {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8; 16]> for SandId {
    fn from(bytes: &[u8; 16]) -> Self {
        Self::from_bytes(*bytes)
    }
}

impl TryFrom<&[u8]> for SandId {
    type Error = FormatError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}
