//! `sqlx` support for Postgres, storing identifiers as `BYTEA`.

use sqlx::{
    Decode, Encode, Postgres, Type, ValueRef as _,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
};

use crate::{NullSandId, SandId};

impl Type<Postgres> for SandId {
    fn type_info() -> PgTypeInfo {
        <&[u8] as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&[u8] as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for SandId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&[u8] as Encode<'_, Postgres>>::encode(self.as_bytes().as_slice(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for SandId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let bytes = <&[u8] as Decode<'r, Postgres>>::decode(value)?;
        Ok(Self::from_slice(bytes)?)
    }
}

impl Type<Postgres> for NullSandId {
    fn type_info() -> PgTypeInfo {
        <SandId as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <SandId as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for NullSandId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.get() {
            Some(sand_id) => sand_id.encode_by_ref(buf),
            None => Ok(IsNull::Yes),
        }
    }
}

impl<'r> Decode<'r, Postgres> for NullSandId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::NULL);
        }

        <SandId as Decode<'r, Postgres>>::decode(value).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::TypeInfo as _;

    use super::*;

    #[test]
    fn test_bytea_type() {
        assert_eq!(<SandId as Type<Postgres>>::type_info().name(), "BYTEA");
        assert_eq!(<NullSandId as Type<Postgres>>::type_info().name(), "BYTEA");
    }

    #[test]
    fn test_encode_null() {
        let mut buf = PgArgumentBuffer::default();

        assert!(matches!(NullSandId::NULL.encode_by_ref(&mut buf), Ok(IsNull::Yes)));
        assert!(matches!(
            NullSandId::new(SandId::MAX).encode_by_ref(&mut buf),
            Ok(IsNull::No)
        ));
        assert_eq!(&buf[..], &[0xFF; 16]);
    }
}
