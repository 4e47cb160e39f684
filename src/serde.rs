use std::fmt;

use serde::{
    Deserialize, Serialize, Serializer,
    de::{self, Deserializer, Visitor},
};

use crate::{NullSandId, SandId, hex};

impl Serialize for SandId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut buffer = [0; hex::TEXT_LEN];
            serializer.serialize_str(self.encode_hex(&mut buffer))
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for SandId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SandIdVisitor;

        impl<'de> Visitor<'de> for SandIdVisitor {
            type Value = SandId;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 32 character hex string or 16 bytes")
            }
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(de::Error::custom)
            }
            fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
                SandId::from_slice(value).map_err(de::Error::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(SandIdVisitor)
        } else {
            deserializer.deserialize_bytes(SandIdVisitor)
        }
    }
}

impl Serialize for NullSandId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(sand_id) => serializer.serialize_some(&sand_id),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullSandId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<SandId>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_derive::{Deserialize, Serialize};
    use serde_test::{Configure, Token, assert_de_tokens_error, assert_tokens};

    use super::*;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Row {
        id: SandId,
        parent: NullSandId,
    }

    #[test]
    fn test_marshal_json() {
        let sand_id = SandId::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let json = serde_json::to_string(&sand_id).unwrap();

        assert_eq!(json, format!("\"{sand_id}\""));
    }

    #[test]
    fn test_unmarshal_json() {
        let sand_id: SandId = serde_json::from_str("\"ffffffffffffffffffffffffffffffff\"").unwrap();
        assert_eq!(sand_id.to_string(), "ffffffffffffffffffffffffffffffff");

        let sand_id = SandId::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let json = serde_json::to_vec(&sand_id).unwrap();
        assert_eq!(serde_json::from_slice::<SandId>(&json).unwrap(), sand_id);
    }

    #[test]
    fn test_unmarshal_json_invalid() {
        assert!(serde_json::from_slice::<SandId>(b"").is_err());
        assert!(serde_json::from_str::<SandId>("null").is_err());
        assert!(serde_json::from_str::<SandId>("42").is_err());
        assert!(serde_json::from_str::<SandId>("\"\"").is_err());
        assert!(serde_json::from_str::<SandId>("\"000000000000000g0000000000000000\"").is_err());
        assert!(serde_json::from_str::<SandId>("ffffffffffffffffffffffffffffffff").is_err());

        let err = serde_json::from_str::<SandId>("\"abc\"").unwrap_err();
        assert!(err.to_string().contains("invalid length"));
    }

    #[test]
    fn test_null_sand_id_json() {
        let row = Row {
            id: SandId::MAX,
            parent: NullSandId::NULL,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"id":"ffffffffffffffffffffffffffffffff","parent":null}"#);
        assert_eq!(serde_json::from_str::<Row>(&json).unwrap(), row);

        let row = Row {
            id: SandId::NIL,
            parent: NullSandId::new(SandId::from_u128(1)),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"id":"00000000000000000000000000000000","parent":"00000000000000000000000000000001"}"#
        );
        assert_eq!(serde_json::from_str::<Row>(&json).unwrap(), row);
    }

    #[test]
    fn test_tokens_readable() {
        assert_tokens(&SandId::MAX.readable(), &[Token::Str("ffffffffffffffffffffffffffffffff")]);
        assert_tokens(&NullSandId::NULL.readable(), &[Token::None]);
    }

    #[test]
    fn test_tokens_compact() {
        assert_tokens(&SandId::MAX.compact(), &[Token::Bytes(&[0xFF; 16])]);
        assert_tokens(&SandId::from_u128(1).compact(), &[Token::Bytes(&[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
        ])]);
        assert_tokens(
            &NullSandId::new(SandId::MAX).compact(),
            &[Token::Some, Token::Bytes(&[0xFF; 16])],
        );
        assert_tokens(&NullSandId::NULL.compact(), &[Token::None]);
    }

    #[test]
    fn test_tokens_compact_wrong_length() {
        assert_de_tokens_error::<serde_test::Compact<SandId>>(
            &[Token::Bytes(&[0xFF; 15])],
            "invalid length: expected 16, got 15",
        );
        assert_de_tokens_error::<serde_test::Compact<SandId>>(
            &[Token::Bytes(&[0xFF; 17])],
            "invalid length: expected 16, got 17",
        );
    }
}
