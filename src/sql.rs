//! Driver-agnostic database boundary.
//!
//! Database layers that do not know about `SandId` exchange values as an
//! untyped [`SqlValue`]. [`Scan`] reads a `SandId` out of such a value and
//! [`Valuer`] turns it back into one. Both [`SandId`] and [`NullSandId`]
//! implement the two traits.
//!
//! ```
//! use sand_id::{NullSandId, SandId, sql::{Scan, SqlValue, Valuer}};
//!
//! let id = SandId::must_parse("0123456789abcdef0123456789abcdef");
//! let stored = id.value();
//! assert_eq!(stored, SqlValue::Bytes(id.to_bytes().to_vec()));
//!
//! let mut column = NullSandId::default();
//! column.scan(&stored).unwrap();
//! assert_eq!(column.get(), Some(id));
//!
//! column.scan(&SqlValue::Null).unwrap();
//! assert!(column.is_null());
//! ```

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{FormatError, NullSandId, SandId};

/// An untyped value as handed over by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL `NULL`.
    Null,
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A raw byte string, e.g. `BYTEA` or `BLOB`.
    Bytes(Vec<u8>),
    /// A character string.
    Text(String),
}

impl SqlValue {
    /// Name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int64",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }

    /// Tests if the value is SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<String> for SqlValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SqlValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for SqlValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Reads a value out of a [`SqlValue`] (read-from-storage direction).
pub trait Scan {
    /// Overwrites `self` with the value decoded from `src`.
    ///
    /// # Errors
    ///
    /// Fails with a [`FormatError`] if `src` cannot be decoded. `self` is then
    /// reset to its empty state, never left partially written.
    fn scan(&mut self, src: &SqlValue) -> Result<(), FormatError>;
}

/// Turns a value into a [`SqlValue`] (write-to-storage direction).
pub trait Valuer {
    /// Returns the value to be stored.
    fn value(&self) -> SqlValue;
}

impl Scan for SandId {
    /// Accepts exactly 16 raw bytes, or the 32 character hex text form.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, src), fields(source = src.type_name()))
    )]
    fn scan(&mut self, src: &SqlValue) -> Result<(), FormatError> {
        let decoded = match src {
            SqlValue::Bytes(bytes) => Self::from_slice(bytes),
            SqlValue::Text(text) => Self::parse(text),
            other => Err(FormatError::UnsupportedType {
                type_name: other.type_name(),
            }),
        };

        match decoded {
            Ok(sand_id) => {
                *self = sand_id;
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "rejected database value");
                *self = Self::NIL;
                Err(err)
            }
        }
    }
}

impl Valuer for SandId {
    fn value(&self) -> SqlValue {
        SqlValue::Bytes(self.to_bytes().to_vec())
    }
}

impl Scan for NullSandId {
    /// Accepts `NULL` in addition to everything [`SandId`] accepts.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, src), fields(source = src.type_name()))
    )]
    fn scan(&mut self, src: &SqlValue) -> Result<(), FormatError> {
        if src.is_null() {
            *self = Self::NULL;
            return Ok(());
        }

        let result = self.sand_id.scan(src);
        self.valid = result.is_ok();
        result
    }
}

impl Valuer for NullSandId {
    fn value(&self) -> SqlValue {
        self.get().map_or(SqlValue::Null, |sand_id| sand_id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_bytes() {
        let mut sand_id = SandId::default();

        assert_eq!(sand_id.scan(&SqlValue::Bytes(vec![255; 16])), Ok(()));
        assert_eq!(sand_id.to_string(), "ffffffffffffffffffffffffffffffff");
    }

    #[test]
    fn test_scan_text() {
        let mut sand_id = SandId::default();

        assert_eq!(sand_id.scan(&"ffffffffffffffffffffffffffffffff".into()), Ok(()));
        assert_eq!(sand_id, SandId::MAX);

        assert_eq!(
            sand_id.scan(&"ffffffffffffffffffffffffffffffzz".into()),
            Err(FormatError::InvalidChar { index: 30 })
        );
        assert!(sand_id.is_zero());
    }

    #[test]
    fn test_scan_wrong_length() {
        let mut sand_id = SandId::MAX;

        assert_eq!(
            sand_id.scan(&SqlValue::Bytes(vec![255; 17])),
            Err(FormatError::InvalidLength { expected: 16, actual: 17 })
        );
        assert!(sand_id.is_zero());

        assert_eq!(
            sand_id.scan(&SqlValue::Bytes(vec![255; 15])),
            Err(FormatError::InvalidLength { expected: 16, actual: 15 })
        );
        assert!(sand_id.is_zero());
    }

    #[test]
    fn test_scan_unsupported_type() {
        let mut sand_id = SandId::default();

        assert_eq!(
            sand_id.scan(&SqlValue::Int(0)),
            Err(FormatError::UnsupportedType { type_name: "int64" })
        );
        assert_eq!(
            sand_id.scan(&SqlValue::Null),
            Err(FormatError::UnsupportedType { type_name: "null" })
        );
        assert!(sand_id.scan(&SqlValue::Bool(true)).is_err());
        assert!(sand_id.scan(&SqlValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_value() {
        let sand_id = SandId::from_u128(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10);

        assert_eq!(
            sand_id.value(),
            SqlValue::Bytes(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16])
        );
    }

    #[test]
    fn test_null_scan() {
        let mut null_sand_id = NullSandId::new(SandId::MAX);

        assert_eq!(null_sand_id.scan(&SqlValue::Null), Ok(()));
        assert!(!null_sand_id.valid);
        assert!(null_sand_id.sand_id.is_zero());

        assert_eq!(null_sand_id.scan(&SqlValue::Bytes(vec![255; 16])), Ok(()));
        assert!(null_sand_id.valid);
        assert_eq!(null_sand_id.sand_id.to_string(), "ffffffffffffffffffffffffffffffff");
        assert_eq!(null_sand_id.value(), SqlValue::Bytes(vec![255; 16]));

        assert!(null_sand_id.scan(&SqlValue::Int(7)).is_err());
        assert!(!null_sand_id.valid);
        assert!(null_sand_id.sand_id.is_zero());
    }

    #[test]
    fn test_null_value() {
        let mut null_sand_id = NullSandId::default();
        assert_eq!(null_sand_id.value(), SqlValue::Null);

        null_sand_id.sand_id = SandId::must_parse("ffffffffffffffffffffffffffffffff");
        null_sand_id.valid = true;
        assert_eq!(null_sand_id.value(), SqlValue::Bytes(vec![255; 16]));
    }
}
