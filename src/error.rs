use thiserror::Error;

/// Errors that can occur when creating a [`SandId`](crate::SandId) out of foreign data.
///
/// Every decoder in this crate (text, binary, JSON and the SQL scan adapters)
/// reports malformed input with this type.
#[derive(Debug, Error, Clone, Copy, Hash, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not have the required length.
    ///
    /// Text input must be 32 characters, binary input 16 bytes.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input contains a character which is not a hexadecimal digit.
    #[error("invalid hex character at index {index}")]
    InvalidChar { index: usize },

    /// A database value of a type that cannot hold a `SandId`.
    #[error("unsupported source type: {type_name}")]
    UnsupportedType { type_name: &'static str },
}

impl FormatError {
    /// Returns true if the input had the wrong length.
    #[must_use]
    pub const fn is_length_error(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }
}
