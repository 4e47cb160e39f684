use std::fmt::Formatter;

use crate::{FormatError, hex};

pub fn as_array<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], FormatError> {
    bytes.try_into().map_err(|_| FormatError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

pub fn try_to_string(bytes: &[u8; 16]) -> Option<String> {
    let mut s = String::new();
    s.try_reserve_exact(hex::TEXT_LEN).ok()?;

    let mut buffer = [0; hex::TEXT_LEN];
    s.push_str(hex::encode(bytes, &mut buffer));

    Some(s)
}

pub fn debug_sand_id(name: &str, bytes: &[u8; 16], f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
    let mut buffer = [0; hex::TEXT_LEN];

    f.debug_tuple(name).field(&hex::encode(bytes, &mut buffer)).finish()
}
