use std::str::from_utf8_unchecked;

use crate::FormatError;

/// Length of the canonical text form.
pub const TEXT_LEN: usize = 32;

pub fn encode<'a>(bytes: &[u8; 16], buffer: &'a mut [u8; TEXT_LEN]) -> &'a str {
    const ALPHABET: [u8; 16] = *b"0123456789abcdef";

    for (pair, &byte) in buffer.chunks_exact_mut(2).zip(bytes) {
        pair[0] = ALPHABET[usize::from(byte >> 4)];
        pair[1] = ALPHABET[usize::from(byte & 0x0F)];
    }

    // Safety: Encoding above guarantees valid UTF-8
    unsafe { from_utf8_unchecked(buffer) }
}

pub const fn decode(ascii_bytes: &[u8]) -> Result<[u8; 16], FormatError> {
    #[rustfmt::skip]
    const DECODE: [i8; 256] = [
        /* 0x00 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x10 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x20 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x30 */   0,  1,  2,  3,  4,  5,  6,  7,  8,  9, -1, -1, -1, -1, -1, -1,
        /* 0x40 */  -1, 10, 11, 12, 13, 14, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x50 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x60 */  -1, 10, 11, 12, 13, 14, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x70 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x80 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0x90 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xA0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xB0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xC0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xD0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xE0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        /* 0xF0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    ];

    if ascii_bytes.len() != TEXT_LEN {
        return Err(FormatError::InvalidLength {
            expected: TEXT_LEN,
            actual: ascii_bytes.len(),
        });
    }

    let mut bytes = [0; 16];
    let mut i = 0;

    // `for` loops are not allowed in const fn
    while i < bytes.len() {
        let high = DECODE[ascii_bytes[2 * i] as usize];
        if high < 0 {
            return Err(FormatError::InvalidChar { index: 2 * i });
        }

        let low = DECODE[ascii_bytes[2 * i + 1] as usize];
        if low < 0 {
            return Err(FormatError::InvalidChar { index: 2 * i + 1 });
        }

        bytes[i] = (high.unsigned_abs() << 4) | low.unsigned_abs();
        i += 1;
    }

    Ok(bytes)
}

pub const fn validate(ascii_bytes: &[u8]) -> Result<(), FormatError> {
    match decode(ascii_bytes) {
        Ok(_) => Ok(()),
        Err(err) => Err(err),
    }
}
