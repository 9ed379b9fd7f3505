//! Hexadecimal bytes and `\xHH` escaped text.
//!
//! Capability strings are nominally ASCII, but text tags may carry `\xHH`
//! escapes for bytes that would otherwise break the grammar (spaces inside a
//! `vcpname` value name, parentheses in a model name). Text without escapes
//! is returned borrowed; only escaped text is copied.
//!
//! # Errors
//!
//! - An odd-length hex token or a non-hex digit is an [`EncodingError`].
//! - A `\` that does not start a complete `\xHH` sequence is
//!   [`EncodingError::MalformedEscape`].
use alloc::{borrow::Cow, vec::Vec};

use bstr::{ByteSlice, ByteVec};

use crate::EncodingError;

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decodes exactly two ASCII hex digits.
#[inline]
pub(crate) fn parse_hex_byte(pair: &[u8]) -> Option<u8> {
    match *pair {
        [hi, lo] => Some((hex_digit(hi)? << 4) | hex_digit(lo)?),
        _ => None,
    }
}

/// Decodes an even-length run of hex digits, appending one item per byte.
pub(crate) fn decode_hex_bytes<T: From<u8>>(
    token: &[u8],
    out: &mut Vec<T>,
) -> Result<(), EncodingError> {
    if token.len() % 2 != 0 {
        return Err(EncodingError::OddLength(token.len()));
    }
    out.reserve(token.len() / 2);
    for pair in token.chunks_exact(2) {
        let byte = parse_hex_byte(pair).ok_or(EncodingError::InvalidHexDigit)?;
        out.push(T::from(byte));
    }
    Ok(())
}

/// Turns a byte string with optional `\xHH` escapes into text.
///
/// Invalid UTF-8 is replaced rather than rejected, with or without escapes.
pub(crate) fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>, EncodingError> {
    let Some(first) = bytes.find_byte(b'\\') else {
        return Ok(bytes.to_str_lossy());
    };

    // Every escape shrinks four bytes to one, so this never reallocates.
    let mut decoded = Vec::with_capacity(bytes.len());
    decoded.extend_from_slice(&bytes[..first]);

    let mut rest = &bytes[first..];
    while !rest.is_empty() {
        let byte = match *rest {
            [b'\\', b'x', hi, lo, ..] => {
                parse_hex_byte(&[hi, lo]).ok_or(EncodingError::MalformedEscape)?
            }
            _ => return Err(EncodingError::MalformedEscape),
        };
        decoded.push(byte);
        rest = &rest[4..];

        let literal = rest.find_byte(b'\\').unwrap_or(rest.len());
        decoded.extend_from_slice(&rest[..literal]);
        rest = &rest[literal..];
    }

    Ok(Cow::Owned(decoded.into_string_lossy()))
}
