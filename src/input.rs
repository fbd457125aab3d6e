//! Text acquisition for callers that start from raw bytes (stdin, files).
//!
//! UTF-8 validation uses `simdutf8` when the `simd` feature is enabled and
//! `std::str::from_utf8` otherwise. Both report the offset of the first
//! invalid byte.

use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

#[cfg(feature = "simd")]
#[inline]
pub fn decode(bytes: &[u8]) -> Result<&str, InputError> {
    simdutf8::compat::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn decode(bytes: &[u8]) -> Result<&str, InputError> {
    std::str::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

/// Read the whole source as one text.
///
/// A source that yields no bytes at all is the absent input (`None`). One
/// trailing line terminator (`\n` or `\r\n`) is removed.
pub fn read_text<R: Read>(mut reader: R) -> Result<Option<String>, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let text = decode(&bytes)?;
    Ok(Some(strip_line_terminator(text).to_owned()))
}

/// Read the source and split it into lines, terminators removed.
///
/// As with [`read_text`], a source that yields no bytes is absent (`None`).
pub fn read_lines<R: Read>(mut reader: R) -> Result<Option<Vec<String>>, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let text = decode(&bytes)?;
    Ok(Some(text.lines().map(str::to_owned).collect()))
}

#[inline]
fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}
