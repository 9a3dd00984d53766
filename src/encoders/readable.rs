//! Readable encoding: text in, mostly-unchanged text out.
//!
//! Characters that are charset symbols become their own digit, so they come
//! out of the stream encoder as themselves. Every other code point is shifted
//! above the radix and travels as a wider code block.

use crate::core::charset::Charset;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::stream::{StreamDecoder, StreamEncoder};

/// Maps a code value to a unit: charset bytes to their digit, the rest
/// shifted above the radix.
fn to_unit(value: u64, charset: &Charset) -> Result<u64, CodecError> {
    if value <= u8::MAX as u64 {
        if let Some(digit) = charset.decode_byte(value as u8) {
            return Ok(digit as u64);
        }
    }
    value
        .checked_add(charset.radix() as u64)
        .ok_or(CodecError::ReadableOverflow { value })
}

/// Inverse of [`to_unit`].
fn from_unit(unit: u64, charset: &Charset) -> Option<u64> {
    let radix = charset.radix() as u64;
    if unit < radix {
        charset.encode_digit(unit as u8).map(u64::from)
    } else {
        Some(unit - radix)
    }
}

/// Encodes text so that charset characters stay legible in the output.
///
/// # Example
///
/// ```
/// use ascbin::{Charset, encode_readable};
///
/// let charset = Charset::default();
/// assert_eq!(encode_readable("path/to/file.txt", &charset).unwrap(), b"path/to/file.txt");
/// assert_eq!(encode_readable("\u{2000}", &charset).unwrap(), b"```# !");
/// ```
pub fn encode_readable(text: &str, charset: &Charset) -> Result<Vec<u8>, CodecError> {
    let units = text
        .chars()
        .map(|c| to_unit(c as u64, charset))
        .collect::<Result<Vec<u64>, CodecError>>()?;
    StreamEncoder::new(charset).encode(&units)
}

/// Decodes a readable stream back into text.
///
/// Lenient like the stream decoder: values that are not Unicode scalars, or
/// digits without a symbol, become U+FFFD.
pub fn decode_readable(encoded: &[u8], charset: &Charset) -> String {
    StreamDecoder::new(charset)
        .units(encoded)
        .map(|unit| {
            from_unit(unit, charset)
                .and_then(|value| u32::try_from(value).ok())
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

/// Readable encoding for raw code values instead of characters.
///
/// Values below 256 that are charset bytes map to their digit; all others
/// are shifted above the radix.
///
/// # Errors
///
/// `ReadableOverflow` if shifting a value would pass `u64::MAX`, or
/// `Overflow` if a shifted value does not fit the charset.
pub fn encode_readable_units(values: &[u64], charset: &Charset) -> Result<Vec<u8>, CodecError> {
    let units = values
        .iter()
        .map(|&value| to_unit(value, charset))
        .collect::<Result<Vec<u64>, CodecError>>()?;
    StreamEncoder::new(charset).encode(&units)
}

/// Inverse of [`encode_readable_units`].
pub fn decode_readable_units(encoded: &[u8], charset: &Charset) -> Vec<u64> {
    StreamDecoder::new(charset)
        .units(encoded)
        .filter_map(|unit| from_unit(unit, charset))
        .collect()
}
