//! # ascbin
//!
//! A context-sensitive codec that writes unsigned integers ("units") as runs
//! of symbols from a restricted ASCII charset. Each unit takes as many symbols
//! as its value needs; a run of marker bytes announces a width change, and a
//! lookahead heuristic avoids switching widths back and forth.
//!
//! ```
//! use ascbin::{Charset, decode, encode};
//!
//! let charset = Charset::default();
//! let encoded = encode(&[1, 100, 1, 100], &charset).unwrap();
//! assert_eq!(encoded, b"!``+!! +!");
//! assert_eq!(decode(&encoded, &charset), vec![1, 100, 1, 100]);
//! ```
//!
//! The readable variant keeps charset characters legible:
//!
//! ```
//! use ascbin::{Charset, decode_readable, encode_readable};
//!
//! let charset = Charset::default();
//! let encoded = encode_readable("a`b", &charset).unwrap();
//! assert_eq!(encoded, b"a``&#`b");
//! assert_eq!(decode_readable(&encoded, &charset), "a`b");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::charset::{
    Charset, CharsetBuilder, DEFAULT_CHARSET, DEFAULT_IGNORED, DEFAULT_MARKER,
    DEFAULT_MAX_CODE_LENGTH, MAX_CODE_LENGTH_LIMIT,
};
pub use crate::core::config::{CharsetConfig, CharsetRegistry, FALLBACK_CHARSET, Settings};
pub use crate::core::shared::SharedCharset;
pub use encoders::algorithms::{
    CharsetNotFoundError, CodecError, ConfigError, find_closest_charset, unit,
};
pub use encoders::readable::{
    decode_readable, decode_readable_units, encode_readable, encode_readable_units,
};
pub use encoders::stream::{StreamDecoder, StreamEncoder, Units};

/// Encodes a sequence of units.
///
/// # Errors
///
/// `Overflow` if any unit is not below `charset.max_code()`.
pub fn encode(units: &[u64], charset: &Charset) -> Result<Vec<u8>, CodecError> {
    StreamEncoder::new(charset).encode(units)
}

/// Decodes an encoded stream. Never fails; see [`StreamDecoder`].
pub fn decode(encoded: &[u8], charset: &Charset) -> Vec<u64> {
    StreamDecoder::new(charset).decode(encoded)
}

/// Builds a validated charset table.
///
/// Equivalent to [`Charset::new`]; use [`Charset::configure`] or
/// [`SharedCharset::configure`] to replace an existing table in place.
pub fn configure_charset(
    chars: &str,
    marker: u8,
    max_code_length: u8,
) -> Result<Charset, ConfigError> {
    Charset::new(chars, marker, max_code_length)
}
