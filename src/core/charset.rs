use std::collections::HashMap;

use crate::encoders::algorithms::errors::ConfigError;
use crate::encoders::algorithms::unit::pow;

/// Printable ASCII minus the characters that need quoting in most contexts.
pub const DEFAULT_CHARSET: &str = " !#$%&()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_abcdefghijklmnopqrstuvwxyz{|}~";

/// Printable ASCII characters left out of [`DEFAULT_CHARSET`].
pub const DEFAULT_IGNORED: &str = "\"'\\`";

/// Byte announcing a code-width change in the default table.
pub const DEFAULT_MARKER: u8 = b'`';

/// Default upper bound on digits per unit.
pub const DEFAULT_MAX_CODE_LENGTH: u8 = 9;

/// Width counters are signed bytes on the wire side of the format.
pub const MAX_CODE_LENGTH_LIMIT: u8 = i8::MAX as u8;

/// The bijection between ASCII symbols and digit values, plus the marker byte.
///
/// A `Charset` is an immutable snapshot: encoders and decoders borrow one for
/// the duration of a call, so a concurrent reconfiguration can never hand them
/// a half-built table. Use [`Charset::configure`] or
/// [`SharedCharset`](crate::SharedCharset) to swap tables.
///
/// # Example
///
/// ```
/// use ascbin::Charset;
///
/// let charset = Charset::builder()
///     .chars("0123456789")
///     .marker(b'#')
///     .max_code_length(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(charset.radix(), 10);
/// assert_eq!(charset.max_code(), 10_000);
/// assert_eq!(charset.decode_byte(b'7'), Some(7));
/// assert_eq!(charset.encode_digit(3), Some(b'3'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
    symbol_to_digit: HashMap<u8, u8>,
    marker: u8,
    max_code_length: u8,
    max_code: u64,
}

impl Charset {
    /// Creates a new CharsetBuilder.
    pub fn builder() -> CharsetBuilder {
        CharsetBuilder::new()
    }

    /// Validates and builds a table in one call.
    pub fn new(chars: &str, marker: u8, max_code_length: u8) -> Result<Self, ConfigError> {
        Self::builder()
            .chars(chars)
            .marker(marker)
            .max_code_length(max_code_length)
            .build()
    }

    /// Replaces this table wholesale.
    ///
    /// The replacement is fully validated before assignment; on error `self`
    /// is left exactly as it was.
    pub fn configure(
        &mut self,
        chars: &str,
        marker: u8,
        max_code_length: u8,
    ) -> Result<(), ConfigError> {
        let replacement = Self::new(chars, marker, max_code_length)?;
        log::debug!(
            "charset reconfigured: radix {} -> {}, marker {:?}, max_code_length {}",
            self.radix(),
            replacement.radix(),
            replacement.marker as char,
            replacement.max_code_length
        );
        *self = replacement;
        Ok(())
    }

    /// Number of symbols, the base of the positional encoding.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Exclusive upper bound on encodable units: `radix ^ max_code_length`.
    pub fn max_code(&self) -> u64 {
        self.max_code
    }

    /// Maximum number of digit positions a single unit may occupy.
    pub fn max_code_length(&self) -> u8 {
        self.max_code_length
    }

    /// The reserved byte that forms marker runs.
    pub fn marker(&self) -> u8 {
        self.marker
    }

    /// Symbols in digit order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Encodes a digit (0 to radix-1) as its symbol byte.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: u8) -> Option<u8> {
        self.symbols.get(digit as usize).copied()
    }

    /// Decodes a symbol byte back to its digit value.
    ///
    /// Returns `None` if the byte is not in the charset.
    pub fn decode_byte(&self, byte: u8) -> Option<u8> {
        self.symbol_to_digit.get(&byte).copied()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.symbol_to_digit.contains_key(&byte)
    }

    pub fn is_marker(&self, byte: u8) -> bool {
        byte == self.marker
    }
}

impl Default for Charset {
    /// The built-in table: [`DEFAULT_CHARSET`] (radix 91), marker `` ` ``,
    /// nine digits per unit at most.
    fn default() -> Self {
        let symbols = DEFAULT_CHARSET.as_bytes().to_vec();
        let symbol_to_digit = symbols
            .iter()
            .enumerate()
            .map(|(digit, &symbol)| (symbol, digit as u8))
            .collect();
        let max_code = pow(symbols.len() as u64, DEFAULT_MAX_CODE_LENGTH as u32);

        Charset {
            symbols,
            symbol_to_digit,
            marker: DEFAULT_MARKER,
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
            max_code,
        }
    }
}

/// Builder for constructing a Charset.
///
/// Unset fields fall back to the built-in table's values.
#[derive(Debug, Default)]
pub struct CharsetBuilder {
    chars: Option<String>,
    marker: Option<u32>,
    max_code_length: Option<u8>,
}

impl CharsetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbols, in digit order.
    pub fn chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = Some(chars.into());
        self
    }

    /// Sets the marker byte.
    pub fn marker(mut self, marker: u8) -> Self {
        self.marker = Some(marker as u32);
        self
    }

    /// Sets the marker from a character, as read from configuration files.
    ///
    /// Non-ASCII characters are accepted here and rejected by [`build`](Self::build).
    pub fn marker_char(mut self, marker: char) -> Self {
        self.marker = Some(marker as u32);
        self
    }

    pub fn max_code_length(mut self, max_code_length: u8) -> Self {
        self.max_code_length = Some(max_code_length);
        self
    }

    /// Builds the Charset.
    ///
    /// # Errors
    ///
    /// - `InvalidCharset` if the charset is empty, has a non-ASCII character,
    ///   or repeats a character
    /// - `InvalidLength` if the max code length is 0, above 127, or makes
    ///   `radix ^ max_code_length` overflow 64 bits
    /// - `InvalidMarker` if the marker is non-ASCII or part of the charset
    pub fn build(self) -> Result<Charset, ConfigError> {
        let chars = self.chars.unwrap_or_else(|| DEFAULT_CHARSET.to_string());
        let marker = self.marker.unwrap_or(DEFAULT_MARKER as u32);
        let max_code_length = self.max_code_length.unwrap_or(DEFAULT_MAX_CODE_LENGTH);

        if chars.is_empty() {
            return Err(ConfigError::invalid_charset("charset cannot be empty"));
        }

        let radix = chars.chars().count();
        if max_code_length == 0 || max_code_length > MAX_CODE_LENGTH_LIMIT {
            return Err(ConfigError::InvalidLength {
                length: max_code_length,
                radix,
            });
        }

        let mut symbols = Vec::with_capacity(radix);
        let mut symbol_to_digit = HashMap::with_capacity(radix);
        for c in chars.chars() {
            if !c.is_ascii() {
                return Err(ConfigError::invalid_charset(format!(
                    "non-ASCII character {:?} (U+{:04X})",
                    c, c as u32
                )));
            }
            let symbol = c as u8;
            if symbol_to_digit.insert(symbol, symbols.len() as u8).is_some() {
                return Err(ConfigError::invalid_charset(format!(
                    "duplicate character {:?}",
                    c
                )));
            }
            symbols.push(symbol);
        }

        if marker > 0x7F {
            return Err(ConfigError::invalid_marker(marker, "marker must be ASCII"));
        }
        let marker = marker as u8;
        if symbol_to_digit.contains_key(&marker) {
            return Err(ConfigError::invalid_marker(
                marker,
                "marker is part of the charset",
            ));
        }

        let max_code = (radix as u64)
            .checked_pow(max_code_length as u32)
            .ok_or(ConfigError::InvalidLength {
                length: max_code_length,
                radix,
            })?;

        Ok(Charset {
            symbols,
            symbol_to_digit,
            marker,
            max_code_length,
            max_code,
        })
    }
}
