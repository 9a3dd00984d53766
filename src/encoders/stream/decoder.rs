use crate::core::charset::Charset;
use crate::encoders::algorithms::unit::from_digits;

/// Decodes marker runs and code blocks back into units.
///
/// Decoding is total: bytes outside the charset read as digit 0, a truncated
/// trailing block is dropped, and blocks wider than the charset allows are
/// skipped. Callers that need strict validation should re-encode and compare.
///
/// # Example
///
/// ```
/// use ascbin::{Charset, StreamDecoder};
///
/// let charset = Charset::default();
/// let decoder = StreamDecoder::new(&charset);
///
/// assert_eq!(decoder.decode(b"``#~"), vec![8192]);
/// assert_eq!(decoder.units(b"!``+!").collect::<Vec<_>>(), vec![1, 100]);
/// ```
pub struct StreamDecoder<'a> {
    charset: &'a Charset,
}

impl<'a> StreamDecoder<'a> {
    pub fn new(charset: &'a Charset) -> Self {
        StreamDecoder { charset }
    }

    pub fn charset(&self) -> &'a Charset {
        self.charset
    }

    pub fn decode(&self, encoded: &[u8]) -> Vec<u64> {
        self.units(encoded).collect()
    }

    /// Appends the decoded units to `output`.
    pub fn decode_into(&self, encoded: &[u8], output: &mut Vec<u64>) {
        output.extend(self.units(encoded));
    }

    /// Lazily decodes `encoded` one unit at a time.
    pub fn units<'b>(&self, encoded: &'b [u8]) -> Units<'a, 'b> {
        Units {
            charset: self.charset,
            encoded,
            position: 0,
            width: 1,
        }
    }
}

/// Iterator over the units of an encoded stream.
///
/// Created by [`StreamDecoder::units`].
#[derive(Debug, Clone)]
pub struct Units<'a, 'b> {
    charset: &'a Charset,
    encoded: &'b [u8],
    position: usize,
    width: usize,
}

impl Units<'_, '_> {
    /// Width currently in effect, as set by the last marker run read.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for Units<'_, '_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let marker = self.charset.marker();

        loop {
            let run = self.encoded[self.position..]
                .iter()
                .take_while(|&&byte| byte == marker)
                .count();
            if run > 0 {
                self.width = run;
                self.position += run;
            }

            let remaining = self.encoded.len() - self.position;
            if remaining == 0 {
                return None;
            }
            if remaining < self.width {
                log::debug!(
                    "dropping truncated block: {} of {} bytes at offset {}",
                    remaining,
                    self.width,
                    self.position
                );
                self.position = self.encoded.len();
                return None;
            }

            let block = &self.encoded[self.position..self.position + self.width];
            self.position += self.width;
            match from_digits(block, self.charset) {
                Ok(unit) => return Some(unit),
                Err(err) => {
                    log::debug!(
                        "skipping block at offset {}: width {} exceeds max code length {} ({:?})",
                        self.position - self.width,
                        self.width,
                        self.charset.max_code_length(),
                        err
                    );
                }
            }
        }
    }
}
