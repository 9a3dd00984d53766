use crate::core::charset::Charset;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::unit::{minimal_width, to_digits_into};

/// Encodes unit sequences into marker runs and fixed-width code blocks.
///
/// The encoder starts every stream at width 1. A unit that needs more digits
/// widens the stream immediately; a unit that needs fewer only narrows it
/// when a short lookahead says the narrower width will pay for its marker run.
///
/// # Example
///
/// ```
/// use ascbin::{Charset, StreamEncoder};
///
/// let charset = Charset::default();
/// let encoder = StreamEncoder::new(&charset);
///
/// assert_eq!(encoder.encode(&[8192]).unwrap(), b"``#~");
/// ```
pub struct StreamEncoder<'a> {
    charset: &'a Charset,
}

impl<'a> StreamEncoder<'a> {
    pub fn new(charset: &'a Charset) -> Self {
        StreamEncoder { charset }
    }

    pub fn charset(&self) -> &'a Charset {
        self.charset
    }

    /// Encodes `units` into a new buffer.
    pub fn encode(&self, units: &[u64]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::with_capacity(units.len() * 2);
        self.encode_into(units, &mut output)?;
        Ok(output)
    }

    /// Appends the encoding of `units` to `output`.
    ///
    /// Every unit is checked against the charset before anything is written,
    /// so on error `output` is unchanged.
    pub fn encode_into(&self, units: &[u64], output: &mut Vec<u8>) -> Result<(), CodecError> {
        let widths = units
            .iter()
            .map(|&unit| minimal_width(unit, self.charset))
            .collect::<Result<Vec<u8>, CodecError>>()?;

        let mut scratch = vec![0u8; self.charset.max_code_length() as usize];
        let mut current = 1u8;

        for (index, (&unit, &required)) in units.iter().zip(&widths).enumerate() {
            if required > current {
                log::trace!("unit {}: grow width {} -> {}", index, current, required);
                current = required;
                self.push_marker_run(current, output);
            } else if required < current && should_shrink(&widths[index..], current, required) {
                log::trace!("unit {}: shrink width {} -> {}", index, current, required);
                current = required;
                self.push_marker_run(current, output);
            }

            let digits = &mut scratch[..current as usize];
            to_digits_into(unit, self.charset, digits)?;
            output.extend(digits.iter().map(|&digit| self.symbol(digit)));
        }

        Ok(())
    }

    fn push_marker_run(&self, width: u8, output: &mut Vec<u8>) {
        output.extend(std::iter::repeat_n(self.charset.marker(), width as usize));
    }

    fn symbol(&self, digit: u8) -> u8 {
        // Digits come from to_digits_into, so they are always below the radix.
        self.charset.encode_digit(digit).unwrap_or(self.charset.symbols()[0])
    }
}

/// Decides whether to narrow from `current` to `required` at the head of
/// `upcoming` (the remaining widths, current unit first).
///
/// The checks run in a fixed order per scanned unit; reordering them moves
/// marker runs and changes the output bytes.
fn should_shrink(upcoming: &[u8], current: u8, required: u8) -> bool {
    let threshold = current as usize + required as usize;
    let last = upcoming.len() - 1;

    for (scanned, &future) in upcoming.iter().enumerate() {
        // A wider unit is coming after a stretch of narrow ones.
        if future > current && scanned > 1 {
            return true;
        }
        // Too many narrow units to keep paying for the wide format.
        if scanned > threshold {
            return true;
        }
        // The current width comes back soon; keep it.
        if future == current {
            return false;
        }
        if scanned == last {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(units: &[u64]) -> String {
        let charset = Charset::default();
        let bytes = StreamEncoder::new(&charset).encode(units).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_single_digit_units_have_no_markers() {
        assert_eq!(encode(&[0]), " ");
        assert_eq!(encode(&[38, 65, 72, 72, 75]), "Hello");
    }

    #[test]
    fn test_grow() {
        assert_eq!(encode(&[8192]), "``#~");
        assert_eq!(encode(&[90, 91, 8280, 8281]), "~`` !~~```  !");
    }

    #[test]
    fn test_keep_wide_when_width_returns() {
        assert_eq!(encode(&[1, 100, 1, 100]), "!``+!! +!");
        assert_eq!(encode(&[100, 1, 1, 100]), "``+!! ! +!");
        assert_eq!(encode(&[100, 1, 1, 1, 100]), "``+!! ! ! +!");
    }

    #[test]
    fn test_shrink_after_long_narrow_stretch() {
        assert_eq!(encode(&[100, 1, 1, 1, 1, 100]), "``+!`!!!!``+!");
        assert_eq!(
            encode(&[100, 1, 1, 1, 1, 1, 1, 1, 100]),
            "``+!`!!!!!!!``+!"
        );
    }

    #[test]
    fn test_shrink_at_end_of_input() {
        assert_eq!(encode(&[100, 1, 1, 1, 1]), "``+!`!!!!");
        assert_eq!(encode(&[100, 1, 2, 3, 4, 5, 6, 7, 8, 9]), "``+!`!#$%&()*+");
    }

    #[test]
    fn test_shrink_before_wider_unit() {
        assert_eq!(encode(&[100, 1, 1, 10000]), "``+!`!!```u4!");
        assert_eq!(encode(&[100, 1, 10000]), "``+!`!```u4!");
    }

    #[test]
    fn test_hold_intermediate_width() {
        assert_eq!(
            encode(&[10000, 100, 100, 100, 10000]),
            "```u4!+! +! +! u4!"
        );
    }

    #[test]
    fn test_largest_unit() {
        let charset = Charset::default();
        let encoded = StreamEncoder::new(&charset)
            .encode(&[charset.max_code() - 1])
            .unwrap();
        assert_eq!(encoded, b"`````````~~~~~~~~~");
    }

    #[test]
    fn test_overflow() {
        let charset = Charset::default();
        let encoder = StreamEncoder::new(&charset);
        let err = encoder.encode(&[charset.max_code()]).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_encode_into_untouched_on_error() {
        let charset = Charset::default();
        let encoder = StreamEncoder::new(&charset);
        let mut output = b"prefix".to_vec();

        assert!(encoder.encode_into(&[1, 2, u64::MAX], &mut output).is_err());
        assert_eq!(output, b"prefix");

        encoder.encode_into(&[1, 2], &mut output).unwrap();
        assert_eq!(output, b"prefix!#");
    }

    #[test]
    fn test_custom_charset() {
        let charset = Charset::new("0123456789", b'#', 5).unwrap();
        let encoded = StreamEncoder::new(&charset)
            .encode(&[0, 9, 10, 99, 100, 5])
            .unwrap();
        assert_eq!(encoded, b"09##0199###001#5");
    }

    #[test]
    fn test_should_shrink_order() {
        // scanned == 1 with a wider unit does not trigger a shrink by itself
        assert!(should_shrink(&[1, 3], 2, 1));
        assert!(!should_shrink(&[1, 2], 2, 1));
        assert!(should_shrink(&[1, 1, 3, 2], 2, 1));
        assert!(!should_shrink(&[1, 1, 1, 2], 2, 1));
        assert!(should_shrink(&[1, 1, 1, 1, 2], 2, 1));
    }
}
