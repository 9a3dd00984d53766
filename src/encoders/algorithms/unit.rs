//! Fixed-width positional representation of a single unit.
//!
//! A code block stores digits least-significant first: the digit at index
//! `i` has place value `radix ^ i`.

use crate::core::charset::Charset;

use super::errors::CodecError;

/// Exponentiation by squaring over `u64`.
///
/// Wraps on overflow. Every caller bounds `exponent` by the charset's
/// `max_code_length`, and [`Charset`] construction rejects any table whose
/// `radix ^ max_code_length` does not fit in 64 bits, so in-crate calls never
/// wrap.
pub fn pow(base: u64, exponent: u32) -> u64 {
    let mut result: u64 = 1;
    let mut base = base;
    let mut exponent = exponent;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    result
}

/// Smallest width `w >= 1` with `unit < radix ^ w`.
///
/// # Errors
///
/// `Overflow` if the unit is not below the charset's `max_code`.
pub fn minimal_width(unit: u64, charset: &Charset) -> Result<u8, CodecError> {
    if unit >= charset.max_code() {
        return Err(CodecError::Overflow {
            unit,
            max_code: charset.max_code(),
        });
    }

    let radix = charset.radix() as u64;
    let mut width = 1u8;
    let mut bound = radix;
    while bound <= unit {
        width += 1;
        // bound reaches max_code at width == max_code_length, which fits by construction
        bound = bound.saturating_mul(radix);
    }
    Ok(width)
}

/// Writes the digit values of `unit` into `digits`, least-significant first.
///
/// `digits.len()` is the block width. The caller guarantees
/// `unit < radix ^ width`; a narrower block is a programming error.
///
/// # Errors
///
/// `WidthOverflow` if the block is wider than `max_code_length`.
pub fn to_digits_into(unit: u64, charset: &Charset, digits: &mut [u8]) -> Result<(), CodecError> {
    let width = digits.len();
    if width > charset.max_code_length() as usize {
        return Err(CodecError::WidthOverflow {
            width,
            max_code_length: charset.max_code_length(),
        });
    }
    debug_assert!(
        unit < pow(charset.radix() as u64, width as u32),
        "unit {} does not fit in {} digits",
        unit,
        width
    );

    let radix = charset.radix() as u64;
    let mut rest = unit;
    for index in (0..width).rev() {
        let place = pow(radix, index as u32);
        let digit = rest / place;
        rest -= digit * place;
        digits[index] = digit as u8;
    }
    Ok(())
}

/// Allocating variant of [`to_digits_into`].
pub fn to_digits(unit: u64, width: u8, charset: &Charset) -> Result<Vec<u8>, CodecError> {
    let mut digits = vec![0u8; width as usize];
    to_digits_into(unit, charset, &mut digits)?;
    Ok(digits)
}

/// Reads a code block of symbol bytes back into a unit.
///
/// Bytes outside the charset count as digit 0. An empty block is 0.
///
/// # Errors
///
/// `WidthOverflow` if the block is wider than `max_code_length`.
pub fn from_digits(block: &[u8], charset: &Charset) -> Result<u64, CodecError> {
    if block.len() > charset.max_code_length() as usize {
        return Err(CodecError::WidthOverflow {
            width: block.len(),
            max_code_length: charset.max_code_length(),
        });
    }

    let radix = charset.radix() as u64;
    let mut unit: u64 = 0;
    let mut place: u64 = 1;
    for &symbol in block {
        let digit = charset.decode_byte(symbol).unwrap_or(0) as u64;
        unit += digit * place;
        // Wraps only past the last position, where place is no longer read.
        place = place.wrapping_mul(radix);
    }
    Ok(unit)
}
