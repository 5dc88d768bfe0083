//! Positional decoding of arbitrary-precision integers in bases 2 through 36.
//!
//! Digits are `0-9` followed by the letters `a-z`, matched case-insensitively.
//! Decoding never goes through a fixed-width integer, so values of any
//! magnitude are exact.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::RadixError;

/// Smallest supported base.
pub const MIN_RADIX: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Parse a base given in decimal notation and check that it is supported.
pub fn parse_radix(text: &str) -> Result<u32, RadixError> {
    text.parse::<u32>()
        .ok()
        .filter(|radix| (MIN_RADIX..=MAX_RADIX).contains(radix))
        .ok_or_else(|| RadixError::UnsupportedRadix(text.to_owned()))
}

/// Decode an unsigned digit string in `radix`.
pub fn decode_biguint(text: &str, radix: u32) -> Result<BigUint, RadixError> {
    decode_digits(text, radix, 0)
}

/// Decode a digit string in `radix` with an optional leading `+` or `-`.
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_math::radix::decode_bigint;
///
/// assert_eq!(decode_bigint("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode_bigint("-111", 2).unwrap(), BigInt::from(-7));
/// ```
pub fn decode_bigint(text: &str, radix: u32) -> Result<BigInt, RadixError> {
    let (sign, digits, offset) = match text.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &text[1..], 1),
        Some(b'+') => (Sign::Plus, &text[1..], 1),
        _ => (Sign::Plus, text, 0),
    };
    let magnitude = decode_digits(digits, radix, offset)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

fn decode_digits(
    text: &str,
    radix: u32,
    offset: usize,
) -> Result<BigUint, RadixError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(RadixError::UnsupportedRadix(radix.to_string()));
    }
    if text.is_empty() {
        return Err(RadixError::EmptyDigits);
    }

    let digits = text
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(radix)
                .map(|value| value as u8)
                .ok_or(RadixError::InvalidDigit {
                    digit,
                    position: position + offset,
                    radix,
                })
        })
        .collect::<Result<Vec<u8>, RadixError>>()?;

    // Every digit was checked against `radix`, so this only fails on a
    // radix outside 2..=256, which was rejected above.
    BigUint::from_radix_be(&digits, radix)
        .ok_or_else(|| RadixError::UnsupportedRadix(radix.to_string()))
}
