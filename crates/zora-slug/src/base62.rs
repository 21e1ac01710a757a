//! Base62 encoding of 128-bit integers.
//!
//! Alphabet order matters: index 0 is `'0'`, 10 is `'a'`, 36 is `'A'`.
//! `u128` covers the full UUID domain, so no bignum type is needed.

use crate::error::SlugError;

/// The 62-character slug alphabet.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u128 = 62;

/// Encode a 128-bit value as Base62, most-significant digit first.
///
/// Zero encodes as `"0"`. The result is at most 22 characters, since
/// 62^22 > 2^128.
pub fn encode_u128(value: u128) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(22);
    let mut remaining = value;
    while remaining > 0 {
        digits.push(ALPHABET[(remaining % BASE) as usize]);
        remaining /= BASE;
    }
    digits.reverse();

    // The alphabet is ASCII, so the byte vector is valid UTF-8.
    String::from_utf8(digits).unwrap_or_default()
}

/// Decode a Base62 string back into a 128-bit value.
///
/// Rejects the empty string, any character outside the alphabet, and
/// values that overflow 128 bits.
pub fn decode_u128(slug: &str) -> Result<u128, SlugError> {
    if slug.is_empty() {
        return Err(SlugError::EmptySlug);
    }

    let mut value: u128 = 0;
    for (position, character) in slug.chars().enumerate() {
        let digit = alphabet_index(character)
            .ok_or(SlugError::InvalidSlugCharacter { character, position })?;
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(SlugError::ValueOutOfRange)?;
    }

    Ok(value)
}

/// Map a character to its alphabet index, or `None` if it is not Base62.
fn alphabet_index(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_u128(0), "0");
    }

    #[test]
    fn test_encode_small_values() {
        assert_eq!(encode_u128(9), "9");
        assert_eq!(encode_u128(10), "a");
        assert_eq!(encode_u128(36), "A");
        assert_eq!(encode_u128(61), "Z");
        assert_eq!(encode_u128(62), "10");
    }

    #[test]
    fn test_round_trip_max() {
        let max = u128::MAX;
        let slug = encode_u128(max);
        assert!(slug.len() <= 22);
        assert_eq!(decode_u128(&slug).unwrap(), max);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_u128(""), Err(SlugError::EmptySlug));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode_u128("ab-c"),
            Err(SlugError::InvalidSlugCharacter {
                character: '-',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_overflow() {
        // One digit past the largest 22-character value that fits.
        let mut slug = encode_u128(u128::MAX);
        slug.push('0');
        assert_eq!(decode_u128(&slug), Err(SlugError::ValueOutOfRange));
    }

    #[test]
    fn test_round_trip_sweep() {
        for value in [1u128, 61, 62, 3843, 1 << 64, (1 << 127) + 12345] {
            assert_eq!(decode_u128(&encode_u128(value)).unwrap(), value);
        }
    }
}
