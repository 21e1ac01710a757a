//! Product slug codec: canonical UUID string <-> compact Base62 token.

use uuid::Uuid;

use crate::base62;
use crate::error::SlugError;

/// Byte offsets of the hyphens in a canonical UUID string.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Encode a canonical UUID string (8-4-4-4-12 hex, case-insensitive) as a
/// Base62 product slug.
///
/// The slug is deterministic and injective: distinct UUIDs never collide.
/// Output length is 1..=22 characters.
pub fn encode_product_slug(uuid: &str) -> Result<String, SlugError> {
    let value = parse_canonical_uuid(uuid)?;
    Ok(base62::encode_u128(value))
}

/// Decode a Base62 product slug back into a canonical lowercase UUID string.
pub fn decode_product_slug(slug: &str) -> Result<String, SlugError> {
    let value = base62::decode_u128(slug)?;
    Ok(format_canonical_uuid(value))
}

/// Encode a typed [`Uuid`]. Infallible: the type guarantees canonical form.
pub fn encode_uuid(uuid: &Uuid) -> String {
    base62::encode_u128(uuid.as_u128())
}

/// Decode a product slug into a typed [`Uuid`].
pub fn decode_to_uuid(slug: &str) -> Result<Uuid, SlugError> {
    Ok(Uuid::from_u128(base62::decode_u128(slug)?))
}

/// Check whether a string is a plausible product slug: non-empty and all
/// characters in `[0-9a-zA-Z]`.
pub fn is_valid_product_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse a canonical 8-4-4-4-12 UUID string into its 128-bit value.
fn parse_canonical_uuid(uuid: &str) -> Result<u128, SlugError> {
    let invalid = || SlugError::InvalidUuidFormat(uuid.to_string());

    if uuid.len() != 36 {
        return Err(invalid());
    }

    let bytes = uuid.as_bytes();
    let mut value: u128 = 0;
    for (offset, &byte) in bytes.iter().enumerate() {
        if HYPHEN_OFFSETS.contains(&offset) {
            if byte != b'-' {
                return Err(invalid());
            }
            continue;
        }
        let digit = (byte as char).to_digit(16).ok_or_else(invalid)?;
        value = (value << 4) | digit as u128;
    }

    Ok(value)
}

/// Render a 128-bit value as a canonical lowercase UUID string.
fn format_canonical_uuid(value: u128) -> String {
    let hex = format!("{:032x}", value);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
