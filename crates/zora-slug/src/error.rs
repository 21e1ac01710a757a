//! Slug codec error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding slugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// Encode called with a string that is not a canonical UUID.
    #[error("Invalid UUID format: {0:?}")]
    InvalidUuidFormat(String),

    /// Decode called with an empty slug.
    #[error("Slug is empty")]
    EmptySlug,

    /// Decode called with a character outside the Base62 alphabet.
    #[error("Invalid slug character {character:?} at position {position}")]
    InvalidSlugCharacter { character: char, position: usize },

    /// Decoded value does not fit in 128 bits, so it cannot name a UUID.
    #[error("Slug value exceeds the 128-bit UUID range")]
    ValueOutOfRange,

    /// Vendor slug generation called with an empty name, or a name that
    /// normalizes to the empty string.
    #[error("Invalid vendor name: {0:?}")]
    InvalidName(String),
}
