//! Vendor slugs derived from human-readable shop names.

use std::collections::HashSet;

use crate::error::SlugError;

/// Maximum length of a vendor slug.
pub const MAX_VENDOR_SLUG_LEN: usize = 100;

/// Normalize a shop name into a vendor slug.
///
/// Lowercase, runs of whitespace/underscore become single hyphens, every
/// other non-alphanumeric character is dropped, hyphen runs are collapsed,
/// leading/trailing hyphens stripped, and the result is cut to 100 chars.
///
/// Names that are empty or normalize to the empty string (e.g. `"!!!"`)
/// are rejected; callers fall back to ID-based routing rather than ever
/// seeing an empty slug.
pub fn generate_vendor_slug(name: &str) -> Result<String, SlugError> {
    if name.trim().is_empty() {
        return Err(SlugError::InvalidName(name.to_string()));
    }

    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() {
            slug.push(c);
        }
        // Everything else (punctuation, symbols, non-ASCII) is dropped.
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_VENDOR_SLUG_LEN {
        slug.truncate(MAX_VENDOR_SLUG_LEN);
        // The cut may expose a trailing hyphen.
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        return Err(SlugError::InvalidName(name.to_string()));
    }

    Ok(slug)
}

/// Generate a vendor slug that does not collide with `existing`.
///
/// The base slug is returned as-is when free; otherwise `-1`, `-2`, ... is
/// appended until a free candidate is found. The base is shortened when
/// needed so candidates never exceed 100 characters. Always terminates
/// because `existing` is finite; never mutates `existing`.
pub fn generate_unique_vendor_slug(
    name: &str,
    existing: &HashSet<String>,
) -> Result<String, SlugError> {
    let base = generate_vendor_slug(name)?;
    if !existing.contains(&base) {
        return Ok(base);
    }

    for counter in 1u64.. {
        let suffix = format!("-{}", counter);
        let mut candidate = base.clone();
        if candidate.len() + suffix.len() > MAX_VENDOR_SLUG_LEN {
            candidate.truncate(MAX_VENDOR_SLUG_LEN - suffix.len());
            while candidate.ends_with('-') {
                candidate.pop();
            }
        }
        candidate.push_str(&suffix);
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }

    unreachable!("counter space exceeds any finite existing-slug set")
}

/// Check whether a string is a valid vendor slug: `[a-z0-9]` segments
/// joined by single hyphens, 1..=100 characters, no leading/trailing or
/// repeated hyphen.
pub fn is_valid_vendor_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_VENDOR_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
