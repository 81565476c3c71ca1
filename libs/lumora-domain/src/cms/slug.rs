//! URL slug derivation
//!
//! Slugs are derived deterministically from a post's title at save time.
//! They are not re-validated for uniqueness.

/// Derive a URL-safe slug from a title.
///
/// Lowercases, turns spaces into hyphens, and strips every character
/// outside `[a-z0-9-]`. Deterministic and idempotent.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}
