//! Local-part normalization for minted addresses.

/// Local part used when the requested name normalizes to nothing.
pub const DEFAULT_NAME: &str = "user";

/// Maximum number of characters kept from a requested name.
pub const MAX_NAME_CHARS: usize = 64;

/// Normalizes a requested local part.
///
/// Strips all whitespace (including interior), lowercases, and truncates to
/// [`MAX_NAME_CHARS`]. An input that normalizes to the empty string yields
/// [`DEFAULT_NAME`].
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .take(MAX_NAME_CHARS)
        .collect();
    if name.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        name
    }
}

/// Normalizes an email address for use as an inbox key.
///
/// Addresses are compared trimmed and lowercased, so `A@x` and `a@x` name the
/// same inbox.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
