//! Cite key derivation
//!
//! The new key is the resolver's key plus a short suffix taken from the
//! title, so entries from the same author and year stay distinguishable.

/// Maximum number of title characters carried into the key
pub const TITLE_PREFIX_LEN: usize = 7;

/// Separator between the original key and the title prefix
pub const KEY_SEPARATOR: char = '_';

/// First [`TITLE_PREFIX_LEN`] ASCII letters and digits of a title.
///
/// Everything else (spaces, punctuation, accented letters) is dropped. Case
/// is preserved.
pub fn title_prefix(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(TITLE_PREFIX_LEN)
        .collect()
}

/// Derive the output cite key from the original key and an optional title
///
/// Returns `key` unchanged when there is no title or the title has no ASCII
/// letters or digits.
pub fn derive_cite_key(key: &str, title: Option<&str>) -> String {
    let prefix = title.map(title_prefix).unwrap_or_default();
    if prefix.is_empty() {
        return key.to_string();
    }

    let mut result = String::with_capacity(key.len() + 1 + prefix.len());
    result.push_str(key);
    result.push(KEY_SEPARATOR);
    result.push_str(&prefix);
    result
}
