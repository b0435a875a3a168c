//! BibTeX formatting module
//!
//! Serializes a [`RawEntry`] into the canonical layout: header line with the
//! derived key, one field per line indented by two spaces, closing brace on
//! its own line.

use super::cite_key::derive_cite_key;
use super::entry::RawEntry;
use super::error::FormatError;
use super::parser::parse_raw_entry;

const INDENT: &str = "  ";

/// Reformat raw BibTeX text with a title-derived cite key
pub fn format_bibtex(raw: &str) -> Result<String, FormatError> {
    let entry = parse_raw_entry(raw)?;
    let key = derive_cite_key(&entry.cite_key, entry.title.as_deref());
    Ok(format_entry(&entry, &key))
}

/// Format an entry under the given cite key
pub fn format_entry(entry: &RawEntry, key: &str) -> String {
    let mut result = String::new();

    // Entry type and cite key
    result.push('@');
    result.push_str(&entry.entry_type);
    result.push('{');
    result.push_str(key);
    result.push(',');
    result.push('\n');

    // Fields, no trailing comma on the last one
    for (i, field) in entry.fields.iter().enumerate() {
        result.push_str(INDENT);
        result.push_str(field);
        if i + 1 < entry.fields.len() {
            result.push(',');
        }
        result.push('\n');
    }

    result.push('}');
    result
}
