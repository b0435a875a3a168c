//! BibTeX normalization
//!
//! Takes a single raw BibTeX entry, as returned by DOI content negotiation,
//! and re-serializes it in a canonical indented layout with a cite key that
//! carries a short title-derived suffix.
//!
//! Features:
//! - Nom-based header and title matching
//! - Brace-aware field splitting (commas inside `{...}` never split a field)
//! - Title-prefix cite keys (`Key_Abcdefg`)
//!
//! The transform is not idempotent: formatting already formatted output
//! appends a second suffix to the key.

mod cite_key;
mod entry;
mod error;
mod formatter;
pub mod parser;

pub use cite_key::{derive_cite_key, title_prefix, KEY_SEPARATOR, TITLE_PREFIX_LEN};
pub use entry::RawEntry;
pub use error::FormatError;
pub use formatter::{format_bibtex, format_entry};
pub use parser::{entry_body, fields_content, find_title, parse_header, parse_raw_entry, split_fields};
