//! Raw BibTeX entry structure

/// A BibTeX entry split into header and field fragments.
///
/// Fields are kept as verbatim `key=value` text in source order; values are
/// never unquoted or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub entry_type: String,
    pub cite_key: String,
    pub title: Option<String>,
    pub fields: Vec<String>,
}

impl RawEntry {
    /// Create an entry with no title and no fields
    pub fn new(entry_type: impl Into<String>, cite_key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            cite_key: cite_key.into(),
            title: None,
            fields: Vec::new(),
        }
    }

    /// Append a verbatim field fragment
    pub fn add_field(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Name of each field (the text before `=`), trimmed
    pub fn field_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|f| f.split('=').next().unwrap_or(f.as_str()).trim())
            .collect()
    }

    /// Get a field fragment by name (case-insensitive)
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| {
                f.split_once('=')
                    .map(|(key, _)| key.trim().eq_ignore_ascii_case(name))
                    .unwrap_or(false)
            })
            .map(|f| f.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let mut entry = RawEntry::new("article", "Smith2024");
        entry.add_field("title={A Great Paper}");
        entry.add_field("Author = {Smith, John}");
        entry.add_field("month=sep");

        assert_eq!(entry.field_names(), vec!["title", "Author", "month"]);
    }

    #[test]
    fn test_get_field_case_insensitive() {
        let mut entry = RawEntry::new("article", "Smith2024");
        entry.add_field("DOI={10.1234/test}");
        entry.add_field("year={2024}");

        assert_eq!(entry.get_field("doi"), Some("DOI={10.1234/test}"));
        assert_eq!(entry.get_field("YEAR"), Some("year={2024}"));
        assert_eq!(entry.get_field("journal"), None);
    }
}
