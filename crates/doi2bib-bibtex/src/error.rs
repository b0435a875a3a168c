//! Normalizer error types

/// Error type for BibTeX normalization failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The input was empty
    #[error("Invalid BibTeX input")]
    InvalidInput,
    /// No `@type{key,` header was found
    #[error("Could not parse BibTeX entry")]
    Parse,
}
