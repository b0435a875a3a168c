//! DOI handling for doi2bib
//!
//! This crate provides:
//! - DOI normalization (stripping `doi.org` resolver prefixes)
//! - Resolver configuration
//! - BibTeX resolution through doi.org content negotiation

pub mod config;
pub mod doi;
pub mod error;
pub mod http;
pub mod resolver;

pub use config::*;
pub use doi::*;
pub use error::*;
pub use resolver::*;
