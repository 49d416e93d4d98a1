//! Error types for corpus loading and search.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by corpus loading and [`crate::search::Ranker`] operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SearchError {
    /// The corpus file does not exist.
    #[error("Movies CSV not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The corpus file lacks a required column.
    #[error("{0}")]
    Schema(String),

    /// Empty query or non-positive result count.
    #[error("{0}")]
    InvalidArgument(String),

    /// A search ran with no corpus loaded and no default source to load one.
    #[error("No corpus loaded and no default corpus source configured")]
    NoCorpus,

    /// The corpus file could not be parsed.
    #[error("Failed to read CSV {}: {message}", .path.display())]
    Csv { path: PathBuf, message: String },

    /// Embedding backend failure, passed through unchanged.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
