//! Corpus source abstraction.
//!
//! A [`CorpusSource`] is how a [`crate::search::Ranker`] obtains its
//! default corpus when a search arrives before any corpus was loaded.
//! The application crate implements it for CSV files; [`StaticSource`]
//! serves a fixed in-memory corpus for tests and embedding callers.

use crate::error::Result;
use crate::models::Corpus;

/// Produces a corpus on demand.
pub trait CorpusSource {
    /// Human-readable description for logs (e.g. a file path).
    fn describe(&self) -> String;
    /// Load a fresh corpus.
    fn load(&self) -> Result<Corpus>;
}

/// A [`CorpusSource`] that always returns a clone of the same corpus.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    corpus: Corpus,
}

impl StaticSource {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl CorpusSource for StaticSource {
    fn describe(&self) -> String {
        format!("in-memory corpus ({} records)", self.corpus.len())
    }

    fn load(&self) -> Result<Corpus> {
        Ok(self.corpus.clone())
    }
}
