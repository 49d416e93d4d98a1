//! Core data models for Movie Search.
//!
//! A [`Corpus`] is the ordered list of [`Record`]s a ranker searches over.
//! Its indices line up 1:1 with the rows of the embedding matrix, so a
//! corpus is never mutated in place; replacing it means building a new one.

use serde::Serialize;

/// A single searchable movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    /// Plot text; always non-empty and trimmed once inside a [`Corpus`].
    pub plot: String,
}

impl Record {
    pub fn new(title: impl Into<String>, plot: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            plot: plot.into(),
        }
    }
}

/// Ordered, validated sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    /// Build a corpus from raw `(title, plot)` rows.
    ///
    /// Plots are trimmed and rows whose plot ends up empty are dropped.
    /// Titles are kept verbatim; order is preserved and indices are
    /// contiguous.
    pub fn from_rows<I, T, P>(rows: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
        T: Into<String>,
        P: AsRef<str>,
    {
        let records = rows
            .into_iter()
            .filter_map(|(title, plot)| {
                let plot = plot.as_ref().trim();
                if plot.is_empty() {
                    None
                } else {
                    Some(Record::new(title, plot))
                }
            })
            .collect();
        Self { records }
    }

    /// Build a corpus from records, applying the same plot normalization as
    /// [`Corpus::from_rows`].
    pub fn new(records: Vec<Record>) -> Self {
        Self::from_rows(records.into_iter().map(|r| (r.title, r.plot)))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plot texts in corpus order, as fed to the embedder.
    pub fn plots(&self) -> Vec<String> {
        self.records.iter().map(|r| r.plot.clone()).collect()
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub title: String,
    pub plot: String,
    /// Rescaled cosine similarity in `[0.0, 1.0]`.
    pub similarity: f32,
}
