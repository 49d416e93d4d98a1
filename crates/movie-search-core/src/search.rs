//! Similarity ranker over an in-memory corpus.
//!
//! A [`Ranker`] owns the current [`Corpus`] and its [`EmbeddingMatrix`].
//! The matrix moves through two states: `Unindexed` until the first search
//! (or an explicit [`Ranker::rebuild`]) embeds every plot, then `Indexed`
//! until the corpus is replaced with [`Ranker::build_index`].
//!
//! # Ranking Algorithm
//!
//! 1. Validate: non-blank query, `top_n > 0`.
//! 2. Ensure the index (load the default corpus, embed plots in batches).
//! 3. Embed the query with unit normalization.
//! 4. Raw score per row: `dot(row, query)`, i.e. cosine similarity.
//! 5. Rescale: `clamp((raw + 1) / 2, 0, 1)`.
//! 6. Stable sort by score (desc); ties keep corpus order.
//! 7. Truncate to `min(top_n, corpus.len())`.

use anyhow::anyhow;
use tracing::{debug, info};

use crate::embedding::{dot, rescale_similarity, EmbeddingMatrix, EmbeddingProvider};
use crate::error::{Result, SearchError};
use crate::models::{Corpus, ScoredResult};
use crate::source::CorpusSource;

/// Number of plots sent to the provider per embedding call.
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Default result count for callers that don't choose one.
pub const DEFAULT_TOP_N: i64 = 5;

enum IndexState {
    Unindexed,
    Indexed(EmbeddingMatrix),
}

/// Search session owning a corpus, its embeddings, and a provider.
pub struct Ranker<P: EmbeddingProvider> {
    provider: P,
    batch_size: usize,
    default_source: Option<Box<dyn CorpusSource>>,
    corpus: Option<Corpus>,
    index: IndexState,
}

impl<P: EmbeddingProvider> Ranker<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            batch_size: DEFAULT_BATCH_SIZE,
            default_source: None,
            corpus: None,
            index: IndexState::Unindexed,
        }
    }

    /// Set the embedding batch size. Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Source used to load a corpus when a search arrives before
    /// [`Ranker::build_index`] was called.
    pub fn with_default_source(mut self, source: impl CorpusSource + 'static) -> Self {
        self.default_source = Some(Box::new(source));
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The currently loaded corpus, if any.
    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }

    /// Whether embeddings for the current corpus are cached.
    pub fn is_indexed(&self) -> bool {
        matches!(self.index, IndexState::Indexed(_))
    }

    /// Replace the corpus and discard any cached embeddings.
    ///
    /// Embedding is deferred to the next [`Ranker::search`] or
    /// [`Ranker::rebuild`].
    pub fn build_index(&mut self, corpus: Corpus) {
        debug!(records = corpus.len(), "Replacing corpus");
        self.corpus = Some(corpus);
        self.index = IndexState::Unindexed;
    }

    /// Embed the current corpus now, discarding any cached matrix.
    ///
    /// Loads the default corpus first if none is loaded.
    pub fn rebuild(&mut self) -> Result<()> {
        self.index = IndexState::Unindexed;
        self.ensure_index()
    }

    /// Rank the corpus against `query` and return the best `top_n` records.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidArgument`] for a blank query or `top_n < 1`.
    /// - [`SearchError::NoCorpus`] when nothing is loaded and no default
    ///   source is configured.
    /// - Loader errors from the default source.
    /// - [`SearchError::Provider`] when embedding fails or returns vectors
    ///   that don't line up with the corpus.
    pub fn search(&mut self, query: &str, top_n: i64) -> Result<Vec<ScoredResult>> {
        let top_n = validate_request(query, top_n)?;

        self.ensure_index()?;

        let (corpus, matrix) = match (&self.corpus, &self.index) {
            (Some(corpus), IndexState::Indexed(matrix)) => (corpus, matrix),
            _ => return Err(SearchError::NoCorpus),
        };

        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let query_vec = self
            .provider
            .embed(&[query.to_string()], true)?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Empty embedding response for query"))?;

        if let Some(dims) = matrix.dims() {
            if query_vec.len() != dims {
                return Err(anyhow!(
                    "Query embedding has {} dims, corpus embeddings have {}",
                    query_vec.len(),
                    dims
                )
                .into());
            }
        }

        let results = rank(matrix, &query_vec, top_n)
            .into_iter()
            .filter_map(|(idx, similarity)| {
                corpus.get(idx).map(|r| ScoredResult {
                    title: r.title.clone(),
                    plot: r.plot.clone(),
                    similarity,
                })
            })
            .collect();

        Ok(results)
    }

    fn ensure_corpus(&mut self) -> Result<()> {
        if self.corpus.is_some() {
            return Ok(());
        }
        let source = self.default_source.as_ref().ok_or(SearchError::NoCorpus)?;
        info!(source = %source.describe(), "Loading default corpus");
        let corpus = source.load()?;
        self.build_index(corpus);
        Ok(())
    }

    fn ensure_index(&mut self) -> Result<()> {
        self.ensure_corpus()?;
        if self.is_indexed() {
            return Ok(());
        }
        let corpus = self.corpus.as_ref().ok_or(SearchError::NoCorpus)?;
        let matrix = embed_corpus(&self.provider, corpus, self.batch_size)?;
        self.index = IndexState::Indexed(matrix);
        Ok(())
    }
}

/// Check a search request and return `top_n` as a count.
pub fn validate_request(query: &str, top_n: i64) -> Result<usize> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidArgument(
            "Query must be a non-empty string.".to_string(),
        ));
    }
    if top_n < 1 {
        return Err(SearchError::InvalidArgument(
            "top_n must be a positive integer.".to_string(),
        ));
    }
    Ok(usize::try_from(top_n).unwrap_or(usize::MAX))
}

/// Score every row against `query_vec` and return the best `top_n`
/// `(row index, rescaled similarity)` pairs, best first.
pub fn rank(matrix: &EmbeddingMatrix, query_vec: &[f32], top_n: usize) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| (idx, rescale_similarity(dot(row, query_vec))))
        .collect();

    // sort_by is stable: equal scores keep corpus order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored.truncate(top_n.min(matrix.len()));
    scored
}

/// Embed every plot of `corpus` in batches of `batch_size`.
///
/// A provider reporting `dims() > 0` must return vectors of exactly that
/// length; `0` means the dimensionality is only known from the response.
fn embed_corpus<P: EmbeddingProvider + ?Sized>(
    provider: &P,
    corpus: &Corpus,
    batch_size: usize,
) -> Result<EmbeddingMatrix> {
    let plots = corpus.plots();
    let declared = provider.dims();
    let mut rows = Vec::with_capacity(plots.len());

    for batch in plots.chunks(batch_size.max(1)) {
        let vectors = provider.embed(batch, true)?;
        if vectors.len() != batch.len() {
            return Err(anyhow!(
                "Provider returned {} embeddings for {} texts",
                vectors.len(),
                batch.len()
            )
            .into());
        }
        if declared > 0 {
            if let Some(v) = vectors.iter().find(|v| v.len() != declared) {
                return Err(anyhow!(
                    "Model {} returned {}-dimensional embeddings, expected {}",
                    provider.model_name(),
                    v.len(),
                    declared
                )
                .into());
            }
        }
        rows.extend(vectors);
    }

    info!(
        records = rows.len(),
        model = provider.model_name(),
        "Built embedding index"
    );
    Ok(EmbeddingMatrix::from_rows(rows)?)
}
