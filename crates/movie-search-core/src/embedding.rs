//! Embedding provider trait and vector utilities.
//!
//! Defines the [`EmbeddingProvider`] trait that all embedding backends
//! implement, the [`EmbeddingMatrix`] built from a corpus, and pure helper
//! functions for normalization, scoring and rescaling.
//!
//! Concrete provider implementations (fastembed, OpenAI, Ollama) live in
//! the `movie-search` app crate.

use anyhow::{bail, Result};

/// Trait for embedding providers.
///
/// `embed` returns one vector per input text, in input order. When
/// `normalize` is true every vector must have unit L2 length (or be all
/// zeros), so that similarity reduces to a dot product.
pub trait EmbeddingProvider {
    /// Returns the model identifier (e.g. `"all-minilm-l6-v2"`).
    fn model_name(&self) -> &str;
    /// Returns the embedding vector dimensionality (e.g. `384`).
    fn dims(&self) -> usize;
    /// Embed a batch of texts.
    fn embed(&self, texts: &[String], normalize: bool) -> Result<Vec<Vec<f32>>>;
}

impl<P: EmbeddingProvider + ?Sized> EmbeddingProvider for Box<P> {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
    fn dims(&self) -> usize {
        (**self).dims()
    }
    fn embed(&self, texts: &[String], normalize: bool) -> Result<Vec<Vec<f32>>> {
        (**self).embed(texts, normalize)
    }
}

/// Unit-normalized embedding rows, aligned 1:1 with a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingMatrix {
    rows: Vec<Vec<f32>>,
}

impl EmbeddingMatrix {
    /// Wrap rows, checking they all share one dimensionality.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let dims = first.len();
            if let Some(pos) = rows.iter().position(|r| r.len() != dims) {
                bail!(
                    "Embedding row {} has {} dims, expected {}",
                    pos,
                    rows[pos].len(),
                    dims
                );
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row dimensionality, or `None` for an empty matrix.
    pub fn dims(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }
}

/// Scale a vector to unit L2 length in place. Zero vectors are left as is.
pub fn normalize_l2(vec: &mut [f32]) {
    let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm < f32::EPSILON {
        return;
    }
    for x in vec.iter_mut() {
        *x /= norm;
    }
}

/// Dot product of two equal-length vectors.
///
/// For unit vectors this equals cosine similarity. Returns `0.0` for
/// vectors of different lengths.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Map a cosine score from `[-1, 1]` onto `[0, 1]`.
///
/// `clamp((raw + 1) / 2, 0, 1)`. Out-of-range and NaN inputs still land in
/// `[0, 1]`; NaN maps to `0.0`.
pub fn rescale_similarity(raw: f32) -> f32 {
    let scaled = (raw + 1.0) / 2.0;
    if scaled.is_nan() {
        0.0
    } else {
        scaled.clamp(0.0, 1.0)
    }
}
