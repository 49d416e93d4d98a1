//! # Movie Search Core
//!
//! Pure logic for Movie Search: records and corpus normalization, the
//! corpus source and provider traits, vector math, and the similarity
//! ranker.
//!
//! This crate does no file or network I/O of its own. The application
//! crate supplies a [`source::CorpusSource`] (CSV loader) and an
//! [`embedding::EmbeddingProvider`] (fastembed, OpenAI, Ollama) and drives a
//! [`search::Ranker`].

pub mod embedding;
pub mod error;
pub mod models;
pub mod search;
pub mod source;

pub use error::{Result, SearchError};
