//! # Movie Search
//!
//! Semantic search over a small movie catalog: embed every plot once, embed
//! the query, rank by cosine similarity, print the top matches.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌───────────────┐
//! │ movies.csv │──▶│ Corpus       │──▶│ Ranker        │──▶ table
//! │ title,plot │   │ (trim, drop) │   │ embed + rank  │
//! └────────────┘   └──────────────┘   └───────┬───────┘
//!                                             │
//!                                 ┌───────────▼──────────┐
//!                                 │ EmbeddingProvider    │
//!                                 │ fastembed/OpenAI/... │
//!                                 └──────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! movie-search "spy thriller in Paris"
//! movie-search "space opera" --top_n 3 --csv ./data/movies.csv
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`corpus`] | CSV catalog loader |
//! | [`embedding`] | Embedding provider backends |
//! | [`format`] | Result table rendering |
//! | [`search`] | CLI search command |
//!
//! The ranking algorithm, data models and error types live in
//! [`movie_search_core`].

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod format;
pub mod search;
