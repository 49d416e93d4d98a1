use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use movie_search_core::embedding::EmbeddingProvider;
use movie_search_core::search::Ranker;

use crate::config::Config;
use crate::corpus::{self, CsvCorpusSource};
use crate::embedding;
use crate::format;

/// Ranker over the configured provider, with the configured default
/// catalog as its lazy corpus source.
pub fn build_ranker(config: &Config) -> Result<Ranker<Box<dyn EmbeddingProvider>>> {
    let provider = embedding::create_provider(&config.embedding)
        .context("Failed to create embedding provider")?;
    debug!(
        provider = %config.embedding.provider,
        model = provider.model_name(),
        "Embedding provider ready"
    );

    Ok(Ranker::new(provider)
        .with_batch_size(config.embedding.batch_size)
        .with_default_source(CsvCorpusSource::new(config.data.csv.clone())))
}

/// Run one query and print the result table.
///
/// An explicit `csv` is loaded up front, so a bad file fails before the
/// query is looked at. Without it the default catalog is loaded on demand.
pub fn run_search(config: &Config, query: &str, top_n: i64, csv: Option<PathBuf>) -> Result<()> {
    let mut ranker = build_ranker(config)?;

    if let Some(path) = csv {
        let corpus = corpus::load_movies(Some(path.as_path()))?;
        ranker.build_index(corpus);
    }

    let results = ranker.search(query, top_n)?;
    let table = format::render_table(&results, config.display.max_colwidth);
    print!("{}", table);
    Ok(())
}
