//! # Movie Search CLI (`movie-search`)
//!
//! Ranks a movie catalog against a free-text query and prints the best
//! matches as a table.
//!
//! ## Usage
//!
//! ```bash
//! movie-search "<query>" [--top_n N] [--csv PATH] [--config PATH]
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Search the catalog next to the binary
//! movie-search "spy thriller in Paris"
//!
//! # Three results from a specific file
//! movie-search "heist gone wrong" --top_n 3 --csv ./data/movies.csv
//!
//! # Debug logging on stderr
//! RUST_LOG=debug movie-search "romance in New York"
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use movie_search::{config, search};
use movie_search_core::search::DEFAULT_TOP_N;

/// Semantic search over movie plots using sentence embeddings.
///
/// Reads a CSV with `title` and `plot` columns, embeds every plot, and
/// prints the movies whose plots are closest in meaning to the query.
#[derive(Parser)]
#[command(
    name = "movie-search",
    about = "Semantic search over movie plots using sentence embeddings",
    version
)]
struct Cli {
    /// Search query, e.g. 'spy thriller in Paris'.
    query: String,

    /// Number of results to return.
    #[arg(
        long = "top_n",
        visible_alias = "top-n",
        default_value_t = DEFAULT_TOP_N,
        allow_negative_numbers = true
    )]
    top_n: i64,

    /// Path to the movies CSV. Defaults to `movies.csv` next to the binary
    /// or `[data].csv` from the config file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Path to a TOML configuration file.
    ///
    /// When omitted, `./config/movie-search.toml` is used if present,
    /// otherwise built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::resolve_config(cli.config.as_deref())?;

    search::run_search(&cfg, &cli.query, cli.top_n, cli.csv)?;

    Ok(())
}
