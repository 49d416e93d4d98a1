//! CSV corpus loader.
//!
//! Reads a movie catalog with `title` and `plot` columns into a
//! [`Corpus`]. Extra columns are ignored. Plots are trimmed and rows with
//! an empty plot are dropped; nothing else is rewritten.

use std::path::{Path, PathBuf};

use movie_search_core::models::Corpus;
use movie_search_core::source::CorpusSource;
use movie_search_core::{Result, SearchError};
use tracing::debug;

/// File name of the default catalog, looked up next to the executable.
pub const DEFAULT_CSV_NAME: &str = "movies.csv";

const TITLE_COLUMN: &str = "title";
const PLOT_COLUMN: &str = "plot";

/// `movies.csv` in the directory of the running executable.
pub fn default_csv_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CSV_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_NAME))
}

/// Load a corpus from `path`, or from [`default_csv_path`] when `None`.
///
/// # Errors
///
/// - [`SearchError::NotFound`] if the file does not exist.
/// - [`SearchError::Schema`] if the `title` or `plot` column is missing.
/// - [`SearchError::Csv`] if the file cannot be opened or parsed.
pub fn load_movies(path: Option<&Path>) -> Result<Corpus> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_csv_path);

    if !path.exists() {
        return Err(SearchError::NotFound { path });
    }

    let csv_err = |e: csv::Error| SearchError::Csv {
        path: path.clone(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?.clone();
    let title_idx = headers.iter().position(|h| h == TITLE_COLUMN);
    let plot_idx = headers.iter().position(|h| h == PLOT_COLUMN);

    let (title_idx, plot_idx) = match (title_idx, plot_idx) {
        (Some(t), Some(p)) => (t, p),
        (t, p) => {
            let missing: Vec<&str> = [(t, TITLE_COLUMN), (p, PLOT_COLUMN)]
                .iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| *name)
                .collect();
            return Err(SearchError::Schema(format!(
                "CSV must contain 'title' and 'plot' columns (missing: {}).",
                missing.join(", ")
            )));
        }
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let title = record.get(title_idx).unwrap_or_default().to_string();
        let plot = record.get(plot_idx).unwrap_or_default().to_string();
        rows.push((title, plot));
    }

    let total = rows.len();
    let corpus = Corpus::from_rows(rows);
    debug!(
        path = %path.display(),
        loaded = corpus.len(),
        dropped = total - corpus.len(),
        "Loaded movie catalog"
    );

    Ok(corpus)
}

/// [`CorpusSource`] backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvCorpusSource {
    path: Option<PathBuf>,
}

impl CsvCorpusSource {
    /// Source reading `path`, or the default catalog when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_csv_path)
    }
}

impl CorpusSource for CsvCorpusSource {
    fn describe(&self) -> String {
        self.path().display().to_string()
    }

    fn load(&self) -> Result<Corpus> {
        load_movies(self.path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("movies.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_selects_title_and_plot() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "year,title,plot,rating\n\
             1962,Dr. No,\"  A British agent investigates in Jamaica. \",7.2\n\
             1953,Roman Holiday,A princess explores Rome,8.0\n",
        );
        let corpus = load_movies(Some(path.as_path())).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.records()[0].title, "Dr. No");
        assert_eq!(
            corpus.records()[0].plot,
            "A British agent investigates in Jamaica."
        );
        assert_eq!(corpus.records()[1].title, "Roman Holiday");
    }

    #[test]
    fn test_blank_plots_dropped_and_reindexed() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "title,plot\nA,first\nB,\nC,\"   \"\nD,fourth\n");
        let corpus = load_movies(Some(path.as_path())).unwrap();
        let titles: Vec<&str> = corpus.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "D"]);
    }

    #[test]
    fn test_short_row_treated_as_empty_plot() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "title,plot\nLonely\nFull,has a plot\n");
        let corpus = load_movies(Some(path.as_path())).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.records()[0].title, "Full");
    }

    #[test]
    fn test_header_only_gives_empty_corpus() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "title,plot\n");
        let corpus = load_movies(Some(path.as_path())).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_missing_plot_column_is_schema_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "title,summary\nA,something\n");
        match load_movies(Some(path.as_path())) {
            Err(SearchError::Schema(msg)) => assert!(msg.contains("missing: plot")),
            other => panic!("expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_columns_named() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "name,summary\nA,something\n");
        match load_movies(Some(path.as_path())) {
            Err(SearchError::Schema(msg)) => assert!(msg.contains("missing: title, plot")),
            other => panic!("expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("movies.csv");
        fs::write(&path, b"title,plot\nA,\xff\xfe broken\n").unwrap();
        match load_movies(Some(path.as_path())) {
            Err(err @ SearchError::Csv { .. }) => {
                let expected = format!("Failed to read CSV {}: ", path.display());
                assert!(err.to_string().starts_with(&expected));
            }
            other => panic!("expected Csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_nonexistent_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.csv");
        match load_movies(Some(path.as_path())) {
            Err(SearchError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = load_movies(Some(Path::new("/definitely/not/here.csv"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Movies CSV not found at /definitely/not/here.csv"
        );
    }

    #[test]
    fn test_csv_source_loads_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "title,plot\nA,a plot\n");
        let source = CsvCorpusSource::new(Some(path.clone()));
        assert_eq!(source.describe(), path.display().to_string());
        assert_eq!(source.load().unwrap().len(), 1);
    }

    #[test]
    fn test_default_path_is_movies_csv() {
        assert_eq!(
            default_csv_path().file_name().and_then(|n| n.to_str()),
            Some(DEFAULT_CSV_NAME)
        );
    }
}
