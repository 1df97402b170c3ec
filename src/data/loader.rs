// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads the labelled review table using the csv crate.
//
// The file must have a header row with at least:
//   review     free text, may contain quoted newlines/commas
//   sentiment  categorical label, not validated
//
// Any further columns are ignored. Rows are deserialised
// straight into Record by header name via serde, and the
// reader is strict about row length: a row with more or
// fewer fields than the header is a parse error.
//
// Reference: csv crate documentation (ReaderBuilder, deserialize)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::domain::record::Record;
use crate::domain::traits::RecordSource;

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 2] = ["review", "sentiment"];

/// Loads every row of a comma-delimited file with a header.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<Record>> {
        let path = self.path.as_path();

        // Report a missing file by name, before csv wraps it in an io error
        if !path.exists() {
            bail!("input file '{}' not found", path.display());
        }

        // has_headers: first row names the columns
        // flexible(false): every row must have as many fields as the header
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_path(path)
            .with_context(|| format!("Cannot open '{}'", path.display()))?;

        // Clone the header row so the reader can be borrowed again below
        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{}'", path.display()))?
            .clone();

        // Check the columns up front so a wrong file fails with a clear
        // message instead of a serde "missing field" on the first row
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                bail!(
                    "'{}' has no '{}' column (header: [{}])",
                    path.display(),
                    column,
                    headers.iter().collect::<Vec<_>>().join(", ")
                );
            }
        }

        let mut records = Vec::new();

        // deserialize() maps fields by header name, so column order does
        // not matter and extra columns are skipped
        for (row, result) in reader.deserialize::<Record>().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let record = result.with_context(|| {
                format!("Malformed row {} in '{}'", row + 2, path.display())
            })?;
            records.push(record);
        }

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            path.display()
        );
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("reviews.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_rows_in_order() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "review,sentiment\nBad movie,negative\n\"Great\nFilm\",positive\n",
        );

        let records = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("Bad movie", "negative"),
                Record::new("Great\nFilm", "positive"),
            ]
        );
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "id,sentiment,review\n7,positive,\"Loved it, twice\"\n");

        let records = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(records, vec![Record::new("Loved it, twice", "positive")]);
    }

    #[test]
    fn test_unexpected_sentiment_is_kept() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "review,sentiment\nOdd,3\nBlank,\n");

        let records = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(records[0].sentiment, "3");
        assert_eq!(records[1].sentiment, "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv"))
            .load_all()
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_column() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "text,sentiment\nhello,positive\n");

        let err = CsvLoader::new(&path).load_all().unwrap_err();
        assert!(err.to_string().contains("'review'"));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "");

        assert!(CsvLoader::new(&path).load_all().is_err());
    }

    #[test]
    fn test_inconsistent_column_count() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "review,sentiment\nfine,positive\nextra,negative,oops\n");

        let err = CsvLoader::new(&path).load_all().unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }
}
