// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads the dataset and counts records per sentiment value.
// Labels are never rejected; values that would make a broken
// fastText label (empty, or containing whitespace, which
// fastText treats as a token boundary) are only reported.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::data::loader::CsvLoader;
use crate::domain::traits::RecordSource;

/// Record count per distinct sentiment value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelReport {
    pub total:  usize,
    pub counts: BTreeMap<String, usize>,
}

impl LabelReport {
    pub fn from_source(source: &dyn RecordSource) -> Result<Self> {
        let mut report = Self::default();
        for record in source.load_all()? {
            report.total += 1;
            *report.counts.entry(record.sentiment).or_insert(0) += 1;
        }
        Ok(report)
    }

    /// Sentiments that produce a malformed `__label__` token
    pub fn suspicious_labels(&self) -> Vec<&str> {
        self.counts
            .keys()
            .map(String::as_str)
            .filter(|s| s.is_empty() || s.chars().any(char::is_whitespace))
            .collect()
    }
}

pub struct InspectUseCase {
    input_path: PathBuf,
}

impl InspectUseCase {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self { input_path: input_path.into() }
    }

    pub fn execute(&self) -> Result<LabelReport> {
        let report = LabelReport::from_source(&CsvLoader::new(&self.input_path))?;

        for label in report.suspicious_labels() {
            tracing::warn!(
                "{} records have sentiment {:?}, which makes a malformed label",
                report.counts[label],
                label
            );
        }

        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    #[test]
    fn test_counts_per_label() {
        let records = vec![
            Record::new("a", "positive"),
            Record::new("b", "negative"),
            Record::new("c", "positive"),
        ];
        let report = LabelReport::from_source(&records).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.counts["positive"], 2);
        assert_eq!(report.counts["negative"], 1);
        assert!(report.suspicious_labels().is_empty());
    }

    #[test]
    fn test_flags_blank_and_spaced_labels() {
        let records = vec![
            Record::new("a", ""),
            Record::new("b", "very good"),
            Record::new("c", "3"),
        ];
        let report = LabelReport::from_source(&records).unwrap();
        assert_eq!(report.suspicious_labels(), vec!["", "very good"]);
    }

    #[test]
    fn test_reads_csv() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, "review,sentiment\nx,positive\ny,negative\n").unwrap();

        let report = InspectUseCase::new(&path).execute().unwrap();
        assert_eq!(report.total, 2);
    }
}
