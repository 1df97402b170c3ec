// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Turns a Record into a fastText training line.
//
// Cleaning steps (applied in order):
//   1. Replace every '\n' with a single space
//   2. Lowercase the whole string (Unicode-aware)
//
// Nothing else is touched: '\r', tabs and repeated spaces
// survive as-is. The sentiment is concatenated verbatim
// onto the label prefix with no validation, so a blank or
// unexpected sentiment yields a label like "__label__" or
// "__label__3".
//
// Reference: Rust Book §8 (Strings in Rust)
//            fastText supervised input format

use crate::domain::record::Record;

/// fastText's default label prefix
pub const LABEL_PREFIX: &str = "__label__";

/// Replace newlines with spaces, then lowercase.
pub fn normalize_review(review: &str) -> String {
    review.replace('\n', " ").to_lowercase()
}

/// Prefix a sentiment with `__label__`.
pub fn format_label(sentiment: &str) -> String {
    format!("{LABEL_PREFIX}{sentiment}")
}

/// The fastText training line: `__label__<sentiment> <review>`
pub fn classifier_line(record: &Record) -> String {
    // Label first, then one space, then the cleaned text.
    // fastText splits on the first whitespace to find the label.
    format!(
        "{} {}",
        format_label(&record.sentiment),
        normalize_review(&record.review)
    )
}

/// Classifier lines for the records at `indices`, in the order given.
pub fn lines_for(records: &[Record], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| classifier_line(&records[i])).collect()
}
