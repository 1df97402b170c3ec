// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the source CSV and the two output files.
//
// The pipeline flows in this order:
//
//   IMDB Dataset.csv
//       │
//       ▼
//   CsvLoader         → reads rows into Records
//       │
//       ▼
//   Splitter          → one seeded permutation → train / test indices
//       │
//       ▼
//   Preprocessor      → "__label__<sentiment> <normalised review>"
//       │
//       ▼
//   Writer            → train.txt, test.txt
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the labelled CSV using the csv crate
pub mod loader;

/// Review normalisation and fastText label formatting
pub mod preprocessor;

/// Seeded train/test index partition
pub mod splitter;

/// Writes classifier lines to plain text files
pub mod writer;
