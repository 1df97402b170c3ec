// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline is written against RecordSource rather than a
// concrete loader, so it can be driven from a CSV file in
// production and from an in-memory Vec in tests.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::record::{Dataset, Record};

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full dataset.
///
/// Implementations:
///   - CsvLoader → reads a header-delimited CSV file
///   - Vec<Record> → already materialised records
pub trait RecordSource {
    /// Load every record, in source row order.
    fn load_all(&self) -> Result<Dataset>;
}

impl RecordSource for Vec<Record> {
    fn load_all(&self) -> Result<Dataset> {
        Ok(self.clone())
    }
}
