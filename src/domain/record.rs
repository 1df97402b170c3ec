// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One row of the source table: a free-text review and its
// sentiment label. Records are never mutated after loading;
// the fastText line is derived from them in the data layer
// (see data::preprocessor::classifier_line).
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A single labelled review, in source row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Free-text review, may contain embedded newlines
    pub review: String,

    /// Categorical label, e.g. "positive" / "negative".
    /// Not validated.
    pub sentiment: String,
}

/// An ordered collection of records; index = source row position.
pub type Dataset = Vec<Record>;

impl Record {
    pub fn new(review: impl Into<String>, sentiment: impl Into<String>) -> Self {
        Self {
            review:    review.into(),
            sentiment: sentiment.into(),
        }
    }
}
