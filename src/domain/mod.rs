// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing the dataset.
//
// Rules for this layer:
//   - NO file I/O
//   - NO csv or clap types
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One labelled review row
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
