// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal per
// use case. No printing here (that's Layer 1) and no direct
// CSV parsing or text munging (that's Layer 4).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → transform → split → write
pub mod prepare_use_case;

// Label distribution report
pub mod inspect_use_case;
