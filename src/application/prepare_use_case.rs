// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the full conversion in order:
//
//   Step 1: Load records          (Layer 4 - loader)
//   Step 2: Draw the split        (Layer 4 - splitter)
//   Step 3: Format + write train  (Layer 4 - preprocessor, writer)
//   Step 4: Format + write test   (Layer 4 - preprocessor, writer)
//
// The pipeline aborts on the first error. A train file that
// was already written stays on disk if the test write fails.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::data::{
    loader::CsvLoader,
    preprocessor::lines_for,
    splitter::Split,
    writer::write_lines,
};
use crate::domain::traits::RecordSource;

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Every field has a default, so a JSON config file only needs
// to mention what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_path:     PathBuf,
    pub train_path:     PathBuf,
    pub test_path:      PathBuf,
    pub train_fraction: f64,
    pub seed:           u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path:     PathBuf::from("IMDB Dataset.csv"),
            train_path:     PathBuf::from("train.txt"),
            test_path:      PathBuf::from("test.txt"),
            train_fraction: 0.8,
            seed:           42,
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file; missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config '{}'", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.train_fraction) {
            bail!(
                "train_fraction must be between 0 and 1, got {}",
                self.train_fraction
            );
        }
        Ok(())
    }
}

/// Row counts of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub total: usize,
    pub train: usize,
    pub test:  usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PipelineConfig,
}

impl PrepareUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline against the configured CSV file.
    pub fn execute(&self) -> Result<SplitSummary> {
        let loader = CsvLoader::new(&self.config.input_path);
        run_pipeline(&loader, &self.config)
    }
}

/// Load, split, format and write, reading records from `source`.
pub fn run_pipeline(source: &dyn RecordSource, cfg: &PipelineConfig) -> Result<SplitSummary> {
    cfg.validate()?;

    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let records = source.load_all()?;

    // ── Step 2: Split ─────────────────────────────────────────────────────────
    let split = Split::new(records.len(), cfg.train_fraction, cfg.seed);
    tracing::info!(
        "Split {} records: {} train, {} test (fraction {}, seed {})",
        records.len(),
        split.train.len(),
        split.test.len(),
        cfg.train_fraction,
        cfg.seed,
    );

    // ── Step 3: Train file, in sample order ───────────────────────────────────
    let train = write_lines(&cfg.train_path, lines_for(&records, &split.train))?;
    tracing::info!("Wrote {} lines to '{}'", train, cfg.train_path.display());

    // ── Step 4: Test file, in source order ────────────────────────────────────
    let test = write_lines(&cfg.test_path, lines_for(&records, &split.test))?;
    tracing::info!("Wrote {} lines to '{}'", test, cfg.test_path.display());

    Ok(SplitSummary { total: records.len(), train, test })
}
