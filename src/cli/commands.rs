// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`.
//
// Every `prepare` flag is optional. Unset flags keep the value
// from --config (if given) or the built-in default, so running
// with no arguments at all reproduces the fixed pipeline:
//   IMDB Dataset.csv → train.txt / test.txt, 80%, seed 42
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::PipelineConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the CSV into fastText train/test files (default)
    Prepare(PrepareArgs),

    /// Print the record count and sentiment distribution
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command
#[derive(Args, Debug, Default)]
pub struct PrepareArgs {
    /// JSON file with any of: input_path, train_path, test_path,
    /// train_fraction, seed
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV file with `review` and `sentiment` columns
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the training lines
    #[arg(long)]
    pub train_output: Option<PathBuf>,

    /// Where to write the test lines
    #[arg(long)]
    pub test_output: Option<PathBuf>,

    /// Share of rows sampled into the training file
    #[arg(long)]
    pub train_fraction: Option<f64>,

    /// Seed for the train/test permutation
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PrepareArgs {
    /// Resolve the effective config: file (or defaults), then flags.
    /// The application layer never sees clap types.
    pub fn into_config(self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None       => PipelineConfig::default(),
        };

        if let Some(p) = self.input          { cfg.input_path     = p; }
        if let Some(p) = self.train_output   { cfg.train_path     = p; }
        if let Some(p) = self.test_output    { cfg.test_path      = p; }
        if let Some(f) = self.train_fraction { cfg.train_fraction = f; }
        if let Some(s) = self.seed           { cfg.seed           = s; }

        Ok(cfg)
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV file with `review` and `sentiment` columns
    #[arg(long, default_value = "IMDB Dataset.csv")]
    pub input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
