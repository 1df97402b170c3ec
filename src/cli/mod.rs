// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case.
// All work is delegated to Layer 2 (application).
//
// Commands:
//   1. `prepare`: CSV → train.txt / test.txt (also the default)
//   2. `inspect`: sentiment distribution of the CSV
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "fasttext-prep",
    version,
    about = "Convert a labelled review CSV into fastText train/test files.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// The subcommand to run; `prepare` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// `prepare` flags given without the subcommand name
    #[command(flatten)]
    pub prepare: PrepareArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // A bare invocation (with or without flags) is `prepare`
        match self.command {
            Some(Commands::Prepare(args)) => run_prepare(args),
            Some(Commands::Inspect(args)) => run_inspect(args),
            None                          => run_prepare(self.prepare),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let config = args.into_config()?;
    tracing::info!("Preparing fastText files from '{}'", config.input_path.display());

    let summary = PrepareUseCase::new(config).execute()?;

    println!(
        "Done: {} records → {} train, {} test",
        summary.total, summary.train, summary.test
    );
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(args.input).execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} records", report.total);
    for (label, count) in &report.counts {
        println!("  {:<12} {}", format!("{label:?}"), count);
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_prepare_with_defaults() {
        let cli = Cli::try_parse_from(["fasttext-prep"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.prepare.seed.is_none());
        assert!(cli.prepare.input.is_none());
    }

    #[test]
    fn test_prepare_flags_without_subcommand() {
        let cli = Cli::try_parse_from([
            "fasttext-prep",
            "--seed", "7",
            "--train-fraction", "0.5",
            "--input", "reviews.csv",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        let cfg = cli.prepare.into_config().unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.train_fraction, 0.5);
        assert_eq!(cfg.input_path, PathBuf::from("reviews.csv"));
    }

    #[test]
    fn test_explicit_prepare_subcommand() {
        let cli = Cli::try_parse_from(["fasttext-prep", "prepare", "--seed", "9"]).unwrap();
        match cli.command {
            Some(Commands::Prepare(args)) => assert_eq!(args.seed, Some(9)),
            other => panic!("expected prepare, got {other:?}"),
        }
    }

    #[test]
    fn test_inspect_subcommand() {
        let cli = Cli::try_parse_from(["fasttext-prep", "inspect", "--input", "x.csv", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Inspect(args)) => {
                assert_eq!(args.input, PathBuf::from("x.csv"));
                assert!(args.json);
            }
            other => panic!("expected inspect, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["fasttext-prep", "--bogus"]).is_err());
    }
}
