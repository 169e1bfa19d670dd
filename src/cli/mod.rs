// ============================================================
// CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap. All
// business logic is delegated to the application layer; this
// layer only routes and prints.
//
// Two commands are supported:
//   1. `inspect` — corpus statistics and a sample preview
//   2. `export`  — write prepared splits to disk

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "discourse-prep",
    version = "0.1.0",
    about = "Prepare discourse-annotated essays as word-level label sequences."
)]
pub struct Cli {
    /// The subcommand to run (inspect or export)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// The handlers take only the args — `self` is consumed by the
    /// match, so they must not borrow it.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Export(args)  => Self::run_export(args),
        }
    }

    /// Handles the `inspect` subcommand.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(args.into());
        let report = use_case.execute()?;

        println!("documents:       {}", report.document_count);
        println!("annotation rows: {}", report.annotation_rows);
        println!("labels:");
        for (name, code) in &report.vocabulary {
            println!("  {code:>3}  {name}");
        }
        for sample in &report.preview {
            println!("\n{} ({} words)", sample.id, sample.words.len());
            for (word, label) in sample.words.iter().zip(&sample.labels).take(20) {
                println!("  {label:>3}  {word}");
            }
            if sample.words.len() > 20 {
                println!("  ... {} more words", sample.words.len() - 20);
            }
        }
        Ok(())
    }

    /// Handles the `export` subcommand.
    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        let use_case = ExportUseCase::new(args.into());
        let summary = use_case.execute()?;

        println!(
            "Export complete: {} train / {} val documents written to '{}'.",
            summary.train_count, summary.val_count, summary.out_dir
        );
        Ok(())
    }
}
