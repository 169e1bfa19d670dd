// ============================================================
// CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `inspect` and `export`, and all
// their flags. clap's derive macros generate the help text,
// missing-argument errors, and type conversion.

use clap::{Args, Subcommand};

use crate::application::export_use_case::ExportConfig;
use crate::application::inspect_use_case::InspectConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show corpus statistics and preview prepared samples
    Inspect(InspectArgs),

    /// Write train/val splits, vocabulary, and label counts to disk
    Export(ExportArgs),
}

/// Arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory with train.csv, sample_submission.csv, and train/
    #[arg(long, default_value = "data/feedback")]
    pub data_dir: String,

    /// Number of prepared samples to preview
    #[arg(long, default_value_t = 3)]
    pub show: usize,

    /// Lowercase words after alignment
    #[arg(long)]
    pub lowercase: bool,
}

/// Convert CLI InspectArgs into the application-layer config —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            data_dir:  a.data_dir,
            show:      a.show,
            lowercase: a.lowercase,
        }
    }
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory with train.csv, sample_submission.csv, and train/
    #[arg(long, default_value = "data/feedback")]
    pub data_dir: String,

    /// Where to write train.jsonl, val.jsonl, vocabulary.json,
    /// and label_counts.csv
    #[arg(long, default_value = "prepared")]
    pub out_dir: String,

    /// Fraction of documents assigned to the training split
    #[arg(long, default_value_t = 0.9)]
    pub train_fraction: f64,

    /// Shuffle seed — the same seed reproduces the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Lowercase words after alignment
    #[arg(long)]
    pub lowercase: bool,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            data_dir:       a.data_dir,
            out_dir:        a.out_dir,
            train_fraction: a.train_fraction,
            seed:           a.seed,
            lowercase:      a.lowercase,
        }
    }
}
