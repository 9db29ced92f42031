//!
//! The performance parser arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance parser arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The directory with one subdirectory of result files per machine.
    #[arg(long, default_value = "results")]
    pub base_path: PathBuf,

    /// The output file.
    #[arg(long, default_value = "out/results.json")]
    pub output_path: PathBuf,

    /// Output format: `json`, `json-pretty`, or `xlsx`.
    #[arg(long, default_value_t = performance_analyzer::OutputFormat::Json)]
    pub output_format: performance_analyzer::OutputFormat,

    /// Malformed test block recovery: `consume` or `rescan`.
    /// With `rescan`, the line that broke a block is scanned again.
    #[arg(long, default_value_t = performance_analyzer::Recovery::Consume)]
    pub recovery: performance_analyzer::Recovery,
}
