//!
//! The performance chart arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance chart arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The report produced by `performance-parser`.
    #[arg(long, default_value = "out/results.json")]
    pub input_path: PathBuf,

    /// The directory for `<build type>.xlsx` chart workbooks.
    #[arg(long, default_value = "out")]
    pub output_directory: PathBuf,

    /// Build types to chart, e.g. `Release`, `Debug`, `RelWithDebInfo`, `MinSizeRel`, `notype`.
    #[arg(long = "build-type", default_values_t = vec!["Release".to_owned()])]
    pub build_types: Vec<String>,
}
