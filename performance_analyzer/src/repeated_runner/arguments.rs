//!
//! The repeated runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The repeated runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the per-run output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The test executable.
    #[arg(long, default_value = "./core_tests")]
    pub executable: PathBuf,

    /// The number of runs.
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// The directory where the `<test name>` subdirectory is created.
    #[arg(long, default_value = "analysis/test")]
    pub output_directory: PathBuf,

    /// The test name, used as the subdirectory name for logs and the summary.
    #[arg(long, default_value = "test-multisig_double_spend_alt_true-2")]
    pub test_name: String,

    /// The executable arguments, passed after `--`.
    #[arg(last = true)]
    pub arguments: Vec<String>,
}

impl Arguments {
    /// The executable arguments used if none are passed.
    pub const DEFAULT_EXECUTABLE_ARGUMENTS: [&'static str; 1] = ["--generate_and_play_test_data"];

    ///
    /// Validates the arguments and fills in the defaults.
    ///
    pub fn validate(mut self) -> anyhow::Result<Self> {
        if self.test_name.is_empty() {
            anyhow::bail!("The test name must not be empty");
        }
        if self.arguments.is_empty() {
            self.arguments = Self::DEFAULT_EXECUTABLE_ARGUMENTS
                .iter()
                .map(|argument| argument.to_string())
                .collect();
        }
        Ok(self)
    }
}
