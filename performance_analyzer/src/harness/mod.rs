//!
//! The repeated test executable runner.
//!

#[cfg(test)]
mod tests;

pub mod outcome;
pub mod summary;

use std::path::PathBuf;
use std::process::Stdio;

use colored::Colorize;

use self::outcome::Outcome;
use self::summary::Summary;

///
/// The repeated test executable runner.
///
/// Runs the executable serially, redirecting the standard output of every run
/// to `<directory>/<index>.log`, and buckets the runs by exit status.
///
#[derive(Debug, Clone)]
pub struct Harness {
    /// The test executable.
    pub executable: PathBuf,
    /// The executable arguments.
    pub arguments: Vec<String>,
    /// The number of runs.
    pub count: usize,
    /// The run logs and summary directory.
    pub directory: PathBuf,
    /// Whether the per-run output is suppressed.
    pub quiet: bool,
}

impl Harness {
    /// The summary file name.
    pub const SUMMARY_FILE_NAME: &'static str = "results.json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        executable: PathBuf,
        arguments: Vec<String>,
        count: usize,
        directory: PathBuf,
        quiet: bool,
    ) -> Self {
        Self {
            executable,
            arguments,
            count,
            directory,
            quiet,
        }
    }

    ///
    /// Runs the executable `count` times and writes the summary file.
    ///
    pub fn run(&self) -> anyhow::Result<Summary> {
        std::fs::create_dir_all(self.directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Output directory {:?} creating: {error}", self.directory)
        })?;

        let mut summary = Summary::new(self.count);
        for index in 0..self.count {
            let outcome = self.run_once(index)?;
            if !self.quiet {
                let outcome_text = match outcome {
                    Outcome::Success => outcome.to_string().green(),
                    Outcome::Fail => outcome.to_string().bright_red(),
                    Outcome::SegmentationFault => outcome.to_string().red(),
                };
                println!(
                    "    {} run {}/{}: {outcome_text}",
                    "Finished".bright_green().bold(),
                    index + 1,
                    self.count,
                );
            }
            summary.push(index, outcome);
        }

        self.write_summary(&summary)?;
        Ok(summary)
    }

    ///
    /// Runs the executable once, waiting for it to exit.
    ///
    pub fn run_once(&self, index: usize) -> anyhow::Result<Outcome> {
        let log_path = self.directory.join(format!("{index}.log"));
        let log_file = std::fs::File::create(log_path.as_path())
            .map_err(|error| anyhow::anyhow!("Run log {log_path:?} creating: {error}"))?;

        let mut command = std::process::Command::new(self.executable.as_path());
        command.args(self.arguments.iter());
        command.stdout(Stdio::from(log_file));

        let status = command.status().map_err(|error| {
            anyhow::anyhow!("{:?} subprocess running error: {:?}", self.executable, error)
        })?;
        let outcome = Outcome::from(status);
        log::debug!("Run #{index} exited with {status}: {outcome}");

        Ok(outcome)
    }

    ///
    /// Writes the summary to the output directory.
    ///
    fn write_summary(&self, summary: &Summary) -> anyhow::Result<()> {
        let path = self.directory.join(Self::SUMMARY_FILE_NAME);
        let content = serde_json::to_string(summary)?;
        std::fs::write(path.as_path(), content)
            .map_err(|error| anyhow::anyhow!("Summary file {path:?} writing: {error}"))?;
        Ok(())
    }
}
