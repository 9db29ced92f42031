//!
//! The repeated run summary.
//!

use colored::Colorize;

use super::outcome::Outcome;

///
/// The repeated run summary.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    /// The outcome counters.
    pub stats: Stats,
    /// The requested number of runs.
    pub test_count: usize,
    /// The indexes of successful runs.
    pub success: Vec<usize>,
    /// The indexes of failed runs.
    pub fail: Vec<usize>,
    /// The indexes of runs that crashed with a segmentation fault.
    pub segmentation_fault: Vec<usize>,
}

///
/// The outcome counters.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    /// The successful runs counter.
    pub success: usize,
    /// The failed runs counter.
    pub fail: usize,
    /// The segmentation fault counter.
    pub segmentation_fault: usize,
    /// The executed runs counter.
    pub total: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(test_count: usize) -> Self {
        Self {
            test_count,
            ..Self::default()
        }
    }

    ///
    /// Records the outcome of the run with the given index.
    ///
    pub fn push(&mut self, index: usize, outcome: Outcome) {
        match outcome {
            Outcome::Success => {
                self.success.push(index);
                self.stats.success += 1;
            }
            Outcome::Fail => {
                self.fail.push(index);
                self.stats.fail += 1;
            }
            Outcome::SegmentationFault => {
                self.segmentation_fault.push(index);
                self.stats.segmentation_fault += 1;
            }
        }
        self.stats.total += 1;
    }

    ///
    /// Whether every run has succeeded.
    ///
    pub fn is_successful(&self) -> bool {
        self.stats.success == self.stats.total
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔═══════════════════════╡ REPEATED RUNS ╞══════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:18}                        {:10}     ║",
            "SUCCESS".green(),
            self.stats.success.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:18}                        {:10}     ║",
            "FAIL".bright_red(),
            self.stats.fail.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:18}                        {:10}     ║",
            "SEGMENTATION FAULT".red(),
            self.stats.segmentation_fault.to_string().red(),
        )?;
        writeln!(
            f,
            "║               {:10} RUNS TOTAL                          ║",
            self.stats.total,
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
