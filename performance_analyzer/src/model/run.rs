//!
//! A performance test run parsed from a single result file.
//!

use super::test::Test;

///
/// A performance test run parsed from a single result file.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Run {
    /// The machine directory name.
    pub machine: String,
    /// The branch the tests were built from.
    pub branch: String,
    /// The build type, or [`Run::BUILD_TYPE_NONE`] if the file name does not specify one.
    pub build_type: String,
    /// The tests in file order.
    pub tests: Vec<Test>,
    /// The whole run time in seconds, if the log contains a summary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_time: Option<u64>,
}

impl Run {
    /// The build type used when the file name build type segment is empty.
    pub const BUILD_TYPE_NONE: &'static str = "notype";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(machine: String, branch: String, build_type: String) -> Self {
        Self {
            machine,
            branch,
            build_type,
            tests: Vec::new(),
            run_time: None,
        }
    }

    ///
    /// Returns the label identifying the run in charts and tables.
    ///
    pub fn label(&self) -> String {
        format!("{} {}", self.machine, self.branch)
    }
}
