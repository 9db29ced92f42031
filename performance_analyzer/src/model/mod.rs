//!
//! The performance report representation.
//!

pub mod run;

use std::path::PathBuf;

use self::run::Run;

///
/// The performance report representation.
///
/// Serialized as a flat JSON array of runs in input file order.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Report {
    /// The parsed runs.
    pub runs: Vec<Run>,
}

impl Report {
    ///
    /// Appends a fully scanned run.
    ///
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    ///
    /// Returns the runs with the specified build type, in report order.
    ///
    pub fn select_build_type<'a>(&'a self, build_type: &'a str) -> impl Iterator<Item = &'a Run> {
        self.runs
            .iter()
            .filter(move |run| run.build_type == build_type)
    }

    ///
    /// Returns the total number of parsed tests.
    ///
    pub fn tests_count(&self) -> usize {
        self.runs.iter().map(|run| run.tests.len()).sum()
    }
}

impl TryFrom<PathBuf> for Report {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} reading: {error}"))?;
        let json: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} parsing: {error}"))?;
        Ok(json)
    }
}
