//!
//! The chart data table of a single build type.
//!

use crate::model::run::Run;
use crate::model::Report;

///
/// The chart data table of a single build type.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The build type.
    pub build_type: String,
    /// The chart titles, taken from the tests of the first run.
    pub tests: Vec<String>,
    /// One row per run, in report order.
    pub rows: Vec<Row>,
}

///
/// The chart data of a single run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The `<machine> <branch>` label.
    pub label: String,
    /// The `(warm up, total time)` pairs matched to [`Table::tests`] by position.
    pub measurements: Vec<Option<(u64, u64)>>,
    /// The run time in seconds.
    pub run_time: Option<u64>,
}

impl Table {
    ///
    /// Selects the runs of `build_type`, returning `None` if there are none.
    ///
    pub fn new(report: &Report, build_type: &str) -> Option<Self> {
        let runs: Vec<&Run> = report.select_build_type(build_type).collect();
        let reference = runs.first()?;

        let tests: Vec<String> = reference
            .tests
            .iter()
            .map(|test| test.name.clone())
            .collect();

        let rows = runs
            .iter()
            .map(|run| {
                for (index, name) in tests.iter().enumerate() {
                    match run.tests.get(index) {
                        Some(test) if &test.name != name => log::warn!(
                            "{}: test #{index} is `{}`, charted as `{name}`",
                            run.label(),
                            test.name,
                        ),
                        None => log::warn!("{}: test #{index} `{name}` is missing", run.label()),
                        _ => {}
                    }
                }

                Row {
                    label: run.label(),
                    measurements: (0..tests.len())
                        .map(|index| {
                            run.tests
                                .get(index)
                                .map(|test| (test.warm_up, test.total_time))
                        })
                        .collect(),
                    run_time: run.run_time,
                }
            })
            .collect();

        Some(Self {
            build_type: build_type.to_owned(),
            tests,
            rows,
        })
    }
}
