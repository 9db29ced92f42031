//!
//! XLSX output format for performance data.
//!

pub mod cell;
pub mod worksheet;

use crate::model::Report;

use self::cell::Cell;
use self::worksheet::Worksheet;

///
/// XLSX output format for performance data.
///
pub struct Xlsx {
    /// One row per parsed test.
    pub tests_worksheet: Worksheet,
    /// One row per parsed run.
    pub runs_worksheet: Worksheet,
}

impl Xlsx {
    ///
    /// Creates a new XLSX workbook with empty worksheets.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let run_headers: [(&str, usize); 3] =
            [("Machine", 20), ("Branch", 20), ("Build Type", 16)];

        let tests_headers: Vec<(String, usize)> = run_headers
            .into_iter()
            .chain([
                ("Test", 40),
                ("First", 10),
                ("Second", 10),
                ("Status", 10),
                ("Loop Count", 12),
                ("Warm Up (ms)", 12),
                ("Elapsed (ms)", 12),
                ("Time Per Call", 12),
            ])
            .map(|(name, width)| (name.to_owned(), width))
            .collect();
        let runs_headers: Vec<(String, usize)> = run_headers
            .into_iter()
            .chain([("Tests", 10), ("Run Time (s)", 12)])
            .map(|(name, width)| (name.to_owned(), width))
            .collect();

        Ok(Self {
            tests_worksheet: Worksheet::new("Tests", tests_headers)?,
            runs_worksheet: Worksheet::new("Runs", runs_headers)?,
        })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.tests_worksheet.into_inner());
        workbook.push_worksheet(self.runs_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<&Report> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        for run in report.runs.iter() {
            for test in run.tests.iter() {
                xlsx.tests_worksheet.write_row(vec![
                    run.machine.as_str().into(),
                    run.branch.as_str().into(),
                    run.build_type.as_str().into(),
                    test.name.as_str().into(),
                    test.first.into(),
                    test.second.into(),
                    test.status.as_str().into(),
                    test.loop_count.into(),
                    test.warm_up.into(),
                    test.total_time.into(),
                    test.time_per_call.into(),
                ])?;
            }

            xlsx.runs_worksheet.write_row(vec![
                run.machine.as_str().into(),
                run.branch.as_str().into(),
                run.build_type.as_str().into(),
                (run.tests.len() as u64).into(),
                Cell::from(run.run_time),
            ])?;
        }

        Ok(xlsx)
    }
}
