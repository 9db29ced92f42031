//!
//! The performance analyzer library.
//!

pub mod chart;
pub mod harness;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;

pub use crate::chart::table::Table as ChartTable;
pub use crate::chart::Charts;
pub use crate::harness::outcome::Outcome as RunOutcome;
pub use crate::harness::summary::Summary as RepeatedRunSummary;
pub use crate::harness::Harness;
pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::run::Run;
pub use crate::model::test::Test;
pub use crate::model::Report;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::parser::recovery::Recovery;
pub use crate::parser::Parser;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
