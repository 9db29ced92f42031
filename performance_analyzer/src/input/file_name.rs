//!
//! The performance result file name.
//!

use regex::Regex;

use crate::model::run::Run;

lazy_static::lazy_static! {
    /// The result file name grammar: `performance_tests_<branch>_<build type>.txt`,
    /// or `performance_tests_<branch>__.txt` without a build type.
    static ref FILE_NAME: Regex =
        Regex::new(r"^performance_tests_([A-Za-z0-9-]*)_(?:([A-Za-z]+)|_)\.txt$")
            .expect("Always valid");
}

///
/// The performance result file name.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    /// The branch token.
    pub branch: String,
    /// The build type token, [`Run::BUILD_TYPE_NONE`] if empty.
    pub build_type: String,
}

impl FileName {
    /// The glob pattern preselecting result files in a machine directory.
    pub const GLOB_PATTERN: &'static str = "performance_tests_*.txt";

    ///
    /// Parses the file name, returning `None` if it does not follow the grammar.
    ///
    pub fn parse(file_name: &str) -> Option<Self> {
        let captures = FILE_NAME.captures(file_name)?;
        let branch = captures.get(1)?.as_str().to_owned();
        let build_type = match captures.get(2) {
            Some(build_type) => build_type.as_str().to_owned(),
            None => Run::BUILD_TYPE_NONE.to_owned(),
        };
        Some(Self { branch, build_type })
    }
}
