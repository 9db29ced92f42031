//!
//! Performance result directory input.
//!


pub mod error;
pub mod file_name;

use std::path::Path;
use std::path::PathBuf;

use crate::model::run::Run;
use crate::model::Report;
use crate::parser::Parser;

use self::error::Error as InputError;
use self::file_name::FileName;

///
/// Performance result directory input.
///
/// Every directory below the base path is a machine directory containing
/// `performance_tests_<branch>_<build type>.txt` files.
///
#[derive(Debug)]
pub struct Input {
    /// The base directory.
    pub base_path: PathBuf,
    /// The log parser.
    pub parser: Parser,
}

impl Input {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(base_path: PathBuf, parser: Parser) -> Self {
        Self { base_path, parser }
    }

    ///
    /// Parses all result files below the base directory.
    ///
    /// The directory tree is walked top-down: the children of a directory are
    /// processed in name order before any of them is descended into.
    ///
    pub fn collect(&self) -> Result<Report, InputError> {
        if !self.base_path.is_dir() {
            return Err(InputError::MissingDirectory {
                path: self.base_path.clone(),
            });
        }

        let mut report = Report::default();
        self.walk(self.base_path.as_path(), &mut report)?;
        Ok(report)
    }

    ///
    /// Parses the machine directories below `directory`, recursively.
    ///
    fn walk(&self, directory: &Path, report: &mut Report) -> Result<(), InputError> {
        let listing_error = |error| InputError::Listing {
            error,
            path: directory.to_path_buf(),
        };

        let mut subdirectories = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            if entry.file_type().map_err(listing_error)?.is_dir() {
                subdirectories.push(entry.path());
            }
        }
        subdirectories.sort();

        for subdirectory in subdirectories.iter() {
            let machine = subdirectory
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            self.parse_machine(subdirectory.as_path(), machine.as_str(), report)?;
        }
        for subdirectory in subdirectories.iter() {
            self.walk(subdirectory.as_path(), report)?;
        }

        Ok(())
    }

    ///
    /// Parses the result files of a single machine directory in lexicographic order.
    ///
    pub fn parse_machine(
        &self,
        directory: &Path,
        machine: &str,
        report: &mut Report,
    ) -> Result<(), InputError> {
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(directory.to_string_lossy().as_ref()),
            FileName::GLOB_PATTERN
        );
        let paths = glob::glob(pattern.as_str()).map_err(|error| InputError::Pattern {
            error,
            pattern: pattern.clone(),
        })?;

        for path in paths {
            let path = path.map_err(|error| InputError::Listing {
                path: error.path().to_path_buf(),
                error: error.into(),
            })?;
            if !path.is_file() {
                continue;
            }
            if let Some(run) = self.parse_file(path.as_path(), machine)? {
                report.push(run);
            }
        }

        Ok(())
    }

    ///
    /// Parses a single result file.
    ///
    /// Returns `None` if the file name does not follow the result file grammar.
    ///
    pub fn parse_file(&self, path: &Path, machine: &str) -> Result<Option<Run>, InputError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_name = match FileName::parse(file_name.as_str()) {
            Some(file_name) => file_name,
            None => {
                log::debug!("Skipping {path:?}: not a performance result file name");
                return Ok(None);
            }
        };

        let reading_error = |error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        };
        let file = std::fs::File::open(path).map_err(reading_error)?;

        let mut run = Run::new(machine.to_owned(), file_name.branch, file_name.build_type);
        self.parser
            .parse(std::io::BufReader::new(file), &mut run)
            .map_err(reading_error)?;
        log::debug!(
            "Parsed {path:?}: {} tests, run time {:?}",
            run.tests.len(),
            run.run_time
        );

        Ok(Some(run))
    }
}
