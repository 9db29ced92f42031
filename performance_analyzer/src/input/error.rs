//!
//! Performance log input error.
//!

use std::path::PathBuf;

///
/// Performance log input error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base directory does not exist or is not a directory.
    #[error("Input directory {path:?} does not exist or is not a directory")]
    MissingDirectory {
        /// The path to the base directory.
        path: PathBuf,
    },
    /// Error listing a directory.
    #[error("Listing input directory {path:?}: {error}")]
    Listing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the directory.
        path: PathBuf,
    },
    /// Error building the result file search pattern.
    #[error("Input file pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The pattern.
        pattern: String,
    },
    /// Error reading a result file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
}
