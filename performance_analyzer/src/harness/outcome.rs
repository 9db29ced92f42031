//!
//! The outcome of a single test executable run.
//!

use std::process::ExitStatus;

///
/// The outcome of a single test executable run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The process exited with code `0`.
    Success,
    /// The process exited with any other code or was killed by another signal.
    Fail,
    /// The process crashed with a segmentation fault.
    SegmentationFault,
}

impl Outcome {
    /// The exit code a shell reports for a process killed by `SIGSEGV`.
    pub const EXIT_CODE_SEGMENTATION_FAULT: i32 = 128 + Self::SIGNAL_SEGMENTATION_FAULT;

    /// The `SIGSEGV` signal number.
    pub const SIGNAL_SEGMENTATION_FAULT: i32 = 11;

    ///
    /// Classifies the exit code or, if the process was killed, the terminating signal.
    ///
    pub fn classify(code: Option<i32>, signal: Option<i32>) -> Self {
        match (code, signal) {
            (Some(0), _) => Self::Success,
            (Some(Self::EXIT_CODE_SEGMENTATION_FAULT), _) => Self::SegmentationFault,
            (None, Some(Self::SIGNAL_SEGMENTATION_FAULT)) => Self::SegmentationFault,
            _ => Self::Fail,
        }
    }
}

impl From<ExitStatus> for Outcome {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self::classify(status.code(), signal)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Fail => write!(f, "fail"),
            Self::SegmentationFault => write!(f, "segmentation fault"),
        }
    }
}
