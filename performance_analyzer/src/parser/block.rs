//!
//! The result of parsing a test block.
//!

use crate::model::test::Test;

///
/// The result of parsing a test block.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Block {
    /// All four block lines matched.
    Complete(Test),
    /// A block line did not match or the input ended inside the block.
    Discarded {
        /// The line that was expected.
        stage: Stage,
        /// The consumed line that failed to match, or `None` at the end of input.
        line: Option<String>,
    },
}

///
/// The block line kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The test name, parameters and status.
    Header,
    /// The loop count.
    LoopCount,
    /// The total elapsed time.
    Elapsed,
    /// The time per call.
    TimePerCall,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "test header"),
            Self::LoopCount => write!(f, "loop count"),
            Self::Elapsed => write!(f, "elapsed"),
            Self::TimePerCall => write!(f, "time per call"),
        }
    }
}
