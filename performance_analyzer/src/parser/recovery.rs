//!
//! The malformed block recovery mode.
//!

///
/// The malformed block recovery mode.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// The line that failed to match is consumed together with the block.
    #[default]
    Consume,
    /// The line that failed to match is scanned again as an ordinary line,
    /// so a warm-up line swallowed by a malformed block still opens a block.
    Rescan,
}

impl std::str::FromStr for Recovery {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "consume" => Ok(Self::Consume),
            "rescan" => Ok(Self::Rescan),
            string => anyhow::bail!(
                "Unknown recovery mode `{string}`. Supported modes: {}",
                [Self::Consume, Self::Rescan]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Recovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consume => write!(f, "consume"),
            Self::Rescan => write!(f, "rescan"),
        }
    }
}
