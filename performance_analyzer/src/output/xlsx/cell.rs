//!
//! A spreadsheet cell value.
//!

///
/// A spreadsheet cell value.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A text label.
    Text(String),
    /// An integer measurement.
    Number(u64),
    /// No value, the cell is left blank.
    Empty,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<u64>> for Cell {
    fn from(value: Option<u64>) -> Self {
        value.map(Self::Number).unwrap_or(Self::Empty)
    }
}
