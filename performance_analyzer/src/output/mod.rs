//!
//! Performance report output.
//!

#[cfg(test)]
mod tests;

pub mod format;
pub mod xlsx;

use std::path::Path;

use crate::model::Report;

use self::format::Format;
use self::xlsx::Xlsx;

///
/// Performance report output.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to `path`, creating its parent directory if needed.
    ///
    /// Nothing is written if the output cannot be finalized.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Output directory {parent:?} creating: {error}")
            })?;
        }

        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Report, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, format): (Report, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Json => Output::SingleFile(serde_json::to_string(&report)?),
            Format::JsonPretty => Output::SingleFile(serde_json::to_string_pretty(&report)?),
            Format::Xlsx => Xlsx::try_from(&report)?.into(),
        })
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
