//!
//! Normalizer report output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::normalizer::report::Report;
use crate::output::csv::Csv;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::xlsx::Xlsx;

///
/// The serialized report.
///
pub enum Output {
    /// Text output written to a single file.
    SingleFile(String),
    /// Spreadsheet output written to a single file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Report directory {parent:?} creating: {error}")
            })?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(&Report, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, output_format): (&Report, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => Json::try_from(report)?.into(),
            Format::Csv => Csv::from(report).into(),
            Format::Xlsx => Xlsx::try_from(report)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
