//!
//! Output report format.
//!

///
/// Output report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The whole report, mirroring the inner data model.
    #[default]
    Json,
    /// One line per record, for plotting tools.
    Csv,
    /// Excel spreadsheet format.
    Xlsx,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Self; 3] = [Self::Json, Self::Csv, Self::Xlsx];
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                Self::ALL
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
