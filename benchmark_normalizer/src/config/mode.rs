//!
//! Metric extraction mode.
//!

///
/// Metric extraction mode, selected once for the whole run.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Time per iteration, converted to the run's target unit.
    #[default]
    Time,
    /// Throughput in gigabytes per second.
    Throughput,
}

impl Mode {
    ///
    /// The unit of throughput metrics.
    ///
    pub const THROUGHPUT_UNIT: &'static str = "GB/s";

    ///
    /// Bytes per second in one throughput unit.
    ///
    pub const BYTES_PER_THROUGHPUT_UNIT: f64 = 1e9;
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "throughput" => Ok(Self::Throughput),
            string => anyhow::bail!(
                "Unknown metric mode `{string}`. Supported modes: {}",
                [Self::Time, Self::Throughput]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Time => write!(f, "time"),
            Mode::Throughput => write!(f, "throughput"),
        }
    }
}
