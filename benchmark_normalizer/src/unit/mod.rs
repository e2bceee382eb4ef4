//!
//! Time units and the conversions between them.
//!

#[cfg(test)]
mod tests;

///
/// A time unit reported by the benchmarking tool.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds, `ns`.
    #[serde(rename = "ns")]
    Nanosecond,
    /// Microseconds, `us`.
    #[default]
    #[serde(rename = "us")]
    Microsecond,
    /// Milliseconds, `ms`.
    #[serde(rename = "ms")]
    Millisecond,
    /// Seconds, `s`.
    #[serde(rename = "s")]
    Second,
}

impl TimeUnit {
    ///
    /// All supported units, from the smallest to the largest.
    ///
    pub const ALL: [Self; 4] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
    ];

    ///
    /// The multiplier relative to microseconds.
    ///
    pub fn factor(&self) -> f64 {
        match self {
            Self::Nanosecond => 1e-3,
            Self::Microsecond => 1.0,
            Self::Millisecond => 1e3,
            Self::Second => 1e6,
        }
    }

    ///
    /// Converts `value` expressed in `self` into `target`.
    ///
    pub fn convert(&self, value: f64, target: Self) -> f64 {
        value * (self.factor() / target.factor())
    }

    ///
    /// Parses the unit, returning `None` for unknown abbreviations.
    ///
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "ns" => Some(Self::Nanosecond),
            "us" => Some(Self::Microsecond),
            "ms" => Some(Self::Millisecond),
            "s" => Some(Self::Second),
            _ => None,
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string.to_lowercase().as_str()).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown time unit `{string}`. Supported units: {}",
                Self::ALL
                    .iter()
                    .map(|unit| unit.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )
        })
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nanosecond => write!(f, "ns"),
            Self::Microsecond => write!(f, "us"),
            Self::Millisecond => write!(f, "ms"),
            Self::Second => write!(f, "s"),
        }
    }
}

///
/// Converts `value` from `unit_from` to `unit_to`.
///
/// If either unit is not recognized, the value is returned unchanged.
///
pub fn convert(value: f64, unit_from: &str, unit_to: &str) -> f64 {
    match (TimeUnit::parse(unit_from), TimeUnit::parse(unit_to)) {
        (Some(from), Some(to)) => from.convert(value, to),
        _ => value,
    }
}
