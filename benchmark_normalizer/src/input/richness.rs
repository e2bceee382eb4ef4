//!
//! Payload richness predicates.
//!

use crate::decoder::Decoder;
use crate::input::Payload;

///
/// A predicate telling whether a payload carries the data a run is after.
///
/// The source selector adopts the first candidate satisfying it.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Richness {
    /// Thread pool entries with an explicit thread dimension.
    #[default]
    ThreadDimension,
    /// Thread pool creation overhead entries.
    OverheadSeries,
    /// Either overhead entries, or thread pool workload entries.
    OverheadOrThreadPool,
}

impl Richness {
    /// Method tags of the thread pool workload benchmarks.
    pub const THREAD_POOL_METHODS: [&'static str; 2] =
        ["BM_ProcessThreadPool", "BM_ProcessThreadPoolFull"];

    /// Minimal number of numeric parameters with an explicit thread dimension.
    const THREAD_DIMENSION_PARAMETERS: usize = 3;

    ///
    /// Checks the predicate against `payload`.
    ///
    pub fn is_satisfied_by(&self, payload: &Payload, overhead_prefix: &str) -> bool {
        payload.benchmarks.iter().any(|entry| {
            let name = entry.name.as_str();
            match self {
                Self::ThreadDimension => {
                    name.contains("ThreadPool")
                        && Decoder::numeric_segments(name).count()
                            >= Self::THREAD_DIMENSION_PARAMETERS
                }
                Self::OverheadSeries => name.starts_with(overhead_prefix),
                Self::OverheadOrThreadPool => {
                    name.starts_with(overhead_prefix)
                        || name
                            .split(Decoder::DELIMITER)
                            .nth(1)
                            .is_some_and(|method| Self::THREAD_POOL_METHODS.contains(&method))
                }
            }
        })
    }
}

impl std::str::FromStr for Richness {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "thread-dimension" => Ok(Self::ThreadDimension),
            "overhead-series" => Ok(Self::OverheadSeries),
            "overhead-or-thread-pool" => Ok(Self::OverheadOrThreadPool),
            string => anyhow::bail!(
                "Unknown richness predicate `{string}`. Supported values: {}",
                [
                    Self::ThreadDimension,
                    Self::OverheadSeries,
                    Self::OverheadOrThreadPool
                ]
                .into_iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Richness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreadDimension => write!(f, "thread-dimension"),
            Self::OverheadSeries => write!(f, "overhead-series"),
            Self::OverheadOrThreadPool => write!(f, "overhead-or-thread-pool"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Richness;
    use crate::input::entry::Entry;
    use crate::input::Payload;

    const PREFIX: &str = "BM_ThreadPoolOverhead";

    fn payload(names: &[&str]) -> Payload {
        Payload::new(
            names
                .iter()
                .map(|name| Entry::new_timed(name, 1.0, "us"))
                .collect(),
        )
    }

    #[test]
    fn thread_dimension() {
        let rich = payload(&["F/BM_ProcessDefault/32/3", "F/BM_ProcessThreadPool/32/3/8"]);
        let poor = payload(&["F/BM_ProcessDefault/32/3/8", "F/BM_ProcessThreadPool/32/3"]);

        assert!(Richness::ThreadDimension.is_satisfied_by(&rich, PREFIX));
        assert!(!Richness::ThreadDimension.is_satisfied_by(&poor, PREFIX));
    }

    #[test]
    fn overhead_series() {
        let rich = payload(&["BM_ThreadPoolOverhead/4"]);
        let poor = payload(&["F/BM_ProcessThreadPool/32/3/threads:4"]);

        assert!(Richness::OverheadSeries.is_satisfied_by(&rich, PREFIX));
        assert!(!Richness::OverheadSeries.is_satisfied_by(&poor, PREFIX));
        assert!(Richness::OverheadOrThreadPool.is_satisfied_by(&poor, PREFIX));
    }
}
