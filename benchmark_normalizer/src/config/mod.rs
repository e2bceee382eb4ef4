//!
//! The normalizer configuration.
//!

pub mod mode;

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use crate::input::richness::Richness;
use crate::unit::TimeUnit;

use self::mode::Mode;

///
/// The normalizer configuration.
///
/// Passed into the engine at construction, so that runs with different
/// settings never share state.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metric extraction mode.
    pub mode: Mode,
    /// Canonical unit of time metrics.
    /// If unset, the first entry with a recognized unit decides.
    pub target_unit: Option<TimeUnit>,
    /// Thread count assumed for thread pool benchmarks that do not report one.
    pub default_thread_count: u64,
    /// Thread counts kept for thread pool records. Empty means no filtering.
    pub allowed_thread_counts: BTreeSet<u64>,
    /// Candidate payload locations, in the order of preference.
    pub candidate_source_paths: Vec<PathBuf>,
    /// Whether the third numeric name parameter is treated as the thread count.
    pub positional_thread_parameter: bool,
    /// Identifier prefix of the thread pool creation overhead benchmarks.
    pub overhead_prefix: String,
    /// The predicate preferring one candidate payload over another.
    pub richness: Richness,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            target_unit: None,
            default_thread_count: Self::DEFAULT_THREAD_COUNT,
            allowed_thread_counts: Self::DEFAULT_ALLOWED_THREAD_COUNTS
                .into_iter()
                .collect(),
            candidate_source_paths: Self::DEFAULT_CANDIDATE_SOURCE_PATHS
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            positional_thread_parameter: true,
            overhead_prefix: Self::DEFAULT_OVERHEAD_PREFIX.to_owned(),
            richness: Richness::default(),
        }
    }
}

impl Config {
    /// The default thread count of thread pool benchmarks.
    pub const DEFAULT_THREAD_COUNT: u64 = 8;

    /// The default set of thread counts kept for thread pool records.
    pub const DEFAULT_ALLOWED_THREAD_COUNTS: [u64; 4] = [1, 4, 8, 16];

    /// The default candidate payload locations.
    pub const DEFAULT_CANDIDATE_SOURCE_PATHS: [&'static str; 2] =
        ["../results_image.json", "../build/results_image.json"];

    /// The default identifier prefix of overhead benchmarks.
    pub const DEFAULT_OVERHEAD_PREFIX: &'static str = "BM_ThreadPoolOverhead";

    ///
    /// Reads the configuration from a JSON file and validates it.
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Configuration validation failed.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Config file {path:?} reading: {error}"))?;
        let config: Self = serde_json::from_str(contents.as_str())
            .map_err(|error| anyhow::anyhow!("Config file {path:?} parsing: {error}"))?;
        config
            .validate()
            .map_err(|error| anyhow::anyhow!("Config file {path:?} validation: {error}"))?;
        Ok(config)
    }

    ///
    /// Checks that the configuration is well-formed.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_thread_count == 0 {
            anyhow::bail!("The `default_thread_count` must be positive");
        }
        if self.candidate_source_paths.is_empty() {
            anyhow::bail!("The `candidate_source_paths` list is empty");
        }
        if self.overhead_prefix.is_empty() {
            anyhow::bail!("The `overhead_prefix` is empty");
        }
        Ok(())
    }

    ///
    /// Whether `thread_count` passes the allowed thread count filter.
    ///
    pub fn is_thread_count_allowed(&self, thread_count: u64) -> bool {
        self.allowed_thread_counts.is_empty() || self.allowed_thread_counts.contains(&thread_count)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::mode::Mode;
    use super::Config;
    use crate::unit::TimeUnit;

    #[test]
    fn ok() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create a temporary file");
        write!(
            file,
            r#"{{ "mode": "throughput", "target_unit": "ms", "allowed_thread_counts": [2, 4] }}"#
        )
        .expect("Failed to write the config");

        let config = Config::try_from_path(file.path()).expect("Failed to read the config");
        assert_eq!(config.mode, Mode::Throughput);
        assert_eq!(config.target_unit, Some(TimeUnit::Millisecond));
        assert_eq!(config.default_thread_count, Config::DEFAULT_THREAD_COUNT);
        assert!(config.is_thread_count_allowed(4));
        assert!(!config.is_thread_count_allowed(8));
    }

    #[test]
    fn error_zero_default_thread_count() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create a temporary file");
        write!(file, r#"{{ "default_thread_count": 0 }}"#).expect("Failed to write the config");

        assert!(Config::try_from_path(file.path()).is_err());
    }

    #[test]
    fn empty_allowed_set_disables_filter() {
        let config = Config {
            allowed_thread_counts: Default::default(),
            ..Default::default()
        };
        assert!(config.is_thread_count_allowed(3));
    }
}
