//!
//! The benchmark normalizer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark normalizer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Prints the reason of every skipped entry.
    #[arg(short, long)]
    pub verbose: bool,

    /// Candidate payload files, in the order of preference.
    /// Overrides the configured candidates.
    pub input_paths: Vec<PathBuf>,

    /// JSON configuration file. Command line options override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Metric extraction mode: `time` or `throughput`.
    #[arg(long)]
    pub mode: Option<benchmark_normalizer::Mode>,

    /// Canonical time unit: `ns`, `us`, `ms`, or `s`.
    /// Defaults to the unit of the first entry that has one.
    #[arg(long)]
    pub unit: Option<benchmark_normalizer::TimeUnit>,

    /// Thread count assumed for thread pool benchmarks that do not report one.
    #[arg(long)]
    pub default_threads: Option<u64>,

    /// Comma-separated thread counts kept for thread pool records.
    #[arg(long, value_delimiter = ',')]
    pub allowed_threads: Option<Vec<u64>>,

    /// Disables the filtering by thread count.
    #[arg(long, conflicts_with = "allowed_threads")]
    pub all_threads: bool,

    /// Candidate preference: `thread-dimension`, `overhead-series`, or `overhead-or-thread-pool`.
    #[arg(long)]
    pub richness: Option<benchmark_normalizer::Richness>,

    /// Do not treat the third numeric name parameter as the thread count.
    #[arg(long)]
    pub no_positional_threads: bool,

    /// Correlates the thread pool records with the pool creation overhead.
    /// Only available in the `time` mode.
    #[arg(long)]
    pub correlate: bool,

    /// Report output format: `json`, `csv`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_normalizer::OutputFormat::Json)]
    pub output_format: benchmark_normalizer::OutputFormat,

    /// Report output file.
    #[arg(long)]
    pub output_path: PathBuf,
}

impl Arguments {
    ///
    /// Assembles the configuration from the defaults, the config file, and the options.
    ///
    pub fn config(&self) -> anyhow::Result<benchmark_normalizer::Config> {
        let mut config = match self.config.as_deref() {
            Some(path) => benchmark_normalizer::Config::try_from_path(path)?,
            None => benchmark_normalizer::Config::default(),
        };

        if !self.input_paths.is_empty() {
            config.candidate_source_paths = self.input_paths.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(unit) = self.unit {
            config.target_unit = Some(unit);
        }
        if let Some(default_threads) = self.default_threads {
            config.default_thread_count = default_threads;
        }
        if let Some(allowed_threads) = self.allowed_threads.as_ref() {
            config.allowed_thread_counts = allowed_threads.iter().copied().collect();
        }
        if self.all_threads {
            config.allowed_thread_counts.clear();
        }
        if let Some(richness) = self.richness {
            config.richness = richness;
        }
        if self.no_positional_threads {
            config.positional_thread_parameter = false;
        }

        config.validate()?;
        if self.correlate && config.mode == benchmark_normalizer::Mode::Throughput {
            anyhow::bail!(
                "Overhead correlation requires the `{}` mode, as the overhead series has no throughput",
                benchmark_normalizer::Mode::Time
            );
        }
        Ok(config)
    }

    ///
    /// The log filter directive implied by the verbosity options.
    ///
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
