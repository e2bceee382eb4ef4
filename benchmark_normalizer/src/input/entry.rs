//!
//! A single measured case from the benchmarking tool output.
//!

///
/// A single measured case from the benchmarking tool output.
///
/// Every field except the name is optional, as tools omit whatever they
/// did not measure.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// Hierarchical benchmark identifier, e.g. `Fixture/BM_ProcessThreadPool/64/3/threads:8`.
    #[serde(default)]
    pub name: String,
    /// Wall clock time per iteration.
    pub real_time: Option<f64>,
    /// CPU time per iteration.
    pub cpu_time: Option<f64>,
    /// Unit of `real_time` and `cpu_time`.
    pub time_unit: Option<String>,
    /// Processed bytes per second.
    pub bytes_per_second: Option<f64>,
    /// Thread count reported by the tool. Kept raw, as only integers are meaningful.
    pub threads: Option<serde_json::Value>,
    /// Statistical aggregate name, e.g. `mean` or `stddev`. Absent for raw iterations.
    pub aggregate_name: Option<String>,
}

impl Entry {
    ///
    /// A shortcut constructor for a time measurement.
    ///
    pub fn new_timed(name: &str, real_time: f64, time_unit: &str) -> Self {
        Self {
            name: name.to_owned(),
            real_time: Some(real_time),
            time_unit: Some(time_unit.to_owned()),
            ..Default::default()
        }
    }

    ///
    /// The measured time, preferring wall clock time over CPU time.
    ///
    pub fn time(&self) -> Option<f64> {
        self.real_time.or(self.cpu_time)
    }

    ///
    /// The thread count reported alongside the entry, if it is a non-negative integer.
    ///
    pub fn explicit_threads(&self) -> Option<u64> {
        self.threads.as_ref().and_then(serde_json::Value::as_u64)
    }
}
