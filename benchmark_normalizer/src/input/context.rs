//!
//! The benchmarking tool run context.
//!

///
/// The benchmarking tool run context.
///
/// Passed through to the output metadata as is.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Context {
    /// The date of the run, as printed by the tool.
    pub date: Option<String>,
    /// The machine host name.
    pub host_name: Option<String>,
    /// The benchmark executable path.
    pub executable: Option<String>,
    /// The number of logical CPUs.
    pub num_cpus: Option<u64>,
    /// The CPU frequency.
    pub mhz_per_cpu: Option<u64>,
    /// The benchmark library build type, e.g. `release`.
    pub library_build_type: Option<String>,
}
