//!
//! The thread pool creation overhead sample.
//!

///
/// The thread pool creation overhead sample.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct OverheadSample {
    /// The number of threads the pool was created with.
    pub thread_count: u64,
    /// The measured creation time, in the canonical unit of the run.
    pub metric_value: f64,
}

impl OverheadSample {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(thread_count: u64, metric_value: f64) -> Self {
        Self {
            thread_count,
            metric_value,
        }
    }
}
