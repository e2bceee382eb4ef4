//!
//! The normalizer run error.
//!

use std::path::PathBuf;

///
/// The pipeline stage after which a run may end up with no records.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No entry of the payload produced a record.
    Extraction,
    /// No thread pool record has an allowed thread count.
    ThreadFilter,
    /// The payload has no overhead samples to correlate with.
    OverheadSeries,
    /// No workload record matched an overhead sample by thread count.
    Correlation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extraction => write!(f, "record extraction"),
            Self::ThreadFilter => write!(f, "thread count filtering"),
            Self::OverheadSeries => write!(f, "overhead series extraction"),
            Self::Correlation => write!(f, "overhead correlation"),
        }
    }
}

///
/// The normalizer run error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the candidate payloads exists or loads. Fatal for the run.
    #[error("Benchmark payload not found. Tried: {candidates:?}")]
    SourceNotFound {
        /// The candidate locations tried.
        candidates: Vec<PathBuf>,
    },
    /// Nothing is left to render. The caller is expected to report it and skip the artifact.
    #[error("No records left after {stage}")]
    EmptyResult {
        /// The stage that left the run empty.
        stage: Stage,
    },
}
