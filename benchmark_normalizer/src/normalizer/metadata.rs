//!
//! The normalizer report metadata.
//!

use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::config::mode::Mode;
use crate::input::context::Context;

///
/// The normalizer report metadata.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Metadata {
    /// The adopted payload location.
    pub source: PathBuf,
    /// Whether the payload satisfied the richness predicate.
    pub is_rich: bool,
    /// The metric extraction mode.
    pub mode: Mode,
    /// The unit of every metric value in the report.
    pub metric_unit: String,
    /// The benchmarking tool run context, if the payload carries one.
    pub context: Option<Context>,
    /// Start of the normalization run.
    pub start: DateTime<Utc>,
    /// End of the normalization run.
    pub end: DateTime<Utc>,
}
