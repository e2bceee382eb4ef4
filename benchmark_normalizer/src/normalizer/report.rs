//!
//! The normalizer report.
//!

use crate::correlator::record::CorrelatedRecord;
use crate::error::Error;
use crate::error::Stage;
use crate::extractor::record::NormalizedRecord;
use crate::extractor::skipped::Skipped;
use crate::view::overhead::OverheadSummary;
use crate::view::share::OverheadShare;

use super::metadata::Metadata;

///
/// The result of a normalization run, ready to be rendered.
///
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    /// The run metadata.
    pub metadata: Metadata,
    /// Records passing the allowed thread count filter, in the payload order.
    pub records: Vec<NormalizedRecord>,
    /// Records of the main comparison set at the system thread count.
    pub system_view: Vec<NormalizedRecord>,
    /// The distinct secondary sizes, one chart per value.
    pub secondary_sizes: Vec<u64>,
    /// Thread pool records joined with the pool creation overhead.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub correlated: Vec<CorrelatedRecord>,
    /// The pool creation overhead per thread count.
    pub overhead_summary: Vec<OverheadSummary>,
    /// The mean overhead share per chart point.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overhead_shares: Vec<OverheadShare>,
    /// Counters of dropped entries.
    pub skipped: Skipped,
    /// The stage that left nothing to render, if any.
    #[serde(skip)]
    pub emptied_at: Option<Stage>,
}

impl Report {
    ///
    /// Checks that the report has something to render.
    ///
    /// # Errors
    ///
    /// `EmptyResult` naming the stage after which nothing was left.
    ///
    pub fn ensure_not_empty(&self) -> Result<(), Error> {
        match self.emptied_at {
            Some(stage) => Err(Error::EmptyResult { stage }),
            None => Ok(()),
        }
    }
}
