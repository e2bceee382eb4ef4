//!
//! Counters of entries the extractor dropped or passed through.
//!

///
/// Counters of entries the extractor dropped or passed through.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Skipped {
    /// Statistical summary rows other than the mean.
    pub aggregates: usize,
    /// Entries whose names cannot be decoded.
    pub undecodable: usize,
    /// Entries without the metric of the active mode.
    pub missing_metric: usize,
    /// Entries kept with their value unconverted, as their time unit is unknown.
    pub unknown_unit: usize,
}

impl Skipped {
    ///
    /// The number of dropped entries.
    ///
    pub fn total(&self) -> usize {
        self.aggregates + self.undecodable + self.missing_metric
    }
}
