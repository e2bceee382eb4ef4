//!
//! The workload record joined with the overhead of its thread count.
//!

use crate::extractor::record::NormalizedRecord;

///
/// The workload record joined with the overhead of its thread count.
///
/// Only the correlator creates these, so a matching overhead sample always exists.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CorrelatedRecord {
    /// The workload record.
    #[serde(flatten)]
    record: NormalizedRecord,
    /// The mean overhead time of the record thread count.
    overhead_value: f64,
    /// The share of the workload time spent on the pool creation.
    overhead_ratio_percent: f64,
}

impl CorrelatedRecord {
    ///
    /// Joins `record` with the mean overhead of its thread count.
    ///
    pub(crate) fn new(record: NormalizedRecord, overhead_value: f64) -> Self {
        let overhead_ratio_percent = overhead_value / record.metric_value * 100.0;
        Self {
            record,
            overhead_value,
            overhead_ratio_percent,
        }
    }

    ///
    /// The workload record.
    ///
    pub fn record(&self) -> &NormalizedRecord {
        &self.record
    }

    ///
    /// The mean overhead time of the record thread count.
    ///
    pub fn overhead_value(&self) -> f64 {
        self.overhead_value
    }

    ///
    /// The share of the workload time spent on the pool creation, in percent.
    ///
    pub fn overhead_ratio_percent(&self) -> f64 {
        self.overhead_ratio_percent
    }
}
