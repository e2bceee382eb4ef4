//!
//! The normalized benchmark record.
//!

use crate::decoder::method_kind::MethodKind;
use crate::decoder::DecodedIdentity;

///
/// The normalized benchmark record.
///
/// The metric is always in the canonical unit of the run.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRecord {
    /// The variant under test.
    pub method_kind: MethodKind,
    /// The series label, e.g. `ThreadPool (T=4)`.
    pub method_label: String,
    /// The group the record is rendered in, e.g. `ThreadPool Full`.
    pub grouping_key: String,
    /// The numeric name parameters: primary size, secondary size, and the rest.
    pub numeric_params: Vec<u64>,
    /// The resolved thread count.
    pub thread_count: Option<u64>,
    /// The measured value.
    pub metric_value: f64,
    /// The unit of `metric_value`.
    pub metric_unit: String,
}

impl NormalizedRecord {
    ///
    /// Builds a record from the decoded name and the converted metric.
    ///
    pub fn new(identity: DecodedIdentity, metric_value: f64, metric_unit: &str) -> Self {
        let DecodedIdentity {
            method_kind,
            numeric_params,
            thread_count,
        } = identity;

        Self {
            method_kind,
            method_label: method_kind.label(thread_count),
            grouping_key: method_kind.group_name().to_owned(),
            numeric_params,
            thread_count,
            metric_value,
            metric_unit: metric_unit.to_owned(),
        }
    }

    ///
    /// The primary size parameter, e.g. the image size.
    ///
    pub fn primary_size(&self) -> Option<u64> {
        self.numeric_params.first().copied()
    }

    ///
    /// The secondary size parameter, e.g. the kernel size.
    ///
    pub fn secondary_size(&self) -> Option<u64> {
        self.numeric_params.get(1).copied()
    }
}
