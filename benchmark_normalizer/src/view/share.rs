//!
//! The overhead share table.
//!

use std::collections::BTreeMap;

use crate::correlator::record::CorrelatedRecord;

///
/// The mean overhead share of one chart point.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OverheadShare {
    /// The secondary size, one chart per value.
    pub secondary_size: u64,
    /// The variant group, one chart per value.
    pub grouping_key: String,
    /// The primary size, the chart abscissa.
    pub primary_size: u64,
    /// The thread count, one line per value.
    pub thread_count: u64,
    /// The mean share of the workload time spent on the pool creation.
    pub mean_ratio_percent: f64,
}

impl OverheadShare {
    ///
    /// Averages the correlated records sharing the chart coordinates.
    ///
    /// Sorted by secondary size, group, primary size, and thread count.
    ///
    pub fn from_correlated(records: &[CorrelatedRecord]) -> Vec<Self> {
        let mut points: BTreeMap<(u64, String, u64, u64), (f64, usize)> = BTreeMap::new();
        for correlated in records.iter() {
            let record = correlated.record();
            let (Some(primary_size), Some(secondary_size), Some(thread_count)) = (
                record.primary_size(),
                record.secondary_size(),
                record.thread_count,
            ) else {
                continue;
            };
            let point = points
                .entry((
                    secondary_size,
                    record.grouping_key.clone(),
                    primary_size,
                    thread_count,
                ))
                .or_insert((0.0, 0));
            point.0 += correlated.overhead_ratio_percent();
            point.1 += 1;
        }

        points
            .into_iter()
            .map(
                |((secondary_size, grouping_key, primary_size, thread_count), (sum, count))| Self {
                    secondary_size,
                    grouping_key,
                    primary_size,
                    thread_count,
                    mean_ratio_percent: sum / (count as f64),
                },
            )
            .collect()
    }
}
