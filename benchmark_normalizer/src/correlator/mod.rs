//!
//! The workload and overhead series correlator.
//!


pub mod record;
pub mod sample;

use std::collections::BTreeMap;

use crate::extractor::record::NormalizedRecord;

use self::record::CorrelatedRecord;
use self::sample::OverheadSample;

///
/// Reduces the overhead samples to the mean of each thread count.
///
/// Repeated trials are averaged. Values are summed in sorted order, so the
/// result does not depend on the sample order.
///
pub fn overhead_means(samples: &[OverheadSample]) -> BTreeMap<u64, f64> {
    let mut groups: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    for sample in samples.iter() {
        groups
            .entry(sample.thread_count)
            .or_default()
            .push(sample.metric_value);
    }

    groups
        .into_iter()
        .map(|(thread_count, mut values)| {
            values.sort_by(f64::total_cmp);
            let mean = values.iter().sum::<f64>() / (values.len() as f64);
            (thread_count, mean)
        })
        .collect()
}

///
/// Joins the workload records with the mean overhead of their thread count.
///
/// This is a strict equi-join on the thread count: records without a
/// thread count, or without an overhead sample for it, are dropped. A matched
/// record with a zero or negative metric is kept with a non-finite or negative
/// ratio. The output follows the order of `primary`.
///
pub fn correlate(primary: &[NormalizedRecord], overhead: &[OverheadSample]) -> Vec<CorrelatedRecord> {
    let means = overhead_means(overhead);

    let correlated: Vec<CorrelatedRecord> = primary
        .iter()
        .filter_map(|record| {
            let thread_count = record.thread_count?;
            let Some(overhead_value) = means.get(&thread_count) else {
                tracing::debug!(label = %record.method_label, thread_count, "No overhead sample for the thread count");
                return None;
            };
            let correlated = CorrelatedRecord::new(record.to_owned(), *overhead_value);
            if !correlated.overhead_ratio_percent().is_finite() {
                tracing::warn!(label = %record.method_label, value = record.metric_value, "Non-finite overhead ratio");
            }
            Some(correlated)
        })
        .collect();

    tracing::info!(
        primary = primary.len(),
        correlated = correlated.len(),
        thread_counts = means.len(),
        "Correlation finished"
    );
    correlated
}
