//!
//! Derived views of the normalized records, consumed by renderers.
//!

pub mod overhead;
pub mod share;

use std::collections::BTreeSet;

use crate::config::Config;
use crate::decoder::method_kind::MethodKind;
use crate::extractor::record::NormalizedRecord;

///
/// Keeps thread pool records with an allowed thread count.
/// Records of other variants have no thread dimension and are kept as is.
///
pub fn allowed_threads(records: &[NormalizedRecord], config: &Config) -> Vec<NormalizedRecord> {
    records
        .iter()
        .filter(|record| {
            !record.method_kind.is_thread_pool()
                || record
                    .thread_count
                    .is_some_and(|thread_count| config.is_thread_count_allowed(thread_count))
        })
        .cloned()
        .collect()
}

///
/// Builds the main comparison set, where each thread pool variant is
/// represented by its runs with `system_thread_count` threads only.
///
/// A thread pool variant without any resolved thread count is kept unfiltered.
///
pub fn system_thread_view(
    records: &[NormalizedRecord],
    system_thread_count: u64,
) -> Vec<NormalizedRecord> {
    let kinds_with_threads: BTreeSet<MethodKind> = records
        .iter()
        .filter(|record| record.method_kind.is_thread_pool() && record.thread_count.is_some())
        .map(|record| record.method_kind)
        .collect();
    for kind in [MethodKind::ThreadPool, MethodKind::ThreadPoolFull] {
        let is_present = records.iter().any(|record| record.method_kind == kind);
        if is_present && !kinds_with_threads.contains(&kind) {
            tracing::warn!(%kind, "No thread counts found, the group is not filtered");
        }
    }

    records
        .iter()
        .filter(|record| {
            !kinds_with_threads.contains(&record.method_kind)
                || record.thread_count == Some(system_thread_count)
        })
        .cloned()
        .collect()
}

///
/// Returns the distinct secondary sizes in ascending order.
/// Renderers emit one chart per secondary size.
///
pub fn secondary_sizes(records: &[NormalizedRecord]) -> Vec<u64> {
    records
        .iter()
        .filter_map(NormalizedRecord::secondary_size)
        .collect::<BTreeSet<u64>>()
        .into_iter()
        .collect()
}
