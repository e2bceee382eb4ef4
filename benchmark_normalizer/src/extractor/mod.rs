//!
//! The record extractor.
//!

#[cfg(test)]
mod tests;

pub mod aggregate;
pub mod record;
pub mod skipped;

use crate::config::mode::Mode;
use crate::correlator::sample::OverheadSample;
use crate::decoder::method_kind::MethodKind;
use crate::decoder::Decoder;
use crate::input::entry::Entry;
use crate::unit::TimeUnit;

use self::record::NormalizedRecord;
use self::skipped::Skipped;

///
/// The records extracted from a payload.
///
#[derive(Debug, Default, Clone)]
pub struct Extraction {
    /// Workload records, in the payload order.
    pub records: Vec<NormalizedRecord>,
    /// Thread pool creation overhead samples, in the payload order.
    pub overhead: Vec<OverheadSample>,
    /// Counters of dropped entries.
    pub skipped: Skipped,
}

///
/// The record extractor.
///
/// Operates in exactly one mode for the whole batch.
///
#[derive(Debug, Clone)]
pub struct Extractor {
    /// The benchmark name decoder.
    pub decoder: Decoder,
    /// The metric extraction mode.
    pub mode: Mode,
    /// The canonical time unit.
    pub target_unit: TimeUnit,
}

impl Extractor {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(decoder: Decoder, mode: Mode, target_unit: TimeUnit) -> Self {
        Self {
            decoder,
            mode,
            target_unit,
        }
    }

    ///
    /// Resolves the canonical time unit of a run.
    ///
    /// The configured unit wins. Otherwise, the first entry with a recognized
    /// unit decides, and microseconds are used if there is none.
    ///
    pub fn resolve_target_unit(configured: Option<TimeUnit>, entries: &[Entry]) -> TimeUnit {
        configured
            .or_else(|| {
                entries
                    .iter()
                    .filter_map(|entry| entry.time_unit.as_deref())
                    .find_map(TimeUnit::parse)
            })
            .unwrap_or_default()
    }

    ///
    /// The unit of the extracted metrics.
    ///
    pub fn metric_unit(&self) -> String {
        match self.mode {
            Mode::Time => self.target_unit.to_string(),
            Mode::Throughput => Mode::THROUGHPUT_UNIT.to_owned(),
        }
    }

    ///
    /// Extracts the records from `entries`.
    ///
    /// Never fails: entries not satisfying the extraction rules are counted and skipped.
    ///
    pub fn extract(&self, entries: &[Entry]) -> Extraction {
        let metric_unit = self.metric_unit();
        let mut extraction = Extraction::default();

        for entry in entries.iter() {
            if !aggregate::is_primary_sample(entry.aggregate_name.as_deref()) {
                tracing::debug!(name = %entry.name, aggregate = ?entry.aggregate_name, "Skipping an aggregate row");
                extraction.skipped.aggregates += 1;
                continue;
            }

            let identity = match self
                .decoder
                .decode(entry.name.as_str(), entry.explicit_threads())
            {
                Ok(identity) => identity,
                Err(error) => {
                    tracing::debug!(%error, "Skipping an undecodable entry");
                    extraction.skipped.undecodable += 1;
                    continue;
                }
            };

            let Some(metric_value) = self.metric(entry, &mut extraction.skipped) else {
                tracing::debug!(name = %entry.name, mode = %self.mode, "Skipping an entry without the metric");
                extraction.skipped.missing_metric += 1;
                continue;
            };

            let record = NormalizedRecord::new(identity, metric_value, metric_unit.as_str());
            match (record.method_kind, record.thread_count) {
                (MethodKind::Overhead, Some(thread_count)) => extraction
                    .overhead
                    .push(OverheadSample::new(thread_count, record.metric_value)),
                _ => extraction.records.push(record),
            }
        }

        tracing::info!(
            records = extraction.records.len(),
            overhead = extraction.overhead.len(),
            skipped = extraction.skipped.total(),
            "Extraction finished"
        );
        extraction
    }

    ///
    /// Reads the metric of the active mode and converts it to the canonical unit.
    ///
    fn metric(&self, entry: &Entry, skipped: &mut Skipped) -> Option<f64> {
        match self.mode {
            Mode::Time => {
                let value = entry.time()?;
                let target_unit = self.target_unit.to_string();
                let unit = entry.time_unit.as_deref().unwrap_or(target_unit.as_str());
                if TimeUnit::parse(unit).is_none() {
                    tracing::warn!(name = %entry.name, unit, "Unknown time unit, the value is kept unconverted");
                    skipped.unknown_unit += 1;
                }
                Some(crate::unit::convert(value, unit, target_unit.as_str()))
            }
            Mode::Throughput => entry
                .bytes_per_second
                .map(|bytes_per_second| bytes_per_second / Mode::BYTES_PER_THROUGHPUT_UNIT),
        }
    }
}
