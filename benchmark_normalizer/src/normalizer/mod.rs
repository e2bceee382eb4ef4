//!
//! The normalization pipeline.
//!


pub mod metadata;
pub mod report;

use chrono::Utc;

use crate::config::Config;
use crate::correlator;
use crate::decoder::Decoder;
use crate::error::Error;
use crate::error::Stage;
use crate::extractor::Extraction;
use crate::extractor::Extractor;
use crate::extractor::record::NormalizedRecord;
use crate::input::selector::Selection;
use crate::input::selector::Selector;
use crate::view;
use crate::view::overhead::OverheadSummary;
use crate::view::share::OverheadShare;

use self::metadata::Metadata;
use self::report::Report;

///
/// The normalization pipeline.
///
/// Holds no state between runs apart from its configuration.
///
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// The run configuration.
    pub config: Config,
    /// The record extractor. Its target unit is resolved again for each payload.
    pub extractor: Extractor,
    /// Whether the workload records are correlated with the overhead series.
    pub correlate: bool,
}

impl Normalizer {
    ///
    /// Builds the decoder and the extractor from `config`.
    ///
    pub fn new(config: Config, correlate: bool) -> Self {
        let extractor = Extractor::new(
            Decoder::new(&config),
            config.mode,
            config.target_unit.unwrap_or_default(),
        );
        Self {
            config,
            extractor,
            correlate,
        }
    }

    ///
    /// Selects the payload among the configured candidates and normalizes it.
    ///
    /// # Errors
    ///
    /// `SourceNotFound` if no candidate exists and loads.
    ///
    pub fn run(&self) -> Result<Report, Error> {
        let start = Utc::now();
        let richness = self.config.richness;
        let overhead_prefix = self.config.overhead_prefix.as_str();
        let selection = Selector::new(self.config.candidate_source_paths.clone())
            .select(|payload| richness.is_satisfied_by(payload, overhead_prefix))?;
        Ok(self.process(selection, start))
    }

    ///
    /// Normalizes an already selected payload.
    ///
    pub fn process(&self, selection: Selection, start: chrono::DateTime<Utc>) -> Report {
        let Selection {
            path,
            payload,
            is_rich,
        } = selection;
        tracing::info!(?path, is_rich, entries = payload.benchmarks.len(), "Normalizing the payload");

        let target_unit =
            Extractor::resolve_target_unit(self.config.target_unit, payload.benchmarks.as_slice());
        let extractor = Extractor {
            target_unit,
            ..self.extractor.clone()
        };
        let extraction = extractor.extract(payload.benchmarks.as_slice());

        let records = view::allowed_threads(extraction.records.as_slice(), &self.config);
        let system_view =
            view::system_thread_view(records.as_slice(), self.config.default_thread_count);
        let secondary_sizes = view::secondary_sizes(records.as_slice());
        let overhead_summary = OverheadSummary::from_samples(extraction.overhead.as_slice());

        let (correlated, overhead_shares) = if self.correlate {
            let primary: Vec<NormalizedRecord> = records
                .iter()
                .filter(|record| record.method_kind.is_thread_pool())
                .cloned()
                .collect();
            let correlated =
                correlator::correlate(primary.as_slice(), extraction.overhead.as_slice());
            let overhead_shares = OverheadShare::from_correlated(correlated.as_slice());
            (correlated, overhead_shares)
        } else {
            (vec![], vec![])
        };

        let emptied_at = self.emptied_at(&extraction, records.as_slice(), correlated.len());
        if let Some(stage) = emptied_at {
            tracing::info!(%stage, "Nothing is left to render");
        }

        let metadata = Metadata {
            source: path,
            is_rich,
            mode: self.config.mode,
            metric_unit: extractor.metric_unit(),
            context: payload.context,
            start,
            end: Utc::now(),
        };

        Report {
            metadata,
            records,
            system_view,
            secondary_sizes,
            correlated,
            overhead_summary,
            overhead_shares,
            skipped: extraction.skipped,
            emptied_at,
        }
    }

    ///
    /// Finds the first stage after which nothing is left to render.
    ///
    /// Without correlation, an overhead-only payload still renders its summary.
    ///
    fn emptied_at(
        &self,
        extraction: &Extraction,
        records: &[NormalizedRecord],
        correlated_count: usize,
    ) -> Option<Stage> {
        if extraction.records.is_empty() && extraction.overhead.is_empty() {
            return Some(Stage::Extraction);
        }

        if !self.correlate {
            return match (records.is_empty(), extraction.overhead.is_empty()) {
                (true, true) => Some(Stage::ThreadFilter),
                _ => None,
            };
        }

        let has_thread_pool = |records: &[NormalizedRecord]| {
            records
                .iter()
                .any(|record| record.method_kind.is_thread_pool())
        };
        if !has_thread_pool(extraction.records.as_slice()) {
            return Some(Stage::Extraction);
        }
        if !has_thread_pool(records) {
            return Some(Stage::ThreadFilter);
        }
        if extraction.overhead.is_empty() {
            return Some(Stage::OverheadSeries);
        }
        if correlated_count == 0 {
            return Some(Stage::Correlation);
        }
        None
    }
}
