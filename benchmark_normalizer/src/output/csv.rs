//!
//! Serializing the report records to CSV.
//!

use std::fmt::Write;

use crate::decoder::method_kind::MethodKind;
use crate::extractor::record::NormalizedRecord;
use crate::normalizer::report::Report;
use crate::view::overhead::OverheadSummary;

///
/// Serializes the records to CSV in the following format:
/// "method_kind", "method_label", "grouping_key", "numeric_params", "thread_count", "metric_value", "metric_unit", "overhead_value", "overhead_ratio_percent"
///
/// If correlation ran, only the correlated records are written, with both
/// overhead columns filled. Otherwise, the normalized records are followed
/// by one `Overhead` line per thread count of the overhead summary.
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header line.
    pub const HEADER: &'static str = r#""method_kind", "method_label", "grouping_key", "numeric_params", "thread_count", "metric_value", "metric_unit", "overhead_value", "overhead_ratio_percent""#;

    /// Estimated length of a single line.
    const ESTIMATED_LINE_LENGTH: usize = 128;

    ///
    /// Writes a record line, leaving the overhead columns empty if there is no overhead.
    ///
    fn write_record(
        content: &mut String,
        record: &NormalizedRecord,
        overhead: Option<(f64, f64)>,
    ) -> std::fmt::Result {
        let numeric_params = record
            .numeric_params
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<String>>()
            .join("/");
        let thread_count = record
            .thread_count
            .map(|thread_count| thread_count.to_string())
            .unwrap_or_default();
        let (overhead_value, overhead_ratio_percent) = match overhead {
            Some((value, ratio)) => (value.to_string(), ratio.to_string()),
            None => (String::new(), String::new()),
        };
        writeln!(
            content,
            r#""{}", "{}", "{}", "{}", {}, {}, "{}", {}, {}"#,
            record.method_kind,
            record.method_label,
            record.grouping_key,
            numeric_params,
            thread_count,
            record.metric_value,
            record.metric_unit,
            overhead_value,
            overhead_ratio_percent,
        )
    }

    ///
    /// Writes an overhead summary line, with the mean creation time as the metric.
    ///
    fn write_overhead(
        content: &mut String,
        summary: &OverheadSummary,
        metric_unit: &str,
    ) -> std::fmt::Result {
        let method_kind = MethodKind::Overhead;
        writeln!(
            content,
            r#""{}", "{}", "{}", "", {}, {}, "{}", , "#,
            method_kind,
            method_kind.label(Some(summary.thread_count)),
            method_kind.group_name(),
            summary.thread_count,
            summary.mean,
            metric_unit,
        )
    }
}

impl From<&Report> for Csv {
    fn from(report: &Report) -> Self {
        let lines = (report.records.len() + report.overhead_summary.len())
            .max(report.correlated.len())
            + 1;
        let mut content = String::with_capacity(lines * Self::ESTIMATED_LINE_LENGTH);
        content.push_str(Self::HEADER);
        content.push('\n');

        if report.correlated.is_empty() {
            for record in report.records.iter() {
                Self::write_record(&mut content, record, None).expect("Always valid");
            }
            for summary in report.overhead_summary.iter() {
                Self::write_overhead(&mut content, summary, report.metadata.metric_unit.as_str())
                    .expect("Always valid");
            }
        } else {
            for correlated in report.correlated.iter() {
                Self::write_record(
                    &mut content,
                    correlated.record(),
                    Some((
                        correlated.overhead_value(),
                        correlated.overhead_ratio_percent(),
                    )),
                )
                .expect("Always valid");
            }
        }

        Self { content }
    }
}
