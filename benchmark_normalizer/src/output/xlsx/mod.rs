//!
//! XLSX output format for the report.
//!

pub mod worksheet;

use crate::normalizer::report::Report;

use self::worksheet::Worksheet;

///
/// XLSX output format for the report.
///
pub struct Xlsx {
    /// Worksheet for the normalized records.
    pub records_worksheet: Worksheet,
    /// Worksheet for the pool creation overhead per thread count.
    pub overhead_worksheet: Worksheet,
    /// Worksheet for the mean overhead share per chart point.
    pub overhead_share_worksheet: Worksheet,
    /// Whether the normalized records worksheet is part of the workbook.
    pub has_records: bool,
    /// Whether the overhead worksheet is part of the workbook.
    pub has_overhead: bool,
    /// Whether the overhead share worksheet is part of the workbook.
    pub has_overhead_shares: bool,
}

impl Xlsx {
    /// The normalized records worksheet name.
    pub const RECORDS_WORKSHEET_NAME: &'static str = "Records";
    /// The overhead summary worksheet name.
    pub const OVERHEAD_WORKSHEET_NAME: &'static str = "Overhead";
    /// The overhead share worksheet name.
    pub const OVERHEAD_SHARE_WORKSHEET_NAME: &'static str = "Overhead Share";

    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new(metric_unit: &str) -> anyhow::Result<Self> {
        let records_worksheet = Worksheet::new(
            Self::RECORDS_WORKSHEET_NAME,
            vec![
                ("Label", 24),
                ("Group", 18),
                ("Primary", 10),
                ("Secondary", 12),
                ("Threads", 10),
                (Self::value_caption(metric_unit), 14),
            ],
        )?;
        let overhead_worksheet = Worksheet::new(
            Self::OVERHEAD_WORKSHEET_NAME,
            vec![
                ("Threads", 10),
                (Self::value_caption(metric_unit), 14),
                ("Per thread", 14),
            ],
        )?;
        let overhead_share_worksheet = Worksheet::new(
            Self::OVERHEAD_SHARE_WORKSHEET_NAME,
            vec![
                ("Secondary", 12),
                ("Group", 18),
                ("Primary", 10),
                ("Threads", 10),
                ("Share", 12),
            ],
        )?;

        Ok(Self {
            records_worksheet,
            overhead_worksheet,
            overhead_share_worksheet,
            has_records: false,
            has_overhead: false,
            has_overhead_shares: false,
        })
    }

    ///
    /// Returns the final workbook with the non-empty worksheets.
    ///
    /// The records worksheet is kept if there is nothing else to show.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        if self.has_records || !self.has_overhead {
            workbook.push_worksheet(self.records_worksheet.into_inner());
        }
        if self.has_overhead {
            workbook.push_worksheet(self.overhead_worksheet.into_inner());
        }
        if self.has_overhead_shares {
            workbook.push_worksheet(self.overhead_share_worksheet.into_inner());
        }
        workbook
    }

    ///
    /// The names of the worksheets that [`Self::finalize`] puts into the workbook.
    ///
    pub fn worksheet_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(3);
        if self.has_records || !self.has_overhead {
            names.push(Self::RECORDS_WORKSHEET_NAME);
        }
        if self.has_overhead {
            names.push(Self::OVERHEAD_WORKSHEET_NAME);
        }
        if self.has_overhead_shares {
            names.push(Self::OVERHEAD_SHARE_WORKSHEET_NAME);
        }
        names
    }

    ///
    /// Returns the value column caption.
    ///
    /// Worksheet headers are static, so only the known units are named.
    ///
    fn value_caption(metric_unit: &str) -> &'static str {
        match metric_unit {
            "ns" => "Value (ns)",
            "us" => "Value (us)",
            "ms" => "Value (ms)",
            "s" => "Value (s)",
            "GB/s" => "Value (GB/s)",
            _ => "Value",
        }
    }
}

impl TryFrom<&Report> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new(report.metadata.metric_unit.as_str())?;

        xlsx.has_records = !report.records.is_empty();
        xlsx.has_overhead = !report.overhead_summary.is_empty();
        xlsx.has_overhead_shares = !report.overhead_shares.is_empty();

        for record in report.records.iter() {
            let sheet = &mut xlsx.records_worksheet;
            let row_index = sheet.next_row();
            sheet.write_text(row_index, 0, record.method_label.as_str())?;
            sheet.write_text(row_index, 1, record.grouping_key.as_str())?;
            sheet.write_number(row_index, 2, record.primary_size().map(|size| size as f64))?;
            sheet.write_number(row_index, 3, record.secondary_size().map(|size| size as f64))?;
            sheet.write_number(
                row_index,
                4,
                record.thread_count.map(|thread_count| thread_count as f64),
            )?;
            sheet.write_number(row_index, 5, Some(record.metric_value))?;
        }

        for summary in report.overhead_summary.iter() {
            let sheet = &mut xlsx.overhead_worksheet;
            let row_index = sheet.next_row();
            sheet.write_number(row_index, 0, Some(summary.thread_count as f64))?;
            sheet.write_number(row_index, 1, Some(summary.mean))?;
            sheet.write_quotient(row_index, 2, 1, 0)?;
        }

        for share in report.overhead_shares.iter() {
            let sheet = &mut xlsx.overhead_share_worksheet;
            let row_index = sheet.next_row();
            sheet.write_number(row_index, 0, Some(share.secondary_size as f64))?;
            sheet.write_text(row_index, 1, share.grouping_key.as_str())?;
            sheet.write_number(row_index, 2, Some(share.primary_size as f64))?;
            sheet.write_number(row_index, 3, Some(share.thread_count as f64))?;
            sheet.write_percent(row_index, 4, share.mean_ratio_percent)?;
        }

        Ok(xlsx)
    }
}

#[cfg(test)]
mod tests {
    use super::Xlsx;

    #[test]
    fn value_caption() {
        assert_eq!(Xlsx::value_caption("ms"), "Value (ms)");
        assert_eq!(Xlsx::value_caption("GB/s"), "Value (GB/s)");
        assert_eq!(Xlsx::value_caption("ticks"), "Value");
    }
}
