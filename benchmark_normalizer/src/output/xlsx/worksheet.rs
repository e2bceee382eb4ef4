//!
//! XLSX worksheet for report tables.
//!

///
/// XLSX worksheet for report tables.
///
/// Row 0 holds the captions, data rows are appended below.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The number of data rows written.
    pub rows: u32,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

impl Worksheet {
    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(Self {
            worksheet,
            rows: 0,
            headers,
        })
    }

    ///
    /// Allocates a new data row and returns its index.
    ///
    pub fn next_row(&mut self) -> u32 {
        self.rows += 1;
        self.rows
    }

    ///
    /// Writes a text cell.
    ///
    pub fn write_text(&mut self, row_index: u32, column_index: u16, text: &str) -> anyhow::Result<()> {
        self.worksheet.write_with_format(
            row_index,
            column_index,
            text,
            &Self::row_header_format(),
        )?;
        Ok(())
    }

    ///
    /// Writes a numeric cell. Absent and non-finite values leave the cell blank.
    ///
    pub fn write_number(
        &mut self,
        row_index: u32,
        column_index: u16,
        value: Option<f64>,
    ) -> anyhow::Result<()> {
        let Some(value) = value.filter(|value| value.is_finite()) else {
            return Ok(());
        };
        self.worksheet.write_with_format(
            row_index,
            column_index,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Writes a percentage cell, with `value` given in percent.
    /// Non-finite values leave the cell blank.
    ///
    pub fn write_percent(&mut self, row_index: u32, column_index: u16, value: f64) -> anyhow::Result<()> {
        if !value.is_finite() {
            return Ok(());
        }
        self.worksheet.write_with_format(
            row_index,
            column_index,
            value / 100.0,
            &Self::percent_format(),
        )?;
        Ok(())
    }

    ///
    /// Writes the quotient of two cells of the same row.
    ///
    pub fn write_quotient(
        &mut self,
        row_index: u32,
        column_index: u16,
        dividend_column_index: u16,
        divisor_column_index: u16,
    ) -> anyhow::Result<()> {
        let row_number = row_index + 1;
        let dividend = Self::column_identifier(dividend_column_index);
        let divisor = Self::column_identifier(divisor_column_index);
        self.worksheet.write_formula_with_format(
            row_index,
            column_index,
            format!(
                r#"=IF({divisor}{row_number}<>0, {dividend}{row_number} / {divisor}{row_number}, "")"#
            )
            .as_str(),
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut index = index;

        loop {
            let letter = (b'A' + (index % 26) as u8) as char;
            identifier.insert(0, letter);
            if index < 26 {
                break;
            }
            index = index / 26 - 1;
        }

        identifier
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(14);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("0.000");
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("0.000%");
        format
    }
}

#[cfg(test)]
mod tests {
    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(2), "C");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(27), "AB");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }
}
