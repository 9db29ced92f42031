//!
//! XLSX worksheet for performance data.
//!

use super::cell::Cell;

///
/// XLSX worksheet for performance data.
///
/// The first row holds the headers, data rows are appended below.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The number of data rows written.
    pub rows: u32,
    /// Header names and their column widths.
    pub headers: Vec<(String, usize)>,
}

impl Worksheet {
    ///
    /// Creates a new worksheet with the given name and header row.
    ///
    pub fn new(name: &str, headers: Vec<(String, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.as_str(),
                &Self::column_header_format(),
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
    /// Appends a data row and returns its index.
    ///
    /// Text cells get the row header format, numbers the value format.
    /// Rows wider than the header row are rejected.
    ///
    pub fn write_row(&mut self, cells: Vec<Cell>) -> anyhow::Result<u32> {
        if cells.len() > self.headers.len() {
            anyhow::bail!(
                "Row of {} cells does not fit {} columns",
                cells.len(),
                self.headers.len()
            );
        }

        let row_index = self.rows + 1;

        for (column_index, cell) in cells.into_iter().enumerate() {
            let column_index = column_index as u16;
            match cell {
                Cell::Text(text) => {
                    self.worksheet.write_with_format(
                        row_index,
                        column_index,
                        text,
                        &Self::row_header_format(),
                    )?;
                }
                Cell::Number(value) => {
                    self.worksheet.write_with_format(
                        row_index,
                        column_index,
                        value,
                        &Self::value_format(),
                    )?;
                }
                Cell::Empty => {}
            }
        }

        self.rows += 1;
        Ok(row_index)
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_text_wrap();
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
        format
    }
}
