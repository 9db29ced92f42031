//!
//! The performance comparison charts.
//!

#[cfg(test)]
mod tests;

pub mod table;

use rust_xlsxwriter::Chart;
use rust_xlsxwriter::ChartDataLabel;
use rust_xlsxwriter::ChartFormat;
use rust_xlsxwriter::ChartLegendPosition;
use rust_xlsxwriter::ChartSolidFill;
use rust_xlsxwriter::ChartType;
use rust_xlsxwriter::Color;

use crate::output::xlsx::cell::Cell;
use crate::output::xlsx::worksheet::Worksheet;

use self::table::Table;

///
/// The performance comparison charts of a single build type.
///
/// The workbook contains a data worksheet and a chart worksheet with one stacked
/// horizontal bar chart per test, plus a final run time chart.
///
pub struct Charts {
    /// The chart data.
    pub table: Table,
}

impl Charts {
    /// The data worksheet name.
    pub const DATA_WORKSHEET: &'static str = "Data";
    /// The chart worksheet name.
    pub const CHARTS_WORKSHEET: &'static str = "Charts";

    /// The number of charts in a grid row.
    pub const GRID_COLUMNS: usize = 5;
    /// The chart width in pixels.
    const CHART_WIDTH: u32 = 640;
    /// The chart height in pixels.
    const CHART_HEIGHT: u32 = 400;
    /// The cell columns taken by a chart.
    const CHART_CELL_COLUMNS: usize = 11;
    /// The cell rows taken by a chart.
    const CHART_CELL_ROWS: usize = 21;

    /// The warm up series color.
    const WARM_UP_COLOR: u32 = 0xEC407A;
    /// The total time series color.
    const TOTAL_TIME_COLOR: u32 = 0xFFA726;
    /// The run time series color.
    const RUN_TIME_COLOR: u32 = 0x9CCC65;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    ///
    /// Returns the output file name.
    ///
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.table.build_type)
    }

    ///
    /// Builds the workbook.
    ///
    pub fn workbook(&self) -> anyhow::Result<rust_xlsxwriter::Workbook> {
        let data = self.data_worksheet()?;
        let rows = data.rows;

        let mut charts = rust_xlsxwriter::Worksheet::new();
        charts.set_name(Self::CHARTS_WORKSHEET)?;

        if rows > 0 {
            for (index, name) in self.table.tests.iter().enumerate() {
                let warm_up_column = (1 + 2 * index) as u16;
                let total_time_column = warm_up_column + 1;

                let mut chart = Self::chart(format!("{name}\n Lower is better").as_str());
                chart
                    .add_series()
                    .set_name("warm up time (ms)")
                    .set_categories((Self::DATA_WORKSHEET, 1, 0, rows, 0))
                    .set_values((
                        Self::DATA_WORKSHEET,
                        1,
                        warm_up_column,
                        rows,
                        warm_up_column,
                    ))
                    .set_format(&mut Self::fill(Self::WARM_UP_COLOR))
                    .set_data_label(ChartDataLabel::new().show_value());
                chart
                    .add_series()
                    .set_name("run time (ms)")
                    .set_categories((Self::DATA_WORKSHEET, 1, 0, rows, 0))
                    .set_values((
                        Self::DATA_WORKSHEET,
                        1,
                        total_time_column,
                        rows,
                        total_time_column,
                    ))
                    .set_format(&mut Self::fill(Self::TOTAL_TIME_COLOR))
                    .set_data_label(ChartDataLabel::new().show_value());

                let (row, column) = Self::position(index);
                charts.insert_chart(row, column, &chart)?;
            }

            let run_time_column = (1 + 2 * self.table.tests.len()) as u16;
            let mut chart = Chart::new(ChartType::Bar);
            Self::decorate(&mut chart, "run time\n Lower is better");
            chart
                .add_series()
                .set_name("run time (s)")
                .set_categories((Self::DATA_WORKSHEET, 1, 0, rows, 0))
                .set_values((
                    Self::DATA_WORKSHEET,
                    1,
                    run_time_column,
                    rows,
                    run_time_column,
                ))
                .set_format(&mut Self::fill(Self::RUN_TIME_COLOR))
                .set_data_label(ChartDataLabel::new().show_value());

            let (row, column) = Self::position(self.table.tests.len());
            charts.insert_chart(row, column, &chart)?;
        }

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(charts);
        workbook.push_worksheet(data.into_inner());
        Ok(workbook)
    }

    ///
    /// Writes the chart data, one row per run.
    ///
    fn data_worksheet(&self) -> anyhow::Result<Worksheet> {
        let mut headers = Vec::with_capacity(2 + 2 * self.table.tests.len());
        headers.push(("Machine Branch".to_owned(), 30));
        for name in self.table.tests.iter() {
            headers.push((format!("{name}\nwarm up (ms)"), 14));
            headers.push((format!("{name}\nrun time (ms)"), 14));
        }
        headers.push(("run time (s)".to_owned(), 14));

        let mut worksheet = Worksheet::new(Self::DATA_WORKSHEET, headers)?;
        for row in self.table.rows.iter() {
            let mut cells = Vec::with_capacity(2 + 2 * row.measurements.len());
            cells.push(Cell::from(row.label.as_str()));
            for measurement in row.measurements.iter() {
                cells.push(measurement.map(|(warm_up, _)| warm_up).into());
                cells.push(measurement.map(|(_, total_time)| total_time).into());
            }
            cells.push(row.run_time.into());
            worksheet.write_row(cells)?;
        }
        Ok(worksheet)
    }

    ///
    /// Creates a stacked horizontal bar chart.
    ///
    fn chart(title: &str) -> Chart {
        let mut chart = Chart::new(ChartType::BarStacked);
        Self::decorate(&mut chart, title);
        chart
    }

    ///
    /// Sets the title, size and legend shared by all charts.
    ///
    fn decorate(chart: &mut Chart, title: &str) {
        chart.title().set_name(title);
        chart.legend().set_position(ChartLegendPosition::Bottom);
        chart.set_width(Self::CHART_WIDTH);
        chart.set_height(Self::CHART_HEIGHT);
    }

    ///
    /// Returns the solid fill series format.
    ///
    fn fill(color: u32) -> ChartFormat {
        let mut format = ChartFormat::new();
        format.set_solid_fill(ChartSolidFill::new().set_color(Color::RGB(color)));
        format
    }

    ///
    /// Returns the top-left cell of the chart with the given index in the grid.
    ///
    pub fn position(index: usize) -> (u32, u16) {
        let row = (index / Self::GRID_COLUMNS) * Self::CHART_CELL_ROWS;
        let column = (index % Self::GRID_COLUMNS) * Self::CHART_CELL_COLUMNS;
        (row as u32, column as u16)
    }
}
