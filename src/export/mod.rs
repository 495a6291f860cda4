//! Workbook export
//!
//! `DashboardWorkbook` collects table sheets, the KPI summary and the chart
//! images into one `.xlsx` file. `export_dashboard` writes the full
//! dashboard in sheet order.

pub mod cells;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet};

use crate::algorithm::aggregation::Aggregates;
use crate::algorithm::kpi::{KpiReport, KpiValue};
use crate::charts::{ChartKind, ChartSet};
use crate::error::{DashboardError, Result};
use crate::tables::HospitalTables;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Name of the sheet holding the KPI table and the charts
pub const KPI_SHEET: &str = "KPI_Summary";

/// Cell (row, column) the top-left corner of each chart is anchored at
#[must_use]
pub const fn chart_anchor(kind: ChartKind) -> (u32, u16) {
    match kind {
        ChartKind::AppointmentStatus => (1, 3), // D2
        ChartKind::InsuranceUsage => (19, 3), // D20
        ChartKind::TopDiagnoses => (1, 9), // J2
        ChartKind::BillingDistribution => (19, 9), // J20
    }
}

/// A written sheet and its number of data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
}

/// What a workbook export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub sheets: Vec<SheetSummary>,
    pub images: usize,
}

impl ExportSummary {
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    #[must_use]
    pub fn rows(&self, sheet: &str) -> Option<usize> {
        self.sheets.iter().find(|s| s.name == sheet).map(|s| s.rows)
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workbook: {}", self.path.display())?;
        for sheet in &self.sheets {
            writeln!(f, "  {}: {} rows", sheet.name, sheet.rows)?;
        }
        write!(f, "  Images: {}", self.images)
    }
}

/// Builder for the dashboard workbook
pub struct DashboardWorkbook {
    workbook: Workbook,
    header: Format,
    date: Format,
    sheets: Vec<SheetSummary>,
    images: usize,
}

impl Default for DashboardWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardWorkbook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            header: Format::new()
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
            date: Format::new().set_num_format("yyyy-mm-dd"),
            sheets: Vec::new(),
            images: 0,
        }
    }

    fn add_sheet(&mut self, name: &str, rows: usize) -> Result<&mut Worksheet> {
        self.sheets.push(SheetSummary {
            name: name.to_string(),
            rows,
        });
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(name)?;
        Ok(sheet)
    }

    /// Add a sheet with a header row and one row per record
    pub fn add_table(&mut self, name: &str, batch: &RecordBatch) -> Result<()> {
        let header = self.header.clone();
        let date = self.date.clone();
        let schema = batch.schema();
        let sheet = self.add_sheet(name, batch.num_rows())?;

        for (col, (field, array)) in schema.fields().iter().zip(batch.columns()).enumerate() {
            let col = u16::try_from(col).map_err(|_| rust_xlsxwriter::XlsxError::RowColumnLimitError)?;
            sheet.write_string_with_format(0, col, field.name(), &header)?;
            cells::write_column(sheet, col, field.name(), array, &date)?;
        }
        Ok(())
    }

    /// Add the (Metric, Value) KPI sheet
    pub fn add_kpi_summary(&mut self, report: &KpiReport) -> Result<()> {
        let header = self.header.clone();
        let rows = report.summary_rows();
        let sheet = self.add_sheet(KPI_SHEET, rows.len())?;

        sheet.write_string_with_format(0, 0, "Metric", &header)?;
        sheet.write_string_with_format(0, 1, "Value", &header)?;
        sheet.set_column_width(0, 22)?;
        for (i, row) in rows.iter().enumerate() {
            let r = cells::data_row(i)?;
            sheet.write_string(r, 0, row.metric)?;
            match &row.value {
                KpiValue::Integer(v) => sheet.write_number(r, 1, *v as f64)?,
                KpiValue::Number(v) => sheet.write_number(r, 1, *v)?,
                KpiValue::Text(v) => sheet.write_string(r, 1, v)?,
            };
        }
        Ok(())
    }

    /// Embed the chart images into the KPI sheet
    ///
    /// Every image must exist on disk; a missing one fails the export.
    pub fn insert_charts(&mut self, charts: &ChartSet) -> Result<usize> {
        for (_, path) in charts.iter() {
            if !path.is_file() {
                return Err(DashboardError::MissingChart {
                    path: path.to_path_buf(),
                });
            }
        }

        let sheet = self.workbook.worksheet_from_name(KPI_SHEET)?;
        for (kind, path) in charts.iter() {
            let (row, col) = chart_anchor(kind);
            let image = Image::new(path)?;
            sheet.insert_image(row, col, &image)?;
            self.images += 1;
        }
        Ok(charts.len())
    }

    /// Write the workbook to `path`, replacing any existing file
    pub fn save(mut self, path: &Path) -> Result<ExportSummary> {
        self.workbook.save(path)?;
        Ok(ExportSummary {
            path: path.to_path_buf(),
            sheets: self.sheets,
            images: self.images,
        })
    }
}

/// Write the complete dashboard workbook
///
/// Sheets: the six base tables, the three aggregates, then the KPI summary
/// with the charts embedded.
pub fn export_dashboard(
    path: &Path,
    tables: &HospitalTables,
    aggregates: &Aggregates,
    report: &KpiReport,
    charts: &ChartSet,
) -> Result<ExportSummary> {
    let start = Instant::now();
    log_operation_start("Writing workbook", path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut workbook = DashboardWorkbook::new();
    for (name, batch) in tables.sheets() {
        workbook.add_table(name, batch)?;
    }
    for (name, batch) in aggregates.sheets()? {
        workbook.add_table(name, &batch)?;
    }
    workbook.add_kpi_summary(report)?;
    workbook.insert_charts(charts)?;

    let summary = workbook.save(path)?;
    log_operation_complete("wrote", path, summary.sheets.len(), Some(start.elapsed()));
    Ok(summary)
}
