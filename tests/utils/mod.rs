//! Shared helpers for the integration tests

use std::path::Path;

use chrono::NaiveDate;
use hospital_dashboard::charts::{ChartKind, ChartSet};
use hospital_dashboard::utils::arrow::extract_int64;
use hospital_dashboard::{HospitalData, HospitalTables, RecordBatch, Result, SimulationConfig};
use plotters::prelude::*;

/// Fixed "today" so generated dates do not depend on the clock
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// Default configuration with a fixed date, writing into `output_dir`
#[must_use]
pub fn test_config(output_dir: &Path) -> SimulationConfig {
    SimulationConfig {
        reference_date: reference_date(),
        output_dir: output_dir.to_path_buf(),
        show_progress: false,
        ..Default::default()
    }
}

/// Base tables generated with `seed` and default sizes
pub fn generated_tables(seed: u64) -> Result<HospitalTables> {
    let config = SimulationConfig {
        seed,
        ..test_config(Path::new("."))
    };
    HospitalData::generate(&config)?.to_tables()
}

/// Non-null values of an integer column
#[must_use]
pub fn int_column(batch: &RecordBatch, column: &str) -> Vec<i64> {
    extract_int64(batch, column).unwrap().into_iter().flatten().collect()
}

/// Draw a plain PNG for every chart, without any text
pub fn write_blank_charts(dir: &Path) -> ChartSet {
    let charts = ChartSet::in_dir(dir);
    for (kind, path) in charts.iter() {
        let (width, height) = kind.size();
        let root = BitMapBackend::new(path, (width / 10, height / 10)).into_drawing_area();
        let color = match kind {
            ChartKind::AppointmentStatus => BLUE,
            ChartKind::InsuranceUsage => GREEN,
            ChartKind::TopDiagnoses => CYAN,
            ChartKind::BillingDistribution => RED,
        };
        root.fill(&color).unwrap();
        root.present().unwrap();
    }
    charts
}

/// Names of all entries in a zip archive such as an `.xlsx` workbook
#[must_use]
pub fn archive_entries(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Text of one archive entry
#[must_use]
pub fn archive_text(path: &Path, entry: &str) -> String {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    let mut text = String::new();
    archive.by_name(entry).unwrap().read_to_string(&mut text).unwrap();
    text
}

/// Text between each `open` and the following `close`
#[must_use]
pub fn between<'a>(xml: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    xml.split(open)
        .skip(1)
        .filter_map(|rest| rest.split_once(close).map(|(inner, _)| inner))
        .collect()
}
