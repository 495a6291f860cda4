//! Workbook export with text-free chart images

use std::fs;

use hospital_dashboard::charts::ChartKind;
use hospital_dashboard::{Aggregates, DashboardError, KpiCalculator, export_dashboard};

use crate::utils::{archive_entries, archive_text, between, generated_tables, write_blank_charts};

const SHEETS: [&str; 10] = [
    "Patients",
    "Doctors",
    "Departments",
    "Appointments",
    "Visits",
    "Billing",
    "Doctor_Appointments",
    "Revenue_By_Department",
    "Diagnosis_By_Doctor",
    "KPI_Summary",
];

#[test]
fn test_export_writes_all_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();
    let charts = write_blank_charts(dir.path());
    let path = dir.path().join("dashboard.xlsx");

    let summary = export_dashboard(&path, &tables, &aggregates, &report, &charts).unwrap();

    assert_eq!(summary.sheet_names(), SHEETS);
    assert_eq!(summary.images, 4);
    assert_eq!(summary.rows("Patients"), Some(50));
    assert_eq!(summary.rows("Doctors"), Some(10));
    assert_eq!(summary.rows("Departments"), Some(5));
    assert_eq!(summary.rows("Appointments"), Some(100));
    assert_eq!(summary.rows("Visits"), Some(80));
    assert_eq!(summary.rows("Billing"), Some(90));
    assert_eq!(summary.rows("KPI_Summary"), Some(9));
    assert_eq!(
        summary.rows("Doctor_Appointments"),
        Some(aggregates.doctor_appointments.len())
    );

    // xlsx files are zip archives
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_saved_workbook_contents() {
    let dir = tempfile::tempdir().unwrap();
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();
    let charts = write_blank_charts(dir.path());
    let path = dir.path().join("dashboard.xlsx");
    export_dashboard(&path, &tables, &aggregates, &report, &charts).unwrap();

    // sheet order as stored in the workbook part
    let workbook = archive_text(&path, "xl/workbook.xml");
    let names: Vec<&str> = between(&workbook, "<sheet name=\"", "\"");
    assert_eq!(names, SHEETS);

    // KPI_Summary is the tenth sheet: header plus nine metric rows
    let kpi_sheet = archive_text(&path, "xl/worksheets/sheet10.xml");
    assert_eq!(kpi_sheet.matches("<row r=\"").count(), 10);
    let shared = archive_text(&path, "xl/sharedStrings.xml");
    let strings: Vec<&str> = between(&shared, "<si>", "</si>")
        .into_iter()
        .filter_map(|si| si.split_once('>').and_then(|(_, t)| t.split_once("</t>")))
        .map(|(text, _)| text)
        .collect();
    let metrics: Vec<&str> = (2..=10)
        .map(|row| {
            let cell = format!("<c r=\"A{row}\"");
            let after = kpi_sheet.split_once(cell.as_str()).unwrap().1;
            let index: usize = between(after, "<v>", "</v>")[0].parse().unwrap();
            strings[index]
        })
        .collect();
    let expected: Vec<&str> = report.summary_rows().iter().map(|r| r.metric).collect();
    assert_eq!(metrics, expected);

    // four embedded images
    let entries = archive_entries(&path);
    let media = entries
        .iter()
        .filter(|name| name.starts_with("xl/media/") && name.ends_with(".png"))
        .count();
    assert_eq!(media, 4);

    // anchored at D2, D20, J2, J20 (zero-based col/row)
    let drawing = archive_text(&path, "xl/drawings/drawing1.xml");
    let mut anchors: Vec<(u32, u32)> = between(&drawing, "<xdr:from>", "</xdr:from>")
        .into_iter()
        .map(|from| {
            let col = between(from, "<xdr:col>", "</xdr:col>")[0].parse().unwrap();
            let row = between(from, "<xdr:row>", "</xdr:row>")[0].parse().unwrap();
            (col, row)
        })
        .collect();
    anchors.sort_unstable();
    assert_eq!(anchors, [(3, 1), (3, 19), (9, 1), (9, 19)]);
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let tables = generated_tables(5).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();
    let charts = write_blank_charts(dir.path());
    let path = dir.path().join("dashboard.xlsx");
    fs::write(&path, b"stale").unwrap();

    export_dashboard(&path, &tables, &aggregates, &report, &charts).unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"PK"));
}

#[test]
fn test_missing_chart_aborts_export() {
    let dir = tempfile::tempdir().unwrap();
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();
    let charts = write_blank_charts(dir.path());
    let missing = charts.path(ChartKind::InsuranceUsage).unwrap().to_path_buf();
    fs::remove_file(&missing).unwrap();
    let path = dir.path().join("dashboard.xlsx");

    let err = export_dashboard(&path, &tables, &aggregates, &report, &charts).unwrap_err();
    match err {
        DashboardError::MissingChart { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}
