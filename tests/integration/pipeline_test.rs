//! End-to-end pipeline runs
//!
//! Runs that draw chart captions and labels need a system font, so they are
//! ignored by default. Run them with `cargo test -- --ignored`.

use hospital_dashboard::charts::{ChartKind, ChartRenderer};
use hospital_dashboard::{DashboardError, run};

use crate::utils::{generated_tables, test_config};

#[test]
#[ignore = "needs a system font for chart text"]
fn test_render_all_charts() {
    let dir = tempfile::tempdir().unwrap();
    let tables = generated_tables(42).unwrap();
    let charts = ChartRenderer::from_config(&test_config(dir.path()))
        .render_all(&tables)
        .unwrap();

    assert_eq!(charts.len(), 4);
    for kind in ChartKind::ALL {
        let path = charts.path(kind).unwrap();
        assert!(path.is_file(), "{} missing", path.display());
    }
}

#[test]
#[ignore = "needs a system font for chart text"]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let report = run(&config).unwrap();

    assert_eq!(report.export.sheets.len(), 10);
    assert_eq!(report.export.images, 4);
    assert_eq!(report.export.rows("KPI_Summary"), Some(9));
    assert!(config.workbook_path().is_file());
    assert_eq!(report.kpis.total_appointments, 100);
}

#[test]
fn test_invalid_config_stops_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.sizes.billing = 150;

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DashboardError::Config(_)));
    assert!(!config.workbook_path().exists());
    assert!(!dir.path().join(ChartKind::AppointmentStatus.file_name()).exists());
}
