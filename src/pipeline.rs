//! End-to-end dashboard run
//!
//! `run` executes the steps in order: generate the dataset, build the Arrow
//! tables, compute KPIs, render charts, aggregate, and export the workbook.
//! Charts are on disk before the export starts.

use std::time::Instant;

use crate::algorithm::aggregation::Aggregates;
use crate::algorithm::generation::HospitalData;
use crate::algorithm::kpi::{KpiCalculator, KpiReport};
use crate::charts::{ChartRenderer, ChartSet};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::export::{ExportSummary, export_dashboard};
use crate::tables::HospitalTables;
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};

const TOTAL_STEPS: u64 = 6;

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub tables: HospitalTables,
    pub kpis: KpiReport,
    pub aggregates: Aggregates,
    pub charts: ChartSet,
    pub export: ExportSummary,
}

fn step(pb: &indicatif::ProgressBar, message: &'static str) {
    log::info!("[Step {}/{}] {}", pb.position() + 1, TOTAL_STEPS, message);
    pb.set_message(message);
}

/// Run the full pipeline with `config`
pub fn run(config: &SimulationConfig) -> Result<DashboardReport> {
    let start = Instant::now();
    log::info!("Starting hospital dashboard simulation");
    log::info!("Configuration: {config}");

    let pb = create_main_progress_bar(TOTAL_STEPS, Some("Starting"), config.show_progress);

    step(&pb, "Generating dataset");
    let data = HospitalData::generate(config)?;
    pb.inc(1);

    step(&pb, "Building tables");
    let tables = data.to_tables()?;
    pb.inc(1);

    step(&pb, "Computing KPIs");
    let kpis = KpiCalculator::new(config.kpi_top_diagnoses).calculate(&tables)?;
    match serde_json::to_string_pretty(&kpis) {
        Ok(json) => log::debug!("KPI report:\n{json}"),
        Err(e) => log::warn!("Could not serialize KPI report: {e}"),
    }
    pb.inc(1);

    step(&pb, "Rendering charts");
    let charts = ChartRenderer::from_config(config).render_all(&tables)?;
    pb.inc(1);

    step(&pb, "Aggregating relational insights");
    let aggregates = Aggregates::compute(&tables)?;
    pb.inc(1);

    step(&pb, "Exporting workbook");
    let export = export_dashboard(&config.workbook_path(), &tables, &aggregates, &kpis, &charts)?;
    pb.inc(1);

    finish_progress_bar(&pb, Some("Dashboard complete"));
    log::info!("Dashboard written in {:?}", start.elapsed());

    Ok(DashboardReport {
        tables,
        kpis,
        aggregates,
        charts,
        export,
    })
}
