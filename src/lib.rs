//! A hospital dataset simulator that summarizes the generated data as KPIs,
//! charts and relational insights, and exports it all to an Excel dashboard.

pub mod algorithm;
pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod random;
pub mod tables;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::{Aggregates, HospitalData, HospitalGenerator, KpiCalculator, KpiReport};
pub use charts::{ChartKind, ChartRenderer, ChartSet};
pub use config::{SimulationConfig, TableSizes};
pub use error::{DashboardError, Result};
pub use export::{DashboardWorkbook, ExportSummary, export_dashboard};
pub use pipeline::{DashboardReport, run};
pub use tables::HospitalTables;

// Arrow types
pub use arrow::record_batch::RecordBatch;
