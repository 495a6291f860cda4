//! Configuration for the hospital dataset simulation.
//!
//! Every knob of a run lives here. The defaults reproduce the reference
//! dashboard; tests shrink or redirect them.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{DashboardError, Result};

/// Default master seed for all random streams
pub const DEFAULT_SEED: u64 = 42;

/// Default workbook file name
pub const DEFAULT_WORKBOOK: &str = "hospital_dashboard.xlsx";

/// Number of rows generated for each table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSizes {
    pub departments: usize,
    pub doctors: usize,
    pub patients: usize,
    pub appointments: usize,
    pub visits: usize,
    pub billing: usize,
}

impl Default for TableSizes {
    fn default() -> Self {
        Self {
            departments: 5,
            doctors: 10,
            patients: 50,
            appointments: 100,
            visits: 80,
            billing: 90,
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Master seed the three random streams are derived from
    pub seed: u64,
    /// Row counts per table
    pub sizes: TableSizes,
    /// The "today" that date windows end at
    pub reference_date: NaiveDate,
    /// Patients register within this many days before the reference date
    pub registration_window_days: i64,
    /// Appointments fall within this many days before the reference date
    pub appointment_window_days: i64,
    /// Range bill amounts are drawn from
    pub amount_range: RangeInclusive<f64>,
    /// Number of bins in the billing histogram
    pub histogram_bins: usize,
    /// Number of diagnoses kept in the KPI report
    pub kpi_top_diagnoses: usize,
    /// Number of diagnoses drawn in the top-diagnoses chart
    pub chart_top_diagnoses: usize,
    /// Directory receiving the chart images and the workbook
    pub output_dir: PathBuf,
    /// File name of the workbook inside `output_dir`
    pub workbook_name: String,
    /// Whether to draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sizes: TableSizes::default(),
            reference_date: chrono::Local::now().date_naive(),
            registration_window_days: 730,
            appointment_window_days: 365,
            amount_range: 500.0..=5000.0,
            histogram_bins: 15,
            kpi_top_diagnoses: 3,
            chart_top_diagnoses: 5,
            output_dir: PathBuf::from("."),
            workbook_name: DEFAULT_WORKBOOK.to_string(),
            show_progress: true,
        }
    }
}

impl SimulationConfig {
    /// Full path of the workbook
    #[must_use]
    pub fn workbook_path(&self) -> PathBuf {
        self.output_dir.join(&self.workbook_name)
    }

    /// Check that the configuration can be satisfied
    ///
    /// Visits and bills sample appointments without replacement, so neither
    /// may outnumber the appointments.
    pub fn validate(&self) -> Result<()> {
        let sizes = &self.sizes;
        if sizes.visits > sizes.appointments {
            return Err(DashboardError::Config(format!(
                "cannot draw {} visits from {} appointments",
                sizes.visits, sizes.appointments
            )));
        }
        if sizes.billing > sizes.appointments {
            return Err(DashboardError::Config(format!(
                "cannot draw {} bills from {} appointments",
                sizes.billing, sizes.appointments
            )));
        }
        if sizes.appointments > 0 && (sizes.patients == 0 || sizes.doctors == 0) {
            return Err(DashboardError::Config(
                "appointments need at least one patient and one doctor".to_string(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(DashboardError::Config(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if self.registration_window_days < 0 || self.appointment_window_days < 0 {
            return Err(DashboardError::Config(
                "date windows must not be negative".to_string(),
            ));
        }
        if !self.amount_range.start().is_finite() || !self.amount_range.end().is_finite() {
            return Err(DashboardError::Config(
                "amount range bounds must be finite".to_string(),
            ));
        }
        if self.amount_range.start() > self.amount_range.end() {
            return Err(DashboardError::Config("amount range is empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Configuration:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        writeln!(
            f,
            "  Rows: {} departments, {} doctors, {} patients, {} appointments, {} visits, {} bills",
            self.sizes.departments,
            self.sizes.doctors,
            self.sizes.patients,
            self.sizes.appointments,
            self.sizes.visits,
            self.sizes.billing
        )?;
        writeln!(f, "  Registration Window: {} days", self.registration_window_days)?;
        writeln!(f, "  Appointment Window: {} days", self.appointment_window_days)?;
        writeln!(f, "  Output: {}", self.workbook_path().display())
    }
}
