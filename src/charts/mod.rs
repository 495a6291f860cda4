//! Chart rendering for the dashboard
//!
//! `ChartRenderer` draws the four dashboard charts as PNG files into the
//! output directory. Each drawing area is presented before the renderer
//! moves on, so every returned path points at a complete image.

pub mod bar;
pub mod density;
pub mod histogram;
pub mod pie;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use plotters::style::RGBColor;

use crate::algorithm::frequency::{first_seen_counts, value_counts};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::tables::HospitalTables;
use crate::utils::arrow::{float64_values, string_values};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Pastel palette for the appointment status bars
pub const PASTEL: [RGBColor; 10] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 155),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
    RGBColor(255, 254, 163),
    RGBColor(185, 242, 240),
];

/// Insurance slice colors, `#66c2a5` and `#fc8d62`
pub const INSURANCE_COLORS: [RGBColor; 2] = [RGBColor(102, 194, 165), RGBColor(252, 141, 98)];

/// Sky blue for the diagnosis bars
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

/// Gray for the billing histogram
pub const GRAY: RGBColor = RGBColor(128, 128, 128);

/// The four dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    AppointmentStatus,
    InsuranceUsage,
    TopDiagnoses,
    BillingDistribution,
}

impl ChartKind {
    /// All charts in rendering order
    pub const ALL: [Self; 4] = [
        Self::AppointmentStatus,
        Self::InsuranceUsage,
        Self::TopDiagnoses,
        Self::BillingDistribution,
    ];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::AppointmentStatus => "appointment_status.png",
            Self::InsuranceUsage => "insurance_usage.png",
            Self::TopDiagnoses => "top_diagnoses.png",
            Self::BillingDistribution => "billing_distribution.png",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AppointmentStatus => "Appointment Status",
            Self::InsuranceUsage => "Insurance Usage",
            Self::TopDiagnoses => "Top Diagnoses",
            Self::BillingDistribution => "Billing Amount Distribution",
        }
    }

    /// Image size in pixels
    #[must_use]
    pub const fn size(self) -> (u32, u32) {
        match self {
            Self::InsuranceUsage => (500, 500),
            _ => (600, 400),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Locations of rendered chart images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSet {
    charts: Vec<(ChartKind, PathBuf)>,
}

impl ChartSet {
    /// Chart paths under `dir`, whether or not the files exist yet
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            charts: ChartKind::ALL
                .iter()
                .map(|kind| (*kind, dir.join(kind.file_name())))
                .collect(),
        }
    }

    #[must_use]
    pub fn path(&self, kind: ChartKind) -> Option<&Path> {
        self.charts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, path)| path.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartKind, &Path)> {
        self.charts.iter().map(|(kind, path)| (*kind, path.as_path()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// Draws the dashboard charts from the base tables
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
    histogram_bins: usize,
    top_diagnoses: usize,
}

impl ChartRenderer {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, histogram_bins: usize, top_diagnoses: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            histogram_bins,
            top_diagnoses,
        }
    }

    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.output_dir.clone(),
            config.histogram_bins,
            config.chart_top_diagnoses,
        )
    }

    /// Render all four charts and return their paths
    pub fn render_all(&self, tables: &HospitalTables) -> Result<ChartSet> {
        std::fs::create_dir_all(&self.output_dir)?;
        let charts = ChartSet::in_dir(&self.output_dir);
        for (kind, path) in charts.iter() {
            self.render(kind, path, tables)?;
        }
        Ok(charts)
    }

    /// Render one chart to `path`
    pub fn render(&self, kind: ChartKind, path: &Path, tables: &HospitalTables) -> Result<()> {
        let start = Instant::now();
        log_operation_start("Rendering chart", path);

        let items = match kind {
            ChartKind::AppointmentStatus => {
                let bars = first_seen_counts(string_values(&tables.appointments, "Status")?);
                bar::draw_vertical_bars(path, kind.size(), kind.title(), "Status", &bars, &PASTEL)?;
                bars.len()
            }
            ChartKind::InsuranceUsage => {
                let slices = value_counts(string_values(&tables.billing, "Insurance_Used")?);
                pie::draw_pie(path, kind.size(), kind.title(), &slices, &INSURANCE_COLORS)?;
                slices.len()
            }
            ChartKind::TopDiagnoses => {
                let mut bars = value_counts(string_values(&tables.visits, "Diagnosis")?);
                bars.truncate(self.top_diagnoses);
                bar::draw_horizontal_bars(path, kind.size(), kind.title(), "Cases", &bars, SKY_BLUE)?;
                bars.len()
            }
            ChartKind::BillingDistribution => {
                let amounts = float64_values(&tables.billing, "Amount")?;
                histogram::draw_histogram(
                    path,
                    kind.size(),
                    kind.title(),
                    "Amount",
                    &amounts,
                    self.histogram_bins,
                    GRAY,
                )?;
                amounts.len()
            }
        };

        log_operation_complete("rendered", path, items, Some(start.elapsed()));
        Ok(())
    }
}
