//! Algorithm implementations for the hospital dashboard
//!
//! This module contains dataset generation, KPI calculation, frequency
//! counting, and the relational aggregations behind the derived sheets.

pub mod aggregation;
pub mod frequency;
pub mod generation;
pub mod kpi;

pub use aggregation::Aggregates;
pub use generation::{HospitalData, HospitalGenerator};
pub use kpi::{KpiCalculator, KpiReport};
