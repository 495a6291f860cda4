//! Key performance indicators of the hospital dataset
//!
//! `KpiCalculator::calculate` reads the base tables and produces a
//! `KpiReport`. The report renders the nine rows of the KPI summary sheet
//! and a human-readable summary for the log.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::algorithm::frequency::{proportions, value_counts};
use crate::algorithm::generation::fields::round_to_cents;
use crate::error::Result;
use crate::models::{Appointment, Department, Doctor, InsuranceUsed, Patient, TableRecord};
use crate::tables::HospitalTables;
use crate::utils::arrow::{extract_int64, float64_values, string_values};
use arrow::record_batch::RecordBatch;

/// Shown as the top diagnosis when no visits exist
pub const NO_DIAGNOSIS: &str = "N/A";

/// Summary statistics of one generated dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiReport {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
    pub total_departments: usize,
    /// Appointment count per status, most frequent first
    pub appointment_status_counts: Vec<(String, usize)>,
    pub total_billed_amount: f64,
    pub average_bill_amount: f64,
    /// Share of bills per insurance value, rounded to two decimals
    pub insurance_usage: Vec<(String, f64)>,
    pub top_diagnoses: Vec<(String, usize)>,
}

/// Value cell of a KPI summary row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KpiValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v:.2}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// One (Metric, Value) row of the KPI summary sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRow {
    pub metric: &'static str,
    pub value: KpiValue,
}

impl KpiReport {
    /// Share of bills with the given insurance value, 0 when absent
    #[must_use]
    pub fn insurance_share(&self, value: InsuranceUsed) -> f64 {
        self.insurance_usage
            .iter()
            .find(|(label, _)| label == value.as_str())
            .map_or(0.0, |(_, share)| *share)
    }

    /// Most frequent diagnosis
    #[must_use]
    pub fn top_diagnosis(&self) -> Option<&str> {
        self.top_diagnoses.first().map(|(name, _)| name.as_str())
    }

    /// The nine rows of the KPI summary sheet, in sheet order
    #[must_use]
    pub fn summary_rows(&self) -> Vec<KpiRow> {
        let count = |n: usize| KpiValue::Integer(i64::try_from(n).unwrap_or(i64::MAX));
        let percent = |value: InsuranceUsed| KpiValue::Number(round_to_cents(self.insurance_share(value) * 100.0));
        vec![
            KpiRow { metric: "Total Patients", value: count(self.total_patients) },
            KpiRow { metric: "Total Doctors", value: count(self.total_doctors) },
            KpiRow { metric: "Total Appointments", value: count(self.total_appointments) },
            KpiRow { metric: "Total Departments", value: count(self.total_departments) },
            KpiRow {
                metric: "Total Billed Amount",
                value: KpiValue::Number(round_to_cents(self.total_billed_amount)),
            },
            KpiRow {
                metric: "Average Bill Amount",
                value: KpiValue::Number(round_to_cents(self.average_bill_amount)),
            },
            KpiRow { metric: "Insurance Yes (%)", value: percent(InsuranceUsed::Yes) },
            KpiRow { metric: "Insurance No (%)", value: percent(InsuranceUsed::No) },
            KpiRow {
                metric: "Top Diagnosis",
                value: KpiValue::Text(self.top_diagnosis().unwrap_or(NO_DIAGNOSIS).to_string()),
            },
        ]
    }
}

impl fmt::Display for KpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hospital KPI Summary:")?;
        for row in self.summary_rows() {
            writeln!(f, "  {}: {}", row.metric, row.value)?;
        }
        writeln!(f, "  Appointment Status Counts:")?;
        for (status, count) in &self.appointment_status_counts {
            writeln!(f, "    {status}: {count}")?;
        }
        writeln!(f, "  Top Diagnoses:")?;
        for (diagnosis, count) in &self.top_diagnoses {
            writeln!(f, "    {diagnosis}: {count}")?;
        }
        Ok(())
    }
}

/// Computes the KPI report from the base tables
#[derive(Debug, Clone, Copy)]
pub struct KpiCalculator {
    top_diagnoses: usize,
}

impl Default for KpiCalculator {
    fn default() -> Self {
        Self { top_diagnoses: 3 }
    }
}

impl KpiCalculator {
    /// Calculator keeping the `top_diagnoses` most frequent diagnoses
    #[must_use]
    pub fn new(top_diagnoses: usize) -> Self {
        Self { top_diagnoses }
    }

    /// Compute the report
    pub fn calculate(&self, tables: &HospitalTables) -> Result<KpiReport> {
        let amounts = float64_values(&tables.billing, "Amount")?;
        let total_billed_amount: f64 = amounts.iter().sum();
        let average_bill_amount = if amounts.is_empty() {
            0.0
        } else {
            total_billed_amount / amounts.len() as f64
        };

        let insurance = string_values(&tables.billing, "Insurance_Used")?;
        let insurance_usage = proportions(&value_counts(insurance.iter().copied()), insurance.len());

        let mut top_diagnoses = value_counts(string_values(&tables.visits, "Diagnosis")?);
        top_diagnoses.truncate(self.top_diagnoses);

        Ok(KpiReport {
            total_patients: distinct_keys(&tables.patients, Patient::KEY_COLUMN)?,
            total_doctors: distinct_keys(&tables.doctors, Doctor::KEY_COLUMN)?,
            total_appointments: distinct_keys(&tables.appointments, Appointment::KEY_COLUMN)?,
            total_departments: distinct_keys(&tables.departments, Department::KEY_COLUMN)?,
            appointment_status_counts: value_counts(string_values(&tables.appointments, "Status")?),
            total_billed_amount,
            average_bill_amount,
            insurance_usage,
            top_diagnoses,
        })
    }
}

/// Number of distinct non-null values in an integer key column
fn distinct_keys(batch: &RecordBatch, column: &str) -> Result<usize> {
    let keys: FxHashSet<i64> = extract_int64(batch, column)?.into_iter().flatten().collect();
    Ok(keys.len())
}
