//! Relational insights over the base tables
//!
//! Each derived table is an inner join followed by a group-by, computed on
//! the Arrow columns of `HospitalTables`. Rows whose key finds no partner are
//! dropped, never null-padded, and groups come out in ascending key order.

use std::collections::BTreeMap;

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;
use crate::tables::HospitalTables;
use crate::utils::arrow::{extract_float64, extract_int64, extract_string};

/// Appointment count per doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointments {
    #[serde(rename = "Doctor_ID")]
    pub doctor_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Total_Appointments")]
    pub total_appointments: i64,
}

/// Billed revenue per department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRevenue {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Total_Revenue")]
    pub total_revenue: f64,
}

/// Diagnosis count per doctor name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisByDoctor {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Diagnosis_Count")]
    pub diagnosis_count: i64,
}

/// The three derived tables
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub doctor_appointments: Vec<DoctorAppointments>,
    pub revenue_by_department: Vec<DepartmentRevenue>,
    pub diagnosis_by_doctor: Vec<DiagnosisByDoctor>,
}

impl Aggregates {
    /// Compute all derived tables
    pub fn compute(tables: &HospitalTables) -> Result<Self> {
        Ok(Self {
            doctor_appointments: doctor_appointments(tables)?,
            revenue_by_department: revenue_by_department(tables)?,
            diagnosis_by_doctor: diagnosis_by_doctor(tables)?,
        })
    }

    /// Derived tables as record batches with their sheet names, in workbook order
    pub fn sheets(&self) -> Result<Vec<(&'static str, RecordBatch)>> {
        Ok(vec![
            ("Doctor_Appointments", rows_to_batch(&self.doctor_appointments)?),
            ("Revenue_By_Department", rows_to_batch(&self.revenue_by_department)?),
            ("Diagnosis_By_Doctor", rows_to_batch(&self.diagnosis_by_doctor)?),
        ])
    }
}

/// Convert aggregate rows to a record batch
///
/// The schema is traced from the row type, so an empty table still gets its
/// columns.
pub fn rows_to_batch<T: Serialize + DeserializeOwned>(rows: &[T]) -> Result<RecordBatch> {
    let fields = Vec::<FieldRef>::from_type::<T>(TracingOptions::default())?;
    Ok(serde_arrow::to_record_batch(&fields, &rows)?)
}

/// Row positions per non-null key
fn index_by_key(keys: &[Option<i64>]) -> FxHashMap<i64, Vec<usize>> {
    let mut index: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
    for (row, key) in keys.iter().enumerate() {
        if let Some(key) = key {
            index.entry(*key).or_default().push(row);
        }
    }
    index
}

/// Rows of the right side matching `key`, empty for null or unmatched keys
fn matches<'a>(index: &'a FxHashMap<i64, Vec<usize>>, key: Option<i64>) -> &'a [usize] {
    key.and_then(|k| index.get(&k)).map_or(&[], Vec::as_slice)
}

/// Join Appointment to Doctor on `Doctor_ID`, count appointments per (`Doctor_ID`, Name)
pub fn doctor_appointments(tables: &HospitalTables) -> Result<Vec<DoctorAppointments>> {
    let appointment_ids = extract_int64(&tables.appointments, "Appointment_ID")?;
    let appointment_doctors = extract_int64(&tables.appointments, "Doctor_ID")?;
    let doctor_ids = extract_int64(&tables.doctors, "Doctor_ID")?;
    let doctor_names = extract_string(&tables.doctors, "Name")?;
    let doctors = index_by_key(&doctor_ids);

    let mut groups: BTreeMap<(i64, &str), i64> = BTreeMap::new();
    for (appointment_id, doctor_id) in appointment_ids.iter().zip(&appointment_doctors) {
        for &doctor_row in matches(&doctors, *doctor_id) {
            let (Some(id), Some(name)) = (doctor_ids[doctor_row], doctor_names[doctor_row]) else {
                continue;
            };
            let count = groups.entry((id, name)).or_insert(0);
            if appointment_id.is_some() {
                *count += 1;
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|((doctor_id, name), total_appointments)| DoctorAppointments {
            doctor_id,
            name: name.to_string(),
            total_appointments,
        })
        .collect())
}

/// Join Appointment to Billing on `Appointment_ID`, then to Doctor on
/// `Doctor_ID`, and sum Amount per Department
pub fn revenue_by_department(tables: &HospitalTables) -> Result<Vec<DepartmentRevenue>> {
    let appointment_ids = extract_int64(&tables.appointments, "Appointment_ID")?;
    let appointment_doctors = extract_int64(&tables.appointments, "Doctor_ID")?;
    let billed_ids = extract_int64(&tables.billing, "Appointment_ID")?;
    let amounts = extract_float64(&tables.billing, "Amount")?;
    let doctor_ids = extract_int64(&tables.doctors, "Doctor_ID")?;
    let departments = extract_string(&tables.doctors, "Department")?;
    let bills = index_by_key(&billed_ids);
    let doctors = index_by_key(&doctor_ids);

    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for (appointment_id, doctor_id) in appointment_ids.iter().zip(&appointment_doctors) {
        for &bill_row in matches(&bills, *appointment_id) {
            for &doctor_row in matches(&doctors, *doctor_id) {
                let Some(department) = departments[doctor_row] else {
                    continue;
                };
                let total = groups.entry(department).or_insert(0.0);
                *total += amounts[bill_row].unwrap_or(0.0);
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|(department, total_revenue)| DepartmentRevenue {
            department: department.to_string(),
            total_revenue,
        })
        .collect())
}

/// Join Visit to Appointment on `Appointment_ID`, then to Doctor on
/// `Doctor_ID`, and count rows per (Name, Diagnosis)
pub fn diagnosis_by_doctor(tables: &HospitalTables) -> Result<Vec<DiagnosisByDoctor>> {
    let visit_appointments = extract_int64(&tables.visits, "Appointment_ID")?;
    let diagnoses = extract_string(&tables.visits, "Diagnosis")?;
    let appointment_ids = extract_int64(&tables.appointments, "Appointment_ID")?;
    let appointment_doctors = extract_int64(&tables.appointments, "Doctor_ID")?;
    let doctor_ids = extract_int64(&tables.doctors, "Doctor_ID")?;
    let doctor_names = extract_string(&tables.doctors, "Name")?;
    let appointments = index_by_key(&appointment_ids);
    let doctors = index_by_key(&doctor_ids);

    let mut groups: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for (appointment_id, diagnosis) in visit_appointments.iter().zip(&diagnoses) {
        let Some(diagnosis) = diagnosis else {
            continue;
        };
        for &appointment_row in matches(&appointments, *appointment_id) {
            for &doctor_row in matches(&doctors, appointment_doctors[appointment_row]) {
                let Some(name) = doctor_names[doctor_row] else {
                    continue;
                };
                *groups.entry((name, diagnosis)).or_insert(0) += 1;
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|((name, diagnosis), diagnosis_count)| DiagnosisByDoctor {
            name: name.to_string(),
            diagnosis: diagnosis.to_string(),
            diagnosis_count,
        })
        .collect())
}
