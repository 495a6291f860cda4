//! The generated dataset as Arrow tables
//!
//! Every downstream step (KPIs, charts, aggregation, export) reads from these
//! record batches rather than from the typed rows.

use arrow::record_batch::RecordBatch;

use crate::algorithm::generation::HospitalData;
use crate::error::Result;
use crate::models::{Appointment, Bill, Department, Doctor, Patient, TableRecord, Visit};
use crate::utils::logging::log_table_summary;

/// The six base tables
#[derive(Debug, Clone)]
pub struct HospitalTables {
    pub departments: RecordBatch,
    pub doctors: RecordBatch,
    pub patients: RecordBatch,
    pub appointments: RecordBatch,
    pub visits: RecordBatch,
    pub billing: RecordBatch,
}

impl HospitalTables {
    /// Build the tables from generated rows
    pub fn from_data(data: &HospitalData) -> Result<Self> {
        let tables = Self {
            departments: Department::to_record_batch(&data.departments)?,
            doctors: Doctor::to_record_batch(&data.doctors)?,
            patients: Patient::to_record_batch(&data.patients)?,
            appointments: Appointment::to_record_batch(&data.appointments)?,
            visits: Visit::to_record_batch(&data.visits)?,
            billing: Bill::to_record_batch(&data.bills)?,
        };
        for (name, batch) in tables.sheets() {
            log_table_summary(name, batch);
        }
        Ok(tables)
    }

    /// Tables with their sheet names, in workbook order
    #[must_use]
    pub fn sheets(&self) -> [(&'static str, &RecordBatch); 6] {
        [
            (Patient::TABLE_NAME, &self.patients),
            (Doctor::TABLE_NAME, &self.doctors),
            (Department::TABLE_NAME, &self.departments),
            (Appointment::TABLE_NAME, &self.appointments),
            (Visit::TABLE_NAME, &self.visits),
            (Bill::TABLE_NAME, &self.billing),
        ]
    }
}
