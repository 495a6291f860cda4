//! Visit entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::categories::{Diagnosis, Prescription};
use crate::models::traits::TableRecord;

/// Clinical record of an attended appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub visit_id: u32,
    pub appointment_id: u32,
    pub diagnosis: Diagnosis,
    pub prescription: Prescription,
    pub notes: String,
}

impl TableRecord for Visit {
    const TABLE_NAME: &'static str = "Visits";
    const KEY_COLUMN: &'static str = "Visit_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Visit_ID", DataType::Int64, false),
            Field::new("Appointment_ID", DataType::Int64, false),
            Field::new("Diagnosis", DataType::Utf8, false),
            Field::new("Prescription", DataType::Utf8, false),
            Field::new("Notes", DataType::Utf8, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.visit_id)),
            )),
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.appointment_id)),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.diagnosis.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.prescription.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.notes.as_str()))),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
