//! Patient entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::categories::Gender;
use crate::models::traits::TableRecord;
use crate::utils::arrow::naive_date_to_arrow_date;

/// A registered patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: u32,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Phone number
    pub contact: String,
    pub date_registered: NaiveDate,
}

impl TableRecord for Patient {
    const TABLE_NAME: &'static str = "Patients";
    const KEY_COLUMN: &'static str = "Patient_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Patient_ID", DataType::Int64, false),
            Field::new("Name", DataType::Utf8, false),
            Field::new("Age", DataType::Int64, false),
            Field::new("Gender", DataType::Utf8, false),
            Field::new("Contact", DataType::Utf8, false),
            Field::new("Date_Registered", DataType::Date32, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.patient_id)),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| i64::from(r.age)))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.gender.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.contact.as_str()),
            )),
            Arc::new(Date32Array::from_iter_values(
                rows.iter().map(|r| naive_date_to_arrow_date(r.date_registered)),
            )),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
