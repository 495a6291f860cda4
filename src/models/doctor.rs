//! Doctor entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::categories::DepartmentName;
use crate::models::traits::TableRecord;

/// A doctor on the hospital staff
///
/// `department` is drawn independently of the department table, so nothing
/// ties it to an existing `Department` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub doctor_id: u32,
    pub name: String,
    pub department: DepartmentName,
    pub specialty: String,
    pub years_experience: u32,
}

impl TableRecord for Doctor {
    const TABLE_NAME: &'static str = "Doctors";
    const KEY_COLUMN: &'static str = "Doctor_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Doctor_ID", DataType::Int64, false),
            Field::new("Name", DataType::Utf8, false),
            Field::new("Department", DataType::Utf8, false),
            Field::new("Specialty", DataType::Utf8, false),
            Field::new("Years_Experience", DataType::Int64, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.doctor_id)),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.department.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.specialty.as_str()),
            )),
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.years_experience)),
            )),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
