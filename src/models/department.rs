//! Department entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::categories::DepartmentName;
use crate::models::traits::TableRecord;

/// A hospital department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub department_id: u32,
    pub name: DepartmentName,
}

impl TableRecord for Department {
    const TABLE_NAME: &'static str = "Departments";
    const KEY_COLUMN: &'static str = "Department_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Department_ID", DataType::Int64, false),
            Field::new("Department_Name", DataType::Utf8, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.department_id)),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.name.as_str()),
            )),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
