//! Appointment entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{NaiveDate, NaiveTime};

use crate::error::Result;
use crate::models::categories::{AppointmentMode, AppointmentStatus};
use crate::models::traits::TableRecord;
use crate::utils::arrow::naive_date_to_arrow_date;

/// Format of the `Time` column
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A booked appointment between a patient and a doctor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub appointment_id: u32,
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub mode: AppointmentMode,
}

impl TableRecord for Appointment {
    const TABLE_NAME: &'static str = "Appointments";
    const KEY_COLUMN: &'static str = "Appointment_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Appointment_ID", DataType::Int64, false),
            Field::new("Patient_ID", DataType::Int64, false),
            Field::new("Doctor_ID", DataType::Int64, false),
            Field::new("Date", DataType::Date32, false),
            Field::new("Time", DataType::Utf8, false),
            Field::new("Status", DataType::Utf8, false),
            Field::new("Mode", DataType::Utf8, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.appointment_id)),
            )),
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.patient_id)),
            )),
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.doctor_id)),
            )),
            Arc::new(Date32Array::from_iter_values(
                rows.iter().map(|r| naive_date_to_arrow_date(r.date)),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.time.format(TIME_FORMAT).to_string()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.status.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.mode.as_str()))),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
