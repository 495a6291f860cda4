//! Billing entity model

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::categories::{InsuranceUsed, PaymentStatus};
use crate::models::traits::TableRecord;

/// A bill raised for an appointment
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub bill_id: u32,
    pub appointment_id: u32,
    /// Amount rounded to cents
    pub amount: f64,
    pub payment_status: PaymentStatus,
    pub insurance_used: InsuranceUsed,
}

impl TableRecord for Bill {
    const TABLE_NAME: &'static str = "Billing";
    const KEY_COLUMN: &'static str = "Bill_ID";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Bill_ID", DataType::Int64, false),
            Field::new("Appointment_ID", DataType::Int64, false),
            Field::new("Amount", DataType::Float64, false),
            Field::new("Payment_Status", DataType::Utf8, false),
            Field::new("Insurance_Used", DataType::Utf8, false),
        ])
    }

    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.bill_id)),
            )),
            Arc::new(Int64Array::from_iter_values(
                rows.iter().map(|r| i64::from(r.appointment_id)),
            )),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.amount))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.payment_status.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.insurance_used.as_str()),
            )),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::arrow::{extract_int64, float64_values, string_values};

    #[test]
    fn test_bill_batch_columns() {
        let rows = vec![
            Bill {
                bill_id: 1,
                appointment_id: 7,
                amount: 1234.56,
                payment_status: PaymentStatus::Paid,
                insurance_used: InsuranceUsed::Yes,
            },
            Bill {
                bill_id: 2,
                appointment_id: 3,
                amount: 500.0,
                payment_status: PaymentStatus::Pending,
                insurance_used: InsuranceUsed::No,
            },
        ];
        let batch = Bill::to_record_batch(&rows).unwrap();

        assert_eq!(batch.num_rows(), 2);
        let names: Vec<String> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();
        assert_eq!(
            names,
            ["Bill_ID", "Appointment_ID", "Amount", "Payment_Status", "Insurance_Used"]
        );
        assert_eq!(
            extract_int64(&batch, "Appointment_ID").unwrap(),
            vec![Some(7), Some(3)]
        );
        assert_eq!(float64_values(&batch, "Amount").unwrap(), vec![1234.56, 500.0]);
        assert_eq!(
            string_values(&batch, "Payment_Status").unwrap(),
            vec!["Paid", "Pending"]
        );
    }
}
