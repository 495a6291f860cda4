//! Column extraction utilities for Arrow record batches
//!
//! These helpers pull a whole typed column out of a record batch, keeping
//! nulls as `None` so callers can apply inner-join semantics.

use arrow::array::{
    Array, Date32Array, Float64Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::{DashboardError, Result};
use crate::utils::arrow::array_utils::{downcast_array, get_column};
use crate::utils::arrow::conversion::arrow_date_to_naive_date;

/// Extract an `Int64` column
pub fn extract_int64(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<i64>>> {
    let column = get_column(batch, column_name)?;
    let array = downcast_array::<Int64Array>(column, column_name, "Int64")?;
    Ok(array.iter().collect())
}

/// Extract a `Float64` column
pub fn extract_float64(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<f64>>> {
    let column = get_column(batch, column_name)?;
    let array = downcast_array::<Float64Array>(column, column_name, "Float64")?;
    Ok(array.iter().collect())
}

/// Extract a string column, accepting both `Utf8` and `LargeUtf8`
pub fn extract_string<'a>(
    batch: &'a RecordBatch,
    column_name: &str,
) -> Result<Vec<Option<&'a str>>> {
    let column = get_column(batch, column_name)?;
    match column.data_type() {
        DataType::Utf8 => {
            let array = downcast_array::<StringArray>(column, column_name, "Utf8")?;
            Ok(array.iter().collect())
        }
        DataType::LargeUtf8 => {
            let array = downcast_array::<LargeStringArray>(column, column_name, "LargeUtf8")?;
            Ok(array.iter().collect())
        }
        _ => Err(DashboardError::ColumnType {
            column: column_name.to_string(),
            expected: "Utf8".to_string(),
        }),
    }
}

/// Extract a `Date32` column as calendar dates
pub fn extract_date32(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let column = get_column(batch, column_name)?;
    let array = downcast_array::<Date32Array>(column, column_name, "Date32")?;
    Ok((0..array.len())
        .map(|row| {
            if array.is_null(row) {
                None
            } else {
                Some(arrow_date_to_naive_date(array.value(row)))
            }
        })
        .collect())
}

/// Non-null values of a string column, in row order
pub fn string_values<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<Vec<&'a str>> {
    Ok(extract_string(batch, column_name)?
        .into_iter()
        .flatten()
        .collect())
}

/// Non-null values of a `Float64` column, in row order
pub fn float64_values(batch: &RecordBatch, column_name: &str) -> Result<Vec<f64>> {
    Ok(extract_float64(batch, column_name)?
        .into_iter()
        .flatten()
        .collect())
}
