//! Utilities for working with Arrow arrays.
//!
//! This module provides helpers for locating columns in record batches and
//! downcasting them to concrete array types with descriptive errors.

use arrow::array::{Array, ArrayRef};
use arrow::record_batch::RecordBatch;

use crate::error::{DashboardError, Result};

/// Get the column index by name from a record batch
///
/// # Errors
/// Returns `ColumnNotFound` if the column does not exist
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| DashboardError::ColumnNotFound {
            column: column_name.to_string(),
        })
}

/// Get a column from a record batch by name
pub fn get_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a ArrayRef> {
    let idx = get_column_index(batch, column_name)?;
    Ok(batch.column(idx))
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
///
/// # Arguments
///
/// * `array` - The array reference to downcast
/// * `column_name` - The name of the column (for error messages)
/// * `expected_type_name` - A human-readable name of the expected type (for error messages)
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| DashboardError::ColumnType {
            column: column_name.to_string(),
            expected: expected_type_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn sample_batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("Doctor_ID", DataType::Int64, false),
            Field::new("Name", DataType::Utf8, false),
        ]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(StringArray::from(vec!["A", "B"])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_missing_column() {
        let batch = sample_batch();
        let err = get_column(&batch, "Department").unwrap_err();
        assert!(matches!(err, DashboardError::ColumnNotFound { column } if column == "Department"));
    }

    #[test]
    fn test_wrong_type() {
        let batch = sample_batch();
        let column = get_column(&batch, "Name").unwrap();
        let err = downcast_array::<Int64Array>(column, "Name", "Int64").unwrap_err();
        assert!(matches!(err, DashboardError::ColumnType { .. }));
    }
}
