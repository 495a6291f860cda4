//! Shared behaviour of table rows
//!
//! Every row type of the dataset knows its Arrow schema and how to turn a
//! slice of rows into a record batch, so the generated tables can flow
//! through the same column-oriented pipeline as any other data.

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;

use crate::error::Result;

/// A row type that maps onto a named Arrow table
pub trait TableRecord: Sized {
    /// Sheet name of the table in the workbook
    const TABLE_NAME: &'static str;

    /// Name of the primary-key column
    const KEY_COLUMN: &'static str;

    /// Arrow schema with the column names used in the workbook
    fn schema() -> Schema;

    /// Convert a slice of rows into a record batch
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch>;
}
