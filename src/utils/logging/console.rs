//! Console output utilities
//!
//! Debug-level descriptions of generated tables.

use arrow::record_batch::RecordBatch;

/// Log the shape and schema of a table at debug level
pub fn log_table_summary(name: &str, batch: &RecordBatch) {
    log::debug!(
        "{name}: {} rows x {} columns",
        batch.num_rows(),
        batch.num_columns()
    );
    for field in batch.schema().fields() {
        log::debug!("  - {} ({})", field.name(), field.data_type());
    }
}
