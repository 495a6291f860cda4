//! Arrow data handling utilities
//!
//! This module contains utilities for working with Arrow arrays and record
//! batches: column lookup, typed extraction and date conversion.

pub mod array_utils;
pub mod conversion;
pub mod extractors;

// Re-export commonly used functions for convenience
pub use array_utils::{downcast_array, get_column, get_column_index};
pub use conversion::{arrow_date_to_naive_date, naive_date_to_arrow_date};
pub use extractors::{
    extract_date32, extract_float64, extract_int64, extract_string, float64_values,
    string_values,
};
