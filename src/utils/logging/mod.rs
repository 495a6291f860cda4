//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use console::log_table_summary;
pub use log::{log_operation_complete, log_operation_start};
pub use progress::{create_main_progress_bar, finish_progress_bar};
