//! Arrow data handling utilities
//!
//! This module contains utilities for working with Arrow arrays and record
//! batches: typed column extraction and column-level batch edits.

pub mod array_utils;
pub mod batch;

// Re-export commonly used functions for convenience
pub use array_utils::{column_to_f64, column_to_strings, get_column_by_name};
pub use batch::{column_names, drop_columns, has_column, rename_columns, with_columns};
