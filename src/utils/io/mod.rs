//! IO utilities for file operations

pub mod parquet;

// Re-export commonly used functions for convenience
pub use parquet::{read_table, write_table};
