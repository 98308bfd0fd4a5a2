//! Shared helpers: Arrow batch manipulation, Parquet I/O and logging.

pub mod arrow;
pub mod io;
pub mod logging;

#[cfg(test)]
pub mod test_utils;
