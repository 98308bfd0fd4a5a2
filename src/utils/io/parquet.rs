//! Parquet file operations
//!
//! Single-file read and write of a scoring table. Discovery of files and
//! merging of per-questionnaire tables are left to the data loader.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a parquet file into a single record batch
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid Parquet
pub fn read_table(path: &Path) -> Result<RecordBatch> {
    let start = Instant::now();
    let target = path.display().to_string();
    log_operation_start("Reading parquet file", &target);

    let file = File::open(path)?;
    let reader_builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = reader_builder.schema().clone();
    let reader = reader_builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let table = concat_batches(&schema, &batches)?;

    log_operation_complete("read", &target, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Write a record batch to a parquet file, replacing any existing file
pub fn write_table(path: &Path, table: &RecordBatch) -> Result<()> {
    let start = Instant::now();
    let target = path.display().to_string();
    log_operation_start("Writing parquet file", &target);

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, table.schema(), None)?;
    writer.write(table)?;
    writer.close()?;

    log_operation_complete("wrote", &target, table.num_rows(), Some(start.elapsed()));
    Ok(())
}
