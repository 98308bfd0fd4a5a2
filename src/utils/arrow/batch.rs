//! Column-level edits on record batches.
//!
//! Record batches are immutable, so every edit builds a new batch that shares
//! the untouched column buffers with the old one.

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{Field, FieldRef, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use rustc_hash::FxHashSet;

use crate::error::Result;

/// Whether the batch has a column with this name
#[must_use]
pub fn has_column(batch: &RecordBatch, name: &str) -> bool {
    batch.schema().index_of(name).is_ok()
}

/// Column names in schema order
#[must_use]
pub fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect()
}

fn rebuild(
    batch: &RecordBatch,
    fields: Vec<FieldRef>,
    columns: Vec<ArrayRef>,
) -> Result<RecordBatch> {
    let schema = Schema::new_with_metadata(fields, batch.schema().metadata().clone());
    let options = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(schema),
        columns,
        &options,
    )?)
}

/// Add columns to a batch, replacing any existing column of the same name in place
pub fn with_columns(batch: RecordBatch, new_columns: Vec<(String, ArrayRef)>) -> Result<RecordBatch> {
    if new_columns.is_empty() {
        return Ok(batch);
    }

    let mut fields: Vec<FieldRef> = batch.schema().fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();

    for (name, array) in new_columns {
        let field = Arc::new(Field::new(&name, array.data_type().clone(), true));
        if let Some(idx) = fields.iter().position(|f| f.name() == &name) {
            fields[idx] = field;
            columns[idx] = array;
        } else {
            fields.push(field);
            columns.push(array);
        }
    }

    rebuild(&batch, fields, columns)
}

/// Remove the named columns; names not present are ignored
pub fn drop_columns(batch: RecordBatch, names: &[String]) -> Result<RecordBatch> {
    let to_drop: FxHashSet<&str> = names.iter().map(String::as_str).collect();
    let keep: Vec<usize> = batch
        .schema()
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| !to_drop.contains(field.name().as_str()))
        .map(|(idx, _)| idx)
        .collect();

    if keep.len() == batch.num_columns() {
        return Ok(batch);
    }

    let schema = batch.schema();
    let fields = keep.iter().map(|&idx| schema.fields()[idx].clone()).collect();
    let columns = keep.iter().map(|&idx| batch.column(idx).clone()).collect();
    rebuild(&batch, fields, columns)
}

/// Rename columns; `rename` returns the new name or `None` to keep the old one
pub fn rename_columns<F>(batch: RecordBatch, rename: F) -> Result<RecordBatch>
where
    F: Fn(&str) -> Option<String>,
{
    let mut changed = false;
    let fields: Vec<FieldRef> = batch
        .schema()
        .fields()
        .iter()
        .map(|field| match rename(field.name()) {
            Some(new_name) => {
                changed = true;
                Arc::new(field.as_ref().clone().with_name(new_name))
            }
            None => field.clone(),
        })
        .collect();

    if !changed {
        return Ok(batch);
    }
    let columns = batch.columns().to_vec();
    rebuild(&batch, fields, columns)
}
