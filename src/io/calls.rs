//! Reader for the headerless per-sample call stream.

use std::io::BufRead;

use log::debug;
use polars::prelude::*;

use crate::error::{Result, VartabError};
use crate::utils::frame_from_rows;

/// Reads the tab-delimited call stream, applying `columns` positionally.
///
/// The stream carries no header row; the column names come from the
/// roster-expanded call schema. Every line must hold exactly
/// `columns.len()` fields — short or long lines abort the load rather
/// than being padded or truncated, since a mis-assigned column would
/// silently corrupt the table.
///
/// # Errors
///
/// [`VartabError::FieldCountMismatch`] with the 1-based line number on
/// width drift, [`VartabError::EmptyInput`] if the stream holds no lines.
pub fn read_call_table<R: BufRead>(
    input: R,
    columns: &[String],
) -> Result<DataFrame> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let fields: Vec<String> =
            line.split('\t').map(str::to_string).collect();
        if fields.len() != columns.len() {
            return Err(VartabError::FieldCountMismatch {
                line: idx + 1,
                expected: columns.len(),
                actual: fields.len(),
            });
        }
        rows.push(fields);
    }

    if rows.is_empty() {
        return Err(VartabError::EmptyInput);
    }
    debug!("call stream: {} columns, {} rows", columns.len(), rows.len());
    Ok(frame_from_rows(columns, &rows)?)
}
