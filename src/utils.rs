//! Helpers shared between the stream readers.

use polars::prelude::*;

#[macro_export]
macro_rules! plsmallstr {
    ($string: expr) => {
        PlSmallStr::from($string)
    };
}

/// Builds an all-string frame from row-major parsed fields.
///
/// Callers must have checked that every row carries exactly `names.len()`
/// fields; uneven widths are a logic error at this point.
pub(crate) fn frame_from_rows(
    names: &[String],
    rows: &[Vec<String>],
) -> PolarsResult<DataFrame> {
    debug_assert!(rows.iter().all(|row| row.len() == names.len()));
    let columns = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values = rows.iter().map(|row| row[idx].as_str()).collect::<Vec<_>>();
            Column::new(plsmallstr!(name.as_str()), values)
        })
        .collect::<Vec<_>>();
    DataFrame::new(columns)
}
