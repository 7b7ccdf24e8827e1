//! Reader for the VEP annotation stream.
//!
//! The stream mixes three line kinds, distinguished by leading characters:
//! `##` metadata, a single `#` header, and plain tab-separated data. The
//! metadata forms the data dictionary and is written through to a side
//! sink while the header and data lines become the effect table.

use std::io::{BufRead, Write};

use log::debug;
use polars::prelude::*;

use crate::error::{Result, VartabError};
use crate::utils::frame_from_rows;

/// Reads a VEP annotation stream into an all-string frame, writing the
/// metadata block to `datadict` on the way.
///
/// Metadata lines have their hash markers stripped and are appended to
/// `datadict` verbatim, line terminators included. The header line is
/// split on tab to name the columns; if several header lines appear, the
/// last one wins. Line terminators stay attached to the final field of
/// header and data lines — downstream output reproduces the upstream
/// pipeline byte for byte, and the writer quotes them where needed.
///
/// # Errors
///
/// [`VartabError::DataBeforeHeader`] if a data line precedes every header
/// line, [`VartabError::FieldCountMismatch`] if a data line's width
/// differs from the header's, and [`VartabError::EmptyInput`] if the
/// stream ends without a header.
pub fn read_vep_table<R: BufRead, W: Write>(
    mut input: R,
    mut datadict: W,
) -> Result<DataFrame> {
    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut buffer = String::new();
    let mut line_no = 0usize;

    loop {
        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }
        line_no += 1;

        if buffer.starts_with("##") {
            datadict.write_all(buffer.trim_start_matches('#').as_bytes())?;
        }
        else if buffer.starts_with('#') {
            header = Some(split_fields(buffer.trim_start_matches('#')));
        }
        else {
            let columns = header
                .as_ref()
                .ok_or_else(|| VartabError::DataBeforeHeader { line: line_no })?;
            let fields = split_fields(&buffer);
            if fields.len() != columns.len() {
                return Err(VartabError::FieldCountMismatch {
                    line: line_no,
                    expected: columns.len(),
                    actual: fields.len(),
                });
            }
            rows.push(fields);
        }
    }

    let columns = header.ok_or(VartabError::EmptyInput)?;
    debug!(
        "annotation stream: {} columns, {} data rows",
        columns.len(),
        rows.len()
    );
    Ok(frame_from_rows(&columns, &rows)?)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split('\t').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn separates_metadata_header_and_data() {
        let input = "##key=value\n#COL1\tCOL2\na\tb\n";
        let mut datadict = Vec::new();
        let df = read_vep_table(Cursor::new(input), &mut datadict).unwrap();

        assert_eq!(datadict, b"key=value\n");
        // Terminators stay attached to the final field, as in the
        // upstream pipeline.
        let names: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, ["COL1", "COL2\n"]);
        assert_eq!(df.column("COL1").unwrap().as_materialized_series().str().unwrap().get(0), Some("a"));
        assert_eq!(
            df.column("COL2\n").unwrap().as_materialized_series().str().unwrap().get(0),
            Some("b\n")
        );
    }

    #[test]
    fn last_header_wins() {
        let input = "#OLD1\tOLD2\n#NEW1\tNEW2\nx\ty\n";
        let df = read_vep_table(Cursor::new(input), Vec::new()).unwrap();
        let names: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, ["NEW1", "NEW2\n"]);
    }

    #[test]
    fn data_before_header_is_rejected() {
        let input = "a\tb\n#COL1\tCOL2\n";
        let result = read_vep_table(Cursor::new(input), Vec::new());
        assert!(matches!(
            result,
            Err(VartabError::DataBeforeHeader { line: 1 })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = read_vep_table(Cursor::new(""), Vec::new());
        assert!(matches!(result, Err(VartabError::EmptyInput)));
    }

    #[test]
    fn metadata_only_input_is_rejected() {
        let result = read_vep_table(Cursor::new("##only=metadata\n"), Vec::new());
        assert!(matches!(result, Err(VartabError::EmptyInput)));
    }

    #[test]
    fn header_without_data_yields_empty_frame() {
        let df = read_vep_table(Cursor::new("#A\tB\n"), Vec::new()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn uneven_data_rows_are_rejected() {
        let input = "#A\tB\nx\ty\tz\n";
        let result = read_vep_table(Cursor::new(input), Vec::new());
        assert!(matches!(
            result,
            Err(VartabError::FieldCountMismatch {
                line: 2,
                expected: 2,
                actual: 3,
            })
        ));
    }
}
