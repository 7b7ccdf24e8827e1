//! Tab-separated serialization of the final table.

use std::io::Write;

use log::debug;
use polars::prelude::*;

use crate::error::Result;

/// Writes the final table as tab-separated text: header row first, `\n`
/// line endings, no row-index column, quoting only where a field needs it.
///
/// Boolean columns are rendered as literal `True`/`False` — the
/// capitalization is an output compatibility surface shared with the
/// upstream pipeline, not a display choice.
pub struct TableWriter<W: Write> {
    sink: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(sink: W) -> Self {
        TableWriter { sink }
    }

    /// Serializes `df` into the sink, consuming the writer.
    pub fn write(
        self,
        df: DataFrame,
    ) -> Result<()> {
        let mut rendered = render_booleans(df)?;
        debug!(
            "writing table: {}x{}",
            rendered.height(),
            rendered.width()
        );
        CsvWriter::new(self.sink)
            .include_header(true)
            .with_separator(b'\t')
            .finish(&mut rendered)?;
        Ok(())
    }
}

/// Rewrites every boolean column to its `True`/`False` string form.
fn render_booleans(df: DataFrame) -> PolarsResult<DataFrame> {
    let bool_cols: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::Boolean)
        .map(|column| column.name().clone())
        .collect();
    if bool_cols.is_empty() {
        return Ok(df);
    }
    df.lazy()
        .with_columns(
            bool_cols
                .into_iter()
                .map(|name| {
                    when(col(name.clone()))
                        .then(lit("True"))
                        .otherwise(lit("False"))
                        .alias(name)
                })
                .collect::<Vec<_>>(),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_render_capitalized() {
        let df = df!(
            "FILTER" => ["PASS", "PASS"],
            "S1.DETECTED" => [true, false],
        )
        .unwrap();
        let mut out = Vec::new();
        TableWriter::new(&mut out).write(df).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "FILTER\tS1.DETECTED\nPASS\tTrue\nPASS\tFalse\n"
        );
    }

    #[test]
    fn header_comes_first_with_tab_separation() {
        let df = df!(
            "A" => ["1"],
            "B" => ["2"],
        )
        .unwrap();
        let mut out = Vec::new();
        TableWriter::new(&mut out).write(df).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\tB\n1\t2\n");
    }

    #[test]
    fn string_columns_pass_through_untouched() {
        let df = df!("X" => ["True", "false"]).unwrap();
        let mut out = Vec::new();
        TableWriter::new(&mut out).write(df).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "X\nTrue\nfalse\n");
    }
}
