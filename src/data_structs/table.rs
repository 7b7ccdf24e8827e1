//! The merged per-variant annotation table.

use hashbrown::HashSet;
use log::debug;
use polars::prelude::*;

use crate::data_structs::schema::{SampleField, SampleRoster};
use crate::error::{Result, VartabError};
use crate::plsmallstr;

/// A wide annotation table: one row per variant, effect columns followed by
/// call-statistics columns.
///
/// The two source frames are concatenated by row index, not by key — both
/// input streams must enumerate the same variants in the same order, which
/// upstream tools guarantee. The checks in [`AnnotationTable::try_join`]
/// are the last line of defense against silent misalignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationTable {
    data: DataFrame,
}

impl AnnotationTable {
    /// Concatenates the effect and call frames column-wise by row index.
    ///
    /// # Errors
    ///
    /// [`VartabError::RowMisalignment`] if the frames disagree on height,
    /// [`VartabError::ColumnCollision`] if they share a column name.
    pub fn try_join(
        effects: DataFrame,
        calls: DataFrame,
    ) -> Result<Self> {
        if effects.height() != calls.height() {
            return Err(VartabError::RowMisalignment {
                left: effects.height(),
                right: calls.height(),
            });
        }

        let effect_names: HashSet<&str> = effects
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        for column in calls.get_columns() {
            if effect_names.contains(column.name().as_str()) {
                return Err(VartabError::ColumnCollision {
                    name: column.name().to_string(),
                });
            }
        }

        let data = effects.hstack(calls.get_columns())?;
        debug!("joined table: {}x{}", data.height(), data.width());
        Ok(AnnotationTable { data })
    }

    /// Splits every sample's `"{sample}.AD"` column into `REF`, `ALT` and
    /// `DETECTED`.
    ///
    /// The depth field is two comma-separated non-negative integers
    /// (reference count, alternate count). Only the alternate count is
    /// parsed — it drives the detection flag — while both halves are
    /// carried forward as strings. The rebuilt frame keeps all non-depth
    /// columns in their original order, then appends `REF`, `ALT`,
    /// `DETECTED` per sample in roster order; this layout is an output
    /// compatibility contract.
    ///
    /// # Errors
    ///
    /// [`VartabError::MalformedDepthField`] on any value that is not
    /// exactly two comma-separated parts with an unsigned-integer second
    /// part. A missing depth column (e.g. the table was already split)
    /// surfaces as a polars column-not-found error.
    pub fn split_allele_depths(
        self,
        roster: &SampleRoster,
    ) -> Result<Self> {
        let height = self.data.height();
        let mut consumed: HashSet<String> = HashSet::with_capacity(roster.len());
        let mut staged: Vec<Column> =
            Vec::with_capacity(roster.len() * SampleField::DERIVED.len());

        for sample in roster.samples() {
            let depth_col = SampleField::Ad.column_for(sample);
            let depths = self
                .data
                .column(&depth_col)?
                .as_materialized_series()
                .str()?;

            let mut refs: Vec<String> = Vec::with_capacity(height);
            let mut alts: Vec<String> = Vec::with_capacity(height);
            let mut detected: Vec<bool> = Vec::with_capacity(height);

            for (row, value) in depths.into_iter().enumerate() {
                let value = value.unwrap_or("");
                let (ref_count, alt_count) =
                    split_depth_field(&depth_col, row, value)?;
                let alt: u64 = alt_count.parse().map_err(|_| {
                    VartabError::MalformedDepthField {
                        column: depth_col.clone(),
                        row,
                        value: value.to_string(),
                    }
                })?;
                refs.push(ref_count.to_string());
                alts.push(alt_count.to_string());
                detected.push(alt > 0);
            }

            staged.push(Column::new(
                plsmallstr!(SampleField::Ref.column_for(sample)),
                refs,
            ));
            staged.push(Column::new(
                plsmallstr!(SampleField::Alt.column_for(sample)),
                alts,
            ));
            staged.push(Column::new(
                plsmallstr!(SampleField::Detected.column_for(sample)),
                detected,
            ));
            consumed.insert(depth_col);
        }

        // Single-pass reassembly instead of delete-then-append mutation:
        // the ordering contract lives in one place.
        let mut columns: Vec<Column> = self
            .data
            .get_columns()
            .iter()
            .filter(|column| !consumed.contains(column.name().as_str()))
            .cloned()
            .collect();
        columns.extend(staged);

        debug!(
            "split {} depth columns into {} derived columns",
            consumed.len(),
            consumed.len() * SampleField::DERIVED.len()
        );
        Ok(AnnotationTable {
            data: DataFrame::new(columns)?,
        })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }
}

/// Exactly two comma-separated parts, or the field is malformed.
fn split_depth_field<'a>(
    column: &str,
    row: usize,
    value: &'a str,
) -> Result<(&'a str, &'a str)> {
    match value.split_once(',') {
        Some((ref_count, alt_count)) if !alt_count.contains(',') => {
            Ok((ref_count, alt_count))
        },
        _ => Err(VartabError::MalformedDepthField {
            column: column.to_string(),
            row,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(samples: &[&str]) -> SampleRoster {
        SampleRoster::new(samples.iter().map(|s| s.to_string()).collect())
            .unwrap()
    }

    fn single_sample_table() -> AnnotationTable {
        let effects = df!(
            "Uploaded_variation" => ["var1"],
            "Consequence" => ["missense_variant"],
        )
        .unwrap();
        let calls = df!(
            "FILTER" => ["PASS"],
            "TLOD" => ["5.0"],
            "NLOD" => ["3.0"],
            "NALOD" => ["2.0"],
            "S1.DP" => ["30"],
            "S1.AD" => ["20,10"],
        )
        .unwrap();
        AnnotationTable::try_join(effects, calls).unwrap()
    }

    #[test]
    fn join_requires_equal_heights() {
        let left = df!("a" => ["1", "2"]).unwrap();
        let right = df!("b" => ["1"]).unwrap();
        assert!(matches!(
            AnnotationTable::try_join(left, right),
            Err(VartabError::RowMisalignment { left: 2, right: 1 })
        ));
    }

    #[test]
    fn join_rejects_shared_column_names() {
        let left = df!("a" => ["1"], "b" => ["2"]).unwrap();
        let right = df!("b" => ["3"]).unwrap();
        assert!(matches!(
            AnnotationTable::try_join(left, right),
            Err(VartabError::ColumnCollision { name }) if name == "b"
        ));
    }

    #[test]
    fn join_concatenates_column_wise() {
        let table = single_sample_table();
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 8);
        assert_eq!(
            table.data().column("S1.AD").unwrap().as_materialized_series().str().unwrap().get(0),
            Some("20,10")
        );
    }

    #[test]
    fn depth_split_matches_expected_layout() {
        let table = single_sample_table()
            .split_allele_depths(&roster(&["S1"]))
            .unwrap();

        let names: Vec<&str> = table
            .data()
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Uploaded_variation",
                "Consequence",
                "FILTER",
                "TLOD",
                "NLOD",
                "NALOD",
                "S1.DP",
                "S1.REF",
                "S1.ALT",
                "S1.DETECTED",
            ]
        );

        let data = table.data();
        assert_eq!(data.column("S1.REF").unwrap().as_materialized_series().str().unwrap().get(0), Some("20"));
        assert_eq!(data.column("S1.ALT").unwrap().as_materialized_series().str().unwrap().get(0), Some("10"));
        assert_eq!(
            data.column("S1.DETECTED").unwrap().as_materialized_series().bool().unwrap().get(0),
            Some(true)
        );
    }

    #[test]
    fn zero_alternate_depth_is_not_detected() {
        let effects = df!("Location" => ["1:100", "2:200"]).unwrap();
        let calls = df!(
            "S1.AD" => ["20,0", "0,7"],
        )
        .unwrap();
        let table = AnnotationTable::try_join(effects, calls)
            .unwrap()
            .split_allele_depths(&roster(&["S1"]))
            .unwrap();
        let detected = table.data().column("S1.DETECTED").unwrap();
        assert_eq!(detected.bool().unwrap().get(0), Some(false));
        assert_eq!(detected.bool().unwrap().get(1), Some(true));
    }

    #[test]
    fn derived_columns_group_by_sample_not_by_kind() {
        let effects = df!("Location" => ["1:100"]).unwrap();
        let calls = df!(
            "S1.AD" => ["1,2"],
            "S2.AD" => ["3,4"],
        )
        .unwrap();
        let table = AnnotationTable::try_join(effects, calls)
            .unwrap()
            .split_allele_depths(&roster(&["S1", "S2"]))
            .unwrap();
        let names: Vec<&str> = table
            .data()
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Location", "S1.REF", "S1.ALT", "S1.DETECTED", "S2.REF",
                "S2.ALT", "S2.DETECTED",
            ]
        );
    }

    #[test]
    fn malformed_depth_fields_are_rejected() {
        for bad in ["20", "1,2,3", "x,y", "20, 10", ""] {
            let effects = df!("Location" => ["1:100"]).unwrap();
            let calls = df!("S1.AD" => [bad]).unwrap();
            let result = AnnotationTable::try_join(effects, calls)
                .unwrap()
                .split_allele_depths(&roster(&["S1"]));
            assert!(
                matches!(
                    result,
                    Err(VartabError::MalformedDepthField { column, row: 0, .. })
                        if column == "S1.AD"
                ),
                "value {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn second_split_fails_on_missing_depth_column() {
        let roster = roster(&["S1"]);
        let table = single_sample_table()
            .split_allele_depths(&roster)
            .unwrap();
        let result = table.split_allele_depths(&roster);
        assert!(matches!(result, Err(VartabError::Polars(_))));
    }
}
