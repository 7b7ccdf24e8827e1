//! The sample roster and the per-sample column schema derived from it.

use std::io::BufRead;

use itertools::Itertools;
use log::debug;

use crate::error::{Result, VartabError};

/// Fixed per-variant columns of the call stream, preceding the per-sample
/// block.
pub const CALL_FIXED_COLUMNS: [&str; 4] = ["FILTER", "TLOD", "NLOD", "NALOD"];

/// Per-sample column kinds.
///
/// Each sample contributes a block of columns named `"{sample}.{field}"`.
/// The input fields come straight from the call stream; the derived fields
/// are produced by [`AnnotationTable::split_allele_depths`], which consumes
/// the `AD` column in the process.
///
/// [`AnnotationTable::split_allele_depths`]:
/// crate::data_structs::AnnotationTable::split_allele_depths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleField {
    /// Total read depth at the site
    Dp,
    /// Combined `"ref,alt"` allele-depth string
    Ad,
    /// Reference-supporting read count (derived)
    Ref,
    /// Alternate-supporting read count (derived)
    Alt,
    /// Whether any alternate-supporting read was observed (derived)
    Detected,
}

impl SampleField {
    /// Fields present in the raw call stream, in column order.
    pub const INPUT: [SampleField; 2] = [SampleField::Dp, SampleField::Ad];
    /// Fields appended by depth splitting, in column order.
    pub const DERIVED: [SampleField; 3] =
        [SampleField::Ref, SampleField::Alt, SampleField::Detected];

    pub const fn suffix(&self) -> &'static str {
        match self {
            SampleField::Dp => "DP",
            SampleField::Ad => "AD",
            SampleField::Ref => "REF",
            SampleField::Alt => "ALT",
            SampleField::Detected => "DETECTED",
        }
    }

    /// Formats this field's column name for `sample`.
    ///
    /// Every component that touches per-sample columns goes through here,
    /// so the `"{sample}.{field}"` format exists in exactly one place.
    pub fn column_for(
        &self,
        sample: &str,
    ) -> String {
        format!("{}.{}", sample, self.suffix())
    }
}

/// Ordered list of sample identifiers.
///
/// Roster order defines the per-sample column block order in every derived
/// table. Duplicate identifiers are rejected at construction — duplicate
/// columns would break the positional join downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRoster {
    samples: Vec<String>,
}

impl SampleRoster {
    pub fn new(samples: Vec<String>) -> Result<Self> {
        if let Some(duplicate) = samples.iter().duplicates().next() {
            return Err(VartabError::DuplicateSample {
                name: duplicate.clone(),
            });
        }
        Ok(SampleRoster { samples })
    }

    /// Reads a roster from a sample-names file, one identifier per line.
    ///
    /// Trailing whitespace is stripped; blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut samples = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim_end();
            if name.is_empty() {
                continue;
            }
            samples.push(name.to_string());
        }
        debug!("read {} sample identifiers", samples.len());
        Self::new(samples)
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Expanded per-sample column names: each sample crossed with
    /// [`SampleField::INPUT`], samples in roster order.
    pub fn expanded_columns(&self) -> Vec<String> {
        self.samples
            .iter()
            .cartesian_product(SampleField::INPUT.iter())
            .map(|(sample, field)| field.column_for(sample))
            .collect()
    }

    /// The full positional column schema of the call stream: the fixed
    /// columns followed by the expanded per-sample block.
    pub fn call_schema(&self) -> Vec<String> {
        CALL_FIXED_COLUMNS
            .iter()
            .map(|name| name.to_string())
            .chain(self.expanded_columns())
            .collect()
    }
}
