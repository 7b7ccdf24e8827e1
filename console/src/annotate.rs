use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;
use vartab::prelude::*;

use crate::utils::{report_written, validate_output};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    #[arg(
        long = "tab",
        required = true,
        help = "Path to the VEP annotation stream (tab-delimited; \
                metadata, header and data lines)."
    )]
    tab: PathBuf,

    #[arg(
        long = "vcf-info",
        required = true,
        help = "Path to the per-sample call statistics extracted from the \
                multisample VCF (tab-delimited, no header)."
    )]
    vcf_info: PathBuf,

    #[arg(
        long = "sample-names",
        required = true,
        help = "Path to the sample-names file, one identifier per line."
    )]
    sample_names: PathBuf,

    #[arg(
        long = "output-filename-prefix",
        required = true,
        help = "Prefix for the generated -datadict.txt and \
                -annotation-table.txt files."
    )]
    output_prefix: String,
}

impl PipelineCommand for AnnotateArgs {
    fn run(&self) -> anyhow::Result<()> {
        let datadict_path = format!("{}-datadict.txt", self.output_prefix);
        let table_path =
            format!("{}-annotation-table.txt", self.output_prefix);
        validate_output(&datadict_path)?;
        validate_output(&table_path)?;

        let roster = SampleRoster::from_reader(BufReader::new(
            File::open(&self.sample_names).with_context(|| {
                format!("failed to open {}", self.sample_names.display())
            })?,
        ))?;
        info!("roster of {} samples", roster.len());

        let datadict = File::create(&datadict_path)?;
        let effects = read_vep_table(
            BufReader::new(File::open(&self.tab).with_context(|| {
                format!("failed to open {}", self.tab.display())
            })?),
            datadict,
        )?;
        let calls = read_call_table(
            BufReader::new(File::open(&self.vcf_info).with_context(|| {
                format!("failed to open {}", self.vcf_info.display())
            })?),
            &roster.call_schema(),
        )?;

        let table = AnnotationTable::try_join(effects, calls)?
            .split_allele_depths(&roster)?;
        info!("final table: {}x{}", table.height(), table.width());

        // The table file is only created once the table is fully derived;
        // a failed run leaves the datadict at most, never a partial table.
        TableWriter::new(File::create(&table_path)?)
            .write(table.into_inner())?;

        report_written(&datadict_path);
        report_written(&table_path);
        Ok(())
    }
}
