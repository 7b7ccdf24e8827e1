use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;
use vartab::prelude::Compression;

use crate::utils::{init_spinner, report_written, validate_output};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub struct DecompressArgs {
    #[arg(short = 'i', long, required = true, help = "Path of the input VCF.")]
    input: PathBuf,

    #[arg(
        short = 'o',
        long,
        required = true,
        help = "Path for the decompressed output VCF."
    )]
    output: PathBuf,
}

impl PipelineCommand for DecompressArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_output(&self.output)?;

        let compression = Compression::from_path(&self.input);
        info!(
            "copying {} ({} compressed)",
            self.input.display(),
            compression.name()
        );

        let handle = File::open(&self.input).with_context(|| {
            format!("failed to open {}", self.input.display())
        })?;
        let reader = BufReader::new(compression.get_decoder(handle)?);
        let mut writer = BufWriter::new(File::create(&self.output)?);

        let pbar = init_spinner("Decompressing...")?;
        io::copy(&mut pbar.wrap_read(reader), &mut writer)?;
        pbar.finish_and_clear();

        report_written(&self.output);
        Ok(())
    }
}
