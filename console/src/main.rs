mod annotate;
mod decompress;
mod utils;

use annotate::AnnotateArgs;
use clap::{ArgAction, Parser, Subcommand};
use decompress::DecompressArgs;
use wild::ArgsOs;

pub(crate) trait PipelineCommand {
    fn run(&self) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)."
    )]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(
        about = "Merge a VEP annotation stream with multisample call \
                 statistics into a single annotation table"
    )]
    Annotate(AnnotateArgs),

    #[command(
        about = "Decompress a gzipped multisample VCF for downstream \
                 annotation"
    )]
    Decompress(DecompressArgs),
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);
    utils::setup_logging(cli.verbose)?;

    match cli.command {
        MainMenu::Annotate(args) => args.run(),
        MainMenu::Decompress(args) => args.run(),
    }
}
