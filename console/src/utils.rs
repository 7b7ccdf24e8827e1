use std::path::Path;

use anyhow::ensure;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{warn, LevelFilter};

pub(crate) fn setup_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .try_init()?;
    Ok(())
}

/// Checks an output path before any work happens: the parent directory
/// must exist, and an existing file gets a warning before it is replaced.
pub(crate) fn validate_output<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure!(
            parent.as_os_str().is_empty() || parent.exists(),
            "output directory {} does not exist",
            parent.display()
        );
    }
    if path.exists() {
        warn!("{} exists and will be overwritten", path.display());
    }
    Ok(())
}

pub(crate) fn init_spinner(message: &str) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {bytes} {msg}")?,
    );
    progress_bar.set_message(message.to_string());
    Ok(progress_bar)
}

pub(crate) fn report_written<P: AsRef<Path>>(path: P) {
    println!(
        "[{}] wrote {}",
        style("V").green(),
        style(path.as_ref().display()).green()
    );
}
