use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use pomoglow::audio::Alarm;
use pomoglow::cli::Cli;
use pomoglow::tui::{self, TuiRunner};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomoglow")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("pomoglow.log");

    // Logs go to a file: stderr belongs to the TUI while it runs
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging()?;

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    // A missing or undecodable alarm asset is fatal; there is no silent mode.
    let alarm = match Alarm::load(&cli.alarm) {
        Ok(alarm) => alarm,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return Err(e).context("Failed to load alarm asset");
        }
    };

    let terminal = tui::init_terminal()?;
    let mut runner = TuiRunner::new(terminal, alarm);
    let result = runner.run().await;
    tui::restore_terminal()?;

    result
}
