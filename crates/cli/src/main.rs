use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use maktaba_types::Shelf;

/// Terminal client for a lending-library shelf.
///
/// Loads the shelf document exported by the library server and opens the
/// interactive books view.
#[derive(Debug, Parser)]
#[command(name = "maktaba", version, about)]
struct Cli {
    /// Path to the shelf JSON document
    #[arg(default_value = "shelf.sample.json")]
    shelf: PathBuf,

    /// Append logs to this file instead of discarding them. Stdout belongs
    /// to the TUI, so logging is file-only.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let shelf = Shelf::load(&cli.shelf)
        .with_context(|| format!("failed to load shelf document {}", cli.shelf.display()))?;
    tracing::info!(books = shelf.books.len(), "shelf loaded");

    maktaba_tui::run(shelf).await
}

fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
