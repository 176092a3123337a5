//! Portfolio terminal binary.

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::Parser;
use termfolio_content::BundledContent;
use termfolio_core::App;
use termfolio_tui::{
    Runtime,
    terminal::{TerminalError, Tui},
};
use tracing_subscriber::EnvFilter;

/// Interactive portfolio terminal.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about)]
struct Args {
    /// Append diagnostics to this file (the TUI owns the screen, so logs
    /// are discarded unless a file is given).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `termfolio_core=trace`.
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Draw on the main screen instead of the alternate screen.
    #[arg(long)]
    no_alt_screen: bool,
}

#[tokio::main]
async fn main() -> Result<(), TerminalError> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter = EnvFilter::try_new(&args.log_filter)
            .map_err(|err| TerminalError::LogFilter(err.to_string()))?;
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut tui = Tui::new(!args.no_alt_screen)?;
    let result = Runtime::new(App::new(), BundledContent::new()).run(tui.terminal_mut()).await;
    drop(tui);
    result
}
