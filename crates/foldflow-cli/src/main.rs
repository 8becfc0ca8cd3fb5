mod cli;
mod config;
mod error;
mod logging;
mod progress;
mod run;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("foldflow v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match run::run(&cli) {
        Ok(summary) => {
            info!(
                "✅ Batch completed: {} dataset(s).",
                summary.datasets_completed
            );
            println!(
                "✅ Batch completed: {} dataset(s).",
                summary.datasets_completed
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ Batch failed: {}", e);
            Err(e)
        }
    }
}
