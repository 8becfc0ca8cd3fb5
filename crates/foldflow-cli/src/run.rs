use crate::cli::Cli;
use crate::config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use foldflow::batch::{self, BatchJob, BatchSummary};
use foldflow::launch::SystemLauncher;
use foldflow::progress::ProgressReporter;
use tracing::info;

pub fn run(cli: &Cli) -> Result<BatchSummary> {
    let tools = config::build_tool_set(cli)?;
    let job = BatchJob {
        input: cli.input.clone(),
        output_root: cli.output.clone(),
        tools,
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Starting batch: input {:?}, output root {:?}, workflow {:?}.",
        job.input, job.output_root, job.tools.workflow_file
    );

    let summary = batch::run(&job, &SystemLauncher, &reporter)?;
    Ok(summary)
}
