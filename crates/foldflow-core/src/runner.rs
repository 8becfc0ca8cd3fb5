use crate::dataset::Dataset;
use crate::error::BatchError;
use crate::launch::{Launcher, Outcome, ToolInvocation, ToolKind};
use crate::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use tracing::{error, info};

pub const DEFAULT_PREDICTION_COMMAND: &str = "run_alphafold";
pub const DEFAULT_ENGINE_COMMAND: &str = "nextflow";
pub const DEFAULT_ENTRYPOINT: &str = "main.nf";

/// The external commands a batch runs with, plus the workflow configuration
/// file handed through to the engine unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    pub prediction_command: String,
    pub engine_command: String,
    pub entrypoint: String,
    pub workflow_file: PathBuf,
}

impl ToolSet {
    pub fn new(workflow_file: PathBuf) -> Self {
        Self {
            prediction_command: DEFAULT_PREDICTION_COMMAND.to_string(),
            engine_command: DEFAULT_ENGINE_COMMAND.to_string(),
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            workflow_file,
        }
    }

    /// `<prediction> -i <input> -o <output>`
    pub fn prediction_invocation(&self, dataset: &Dataset) -> ToolInvocation {
        ToolInvocation {
            tool: ToolKind::Prediction,
            program: self.prediction_command.clone(),
            args: vec![
                "-i".into(),
                dataset.input_path.clone().into_os_string(),
                "-o".into(),
                dataset.output_path.clone().into_os_string(),
            ],
        }
    }

    /// `<engine> -C <workflow_file> -work-dir <output> <entrypoint>`
    pub fn engine_invocation(&self, dataset: &Dataset) -> ToolInvocation {
        ToolInvocation {
            tool: ToolKind::WorkflowEngine,
            program: self.engine_command.clone(),
            args: vec![
                "-C".into(),
                self.workflow_file.clone().into_os_string(),
                "-work-dir".into(),
                dataset.output_path.clone().into_os_string(),
                self.entrypoint.as_str().into(),
            ],
        }
    }
}

/// Executes one dataset: ensures its output directory exists, runs the
/// prediction tool to completion, then the workflow engine to completion.
///
/// The engine invocation never starts before the prediction invocation has
/// terminated, and neither tool's outcome is ignored: a launch failure or a
/// non-zero exit fails the dataset.
pub struct DatasetRunner<'a> {
    tools: &'a ToolSet,
    launcher: &'a dyn Launcher,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a> DatasetRunner<'a> {
    pub fn new(
        tools: &'a ToolSet,
        launcher: &'a dyn Launcher,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            tools,
            launcher,
            reporter,
        }
    }

    pub fn run(&self, dataset: &Dataset) -> Result<(), BatchError> {
        // Pre-existing output directories are reused as-is, never cleared.
        std::fs::create_dir_all(&dataset.output_path).map_err(|source| {
            BatchError::CreateOutputDir {
                path: dataset.output_path.clone(),
                source,
            }
        })?;

        self.reporter.report(Progress::DatasetStart {
            name: dataset.name.clone(),
        });

        self.run_tool(dataset, self.tools.prediction_invocation(dataset))?;
        self.run_tool(dataset, self.tools.engine_invocation(dataset))?;

        self.reporter.report(Progress::DatasetFinish {
            name: dataset.name.clone(),
        });
        Ok(())
    }

    fn run_tool(&self, dataset: &Dataset, invocation: ToolInvocation) -> Result<(), BatchError> {
        info!(
            "Running {} for dataset '{}'.",
            invocation.tool, dataset.name
        );
        self.reporter.report(Progress::ToolStart {
            tool: invocation.tool,
        });

        // Blocks until the child exits; there is deliberately no timeout.
        let outcome =
            self.launcher
                .launch(&invocation)
                .map_err(|source| BatchError::ProcessLaunch {
                    tool: invocation.tool,
                    dataset: dataset.name.clone(),
                    source,
                })?;

        match outcome {
            Outcome::Success => {
                self.reporter.report(Progress::ToolFinish {
                    tool: invocation.tool,
                });
                Ok(())
            }
            Outcome::Failed { code } => {
                error!(
                    "{} failed for dataset '{}' (exit code {:?}).",
                    invocation.tool, dataset.name, code
                );
                Err(BatchError::ProcessExit {
                    tool: invocation.tool,
                    dataset: dataset.name.clone(),
                    code,
                })
            }
        }
    }
}
