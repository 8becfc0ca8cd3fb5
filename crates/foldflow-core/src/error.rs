use crate::launch::ToolKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Input path '{path}' is neither a file nor a directory", path = path.display())]
    InvalidInput { path: PathBuf },

    #[error(
        "Inputs '{first}' and '{second}' both resolve to dataset name '{name}'; their outputs would collide",
        first = first.display(),
        second = second.display()
    )]
    DuplicateDatasetName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to create output directory '{path}': {source}", path = path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {tool} for dataset '{dataset}': {source}")]
    ProcessLaunch {
        tool: ToolKind,
        dataset: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed for dataset '{dataset}': {status}", status = exit_label(code))]
    ProcessExit {
        tool: ToolKind,
        dataset: String,
        code: Option<i32>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}
