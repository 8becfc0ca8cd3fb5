use crate::cli::Cli;
use crate::error::{CliError, Result};
use foldflow::runner::ToolSet;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional on-disk configuration. Only tool settings live here; everything
/// else comes from the command line.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tools: ToolsSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToolsSection {
    pub prediction: Option<String>,
    pub engine: Option<String>,
    pub entrypoint: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }
}

/// Builds the final tool set. Precedence, lowest to highest: built-in
/// defaults, config file, command-line overrides.
pub fn build_tool_set(cli: &Cli) -> Result<ToolSet> {
    let file_config = match &cli.config {
        Some(path) => {
            debug!("Loading tool configuration from {:?}.", path);
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };

    let mut tools = ToolSet::new(cli.workflow.clone());

    if let Some(cmd) = file_config.tools.prediction {
        tools.prediction_command = cmd;
    }
    if let Some(cmd) = file_config.tools.engine {
        tools.engine_command = cmd;
    }
    if let Some(name) = file_config.tools.entrypoint {
        tools.entrypoint = name;
    }

    if let Some(cmd) = &cli.predictor {
        tools.prediction_command = cmd.clone();
    }
    if let Some(cmd) = &cli.engine {
        tools.engine_command = cmd.clone();
    }
    if let Some(name) = &cli.entrypoint {
        tools.entrypoint = name.clone();
    }

    debug!(
        "Resolved tool set: prediction=`{}`, engine=`{}`, entrypoint=`{}`.",
        tools.prediction_command, tools.engine_command, tools.entrypoint
    );
    Ok(tools)
}
