use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "foldflow - Runs a structure-prediction tool and a downstream workflow engine over one or many FASTA datasets.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Input FASTA file, or a directory whose `.fasta` entries are processed as a batch.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output root directory. In batch mode each dataset gets a subdirectory
    /// named after its input file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Workflow configuration file, passed through to the workflow engine unparsed.
    #[arg(value_name = "WORKFLOW")]
    pub workflow: PathBuf,

    /// Path to a TOML file with tool settings (see the `[tools]` table).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the structure-prediction command.
    #[arg(long, value_name = "CMD")]
    pub predictor: Option<String>,

    /// Override the workflow-engine command.
    #[arg(long, value_name = "CMD")]
    pub engine: Option<String>,

    /// Override the workflow entry-point filename handed to the engine.
    #[arg(long, value_name = "NAME")]
    pub entrypoint: Option<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
