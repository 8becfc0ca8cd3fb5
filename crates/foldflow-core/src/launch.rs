use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::Command;
use tracing::debug;

/// Which of the two external collaborators an invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Prediction,
    WorkflowEngine,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Prediction => write!(f, "prediction tool"),
            ToolKind::WorkflowEngine => write!(f, "workflow engine"),
        }
    }
}

/// A fully assembled child-process command line, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub tool: ToolKind,
    pub program: String,
    pub args: Vec<OsString>,
}

/// How a launched tool ended. A failure to launch at all is an `io::Error`,
/// not an `Outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit. `code` is `None` when the child was killed by a signal.
    Failed { code: Option<i32> },
}

/// Seam between orchestration and the operating system. Implementations
/// must block until the child process has terminated.
pub trait Launcher {
    fn launch(&self, invocation: &ToolInvocation) -> io::Result<Outcome>;
}

/// Production launcher: spawns the invocation with inherited stdio and
/// waits for it synchronously.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, invocation: &ToolInvocation) -> io::Result<Outcome> {
        debug!(
            "Spawning {} as `{}` with args {:?}.",
            invocation.tool, invocation.program, invocation.args
        );
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()?;
        if status.success() {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Failed {
                code: status.code(),
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_surfaces_as_launch_error() {
        let invocation = ToolInvocation {
            tool: ToolKind::Prediction,
            program: "definitely-not-a-real-executable-4242".to_string(),
            args: vec![],
        };
        let result = SystemLauncher.launch(&invocation);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn true_and_false_classify_as_success_and_failure() {
        let ok = SystemLauncher
            .launch(&ToolInvocation {
                tool: ToolKind::Prediction,
                program: "true".to_string(),
                args: vec![],
            })
            .unwrap();
        assert_eq!(ok, Outcome::Success);

        let failed = SystemLauncher
            .launch(&ToolInvocation {
                tool: ToolKind::WorkflowEngine,
                program: "false".to_string(),
                args: vec![],
            })
            .unwrap();
        assert_eq!(failed, Outcome::Failed { code: Some(1) });
    }
}
