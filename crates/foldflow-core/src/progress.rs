use crate::launch::ToolKind;

/// Events emitted by the batch driver and dataset runner.
///
/// `DatasetFinish` is emitted exactly once per dataset, strictly after both
/// external tools have returned for it.
#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total_datasets: u64 },
    BatchFinish,

    DatasetStart { name: String },
    DatasetFinish { name: String },

    ToolStart { tool: ToolKind },
    ToolFinish { tool: ToolKind },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Extension seam for surfacing execution status. The default reporter
/// discards every event, so headless callers pay nothing.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
