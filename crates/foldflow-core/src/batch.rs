use crate::dataset;
use crate::error::BatchError;
use crate::launch::Launcher;
use crate::progress::{Progress, ProgressReporter};
use crate::runner::{DatasetRunner, ToolSet};
use std::path::PathBuf;
use tracing::{info, instrument};

/// One top-level invocation: an input (file or directory), the output root,
/// and the tool commands to run with. Lives only for the duration of the
/// run.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub tools: ToolSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub datasets_completed: usize,
}

/// Resolves the job's datasets and runs them one at a time, in name order.
///
/// Failure semantics are deliberate: the first dataset that fails halts the
/// batch, and the remaining datasets are never attempted. Nothing external
/// is invoked before resolution succeeds, so an invalid input path never
/// launches a tool.
#[instrument(skip_all, name = "batch_run")]
pub fn run(
    job: &BatchJob,
    launcher: &dyn Launcher,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, BatchError> {
    let datasets = dataset::resolve(&job.input, &job.output_root)?;
    info!(
        "Resolved {} dataset(s) from {:?}.",
        datasets.len(),
        job.input
    );
    reporter.report(Progress::BatchStart {
        total_datasets: datasets.len() as u64,
    });

    let runner = DatasetRunner::new(&job.tools, launcher, reporter);
    let mut datasets_completed = 0;
    for dataset in &datasets {
        runner.run(dataset)?;
        datasets_completed += 1;
    }

    reporter.report(Progress::BatchFinish);
    info!("Batch finished: {} dataset(s) completed.", datasets_completed);
    Ok(BatchSummary { datasets_completed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::mock::RecordingLauncher;
    use crate::launch::ToolKind;
    use std::fs::File;
    use std::path::Path;
    use std::sync::Mutex;

    fn job(input: &Path, output_root: &Path) -> BatchJob {
        BatchJob {
            input: input.to_path_buf(),
            output_root: output_root.to_path_buf(),
            tools: ToolSet::new(PathBuf::from("/cfg/flow.cfg")),
        }
    }

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn two_dataset_batch_runs_four_tools_in_order() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        touch(input_dir.path(), "x.fasta");
        touch(input_dir.path(), "y.fasta");

        let launcher = RecordingLauncher::succeeding();
        let reporter = ProgressReporter::new();
        let summary = run(&job(input_dir.path(), out_dir.path()), &launcher, &reporter).unwrap();

        assert_eq!(summary.datasets_completed, 2);

        let calls = launcher.calls();
        assert_eq!(calls.len(), 4);
        // Datasets are sorted by name, and within each dataset the
        // prediction tool always precedes the workflow engine.
        assert_eq!(calls[0].tool, ToolKind::Prediction);
        assert_eq!(
            calls[0].args[1],
            input_dir.path().join("x.fasta").into_os_string()
        );
        assert_eq!(calls[1].tool, ToolKind::WorkflowEngine);
        assert_eq!(calls[1].args[3], out_dir.path().join("x").into_os_string());
        assert_eq!(calls[2].tool, ToolKind::Prediction);
        assert_eq!(
            calls[2].args[1],
            input_dir.path().join("y.fasta").into_os_string()
        );
        assert_eq!(calls[3].tool, ToolKind::WorkflowEngine);
        assert_eq!(calls[3].args[3], out_dir.path().join("y").into_os_string());

        assert!(out_dir.path().join("x").is_dir());
        assert!(out_dir.path().join("y").is_dir());
    }

    #[test]
    fn invalid_input_launches_nothing() {
        let out_dir = tempfile::tempdir().unwrap();
        let launcher = RecordingLauncher::succeeding();
        let reporter = ProgressReporter::new();

        let err = run(
            &job(Path::new("/no/such/input"), out_dir.path()),
            &launcher,
            &reporter,
        )
        .unwrap_err();

        assert!(matches!(err, BatchError::InvalidInput { .. }));
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn first_failing_dataset_halts_the_batch() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        touch(input_dir.path(), "x.fasta");
        touch(input_dir.path(), "y.fasta");

        let launcher = RecordingLauncher::failing_with(ToolKind::Prediction, Some(1));
        let reporter = ProgressReporter::new();

        let err = run(&job(input_dir.path(), out_dir.path()), &launcher, &reporter).unwrap_err();

        assert!(matches!(
            err,
            BatchError::ProcessExit { dataset, .. } if dataset == "x"
        ));
        // Dataset x fails at its first tool; dataset y is never attempted.
        assert_eq!(launcher.calls().len(), 1);
    }

    #[test]
    fn single_file_job_reports_one_completed_dataset() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        touch(input_dir.path(), "solo.fasta");

        let launcher = RecordingLauncher::succeeding();
        let reporter = ProgressReporter::new();
        let summary = run(
            &job(&input_dir.path().join("solo.fasta"), out_dir.path()),
            &launcher,
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.datasets_completed, 1);
        let calls = launcher.calls();
        assert_eq!(calls.len(), 2);
        // Single-file mode writes into the output root itself.
        assert_eq!(calls[0].args[3], out_dir.path().as_os_str().to_os_string());
    }

    #[test]
    fn dataset_finish_events_fire_after_both_tools() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        touch(input_dir.path(), "x.fasta");

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let launcher = RecordingLauncher::succeeding();

        run(&job(input_dir.path(), out_dir.path()), &launcher, &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let finished: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, Progress::DatasetFinish { .. }))
            .collect();
        assert_eq!(finished.len(), 1);
        // The finish event is the last thing before BatchFinish.
        assert!(matches!(events[events.len() - 2], Progress::DatasetFinish { .. }));
        assert!(matches!(events[events.len() - 1], Progress::BatchFinish));
    }
}
