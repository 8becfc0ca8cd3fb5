use foldflow::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 120;

struct BarState {
    pb: ProgressBar,
    current_dataset: String,
}

/// Renders core progress events as an indicatif bar on stderr: one bar step
/// per dataset, with the message naming the dataset and the tool currently
/// running.
pub struct CliProgressHandler {
    state: Arc<Mutex<BarState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Waiting...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(BarState {
                pb,
                current_dataset: String::new(),
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total_datasets } => {
                    state.pb.reset();
                    state.pb.set_length(total_datasets);
                    state.pb.set_position(0);
                    state.pb.set_style(Self::bar_style());
                    state
                        .pb
                        .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    state.pb.set_message("Starting batch");
                }
                Progress::BatchFinish => {
                    state.pb.disable_steady_tick();
                    state.pb.finish_with_message("✓ Done");
                }
                Progress::DatasetStart { name } => {
                    state.pb.set_message(name.clone());
                    state.current_dataset = name;
                }
                Progress::DatasetFinish { .. } => {
                    state.pb.inc(1);
                }
                Progress::ToolStart { tool } => {
                    state
                        .pb
                        .set_message(format!("{}: {}", state.current_dataset, tool));
                }
                Progress::ToolFinish { .. } => {}
                Progress::Message(msg) => {
                    if state.pb.is_finished() {
                        state.pb.set_message(msg);
                    } else {
                        state.pb.println(format!("  {}", msg));
                    }
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("Failed to create progress bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
