//! # foldflow Core Library
//!
//! Orchestration logic for running a structure-prediction tool and a
//! downstream workflow engine over one or many FASTA datasets. The two
//! external tools are treated as opaque collaborators with a command-line
//! contract; this library only decides *what* to run, *where*, and *in what
//! order*.
//!
//! ## Architectural Philosophy
//!
//! The library is split along its seams so that every decision is testable
//! without spawning real processes:
//!
//! - **[`dataset`]: Input resolution.** Classifies the user-supplied input
//!   (single file vs. directory of `.fasta` files) and maps each input file
//!   to a uniquely named output location.
//! - **[`launch`]: The process seam.** A [`launch::Launcher`] trait hides
//!   `std::process::Command` behind an explicit invocation/outcome pair, so
//!   sequencing and failure handling can be exercised with mocks.
//! - **[`runner`] / [`batch`]: Execution.** The per-dataset runner enforces
//!   the strict prediction-then-workflow ordering; the batch driver walks
//!   datasets sequentially and halts at the first failure.
//! - **[`progress`]: Observation.** An event-sink seam with a no-op default,
//!   so front-ends can render progress without the core knowing how.

pub mod batch;
pub mod dataset;
pub mod error;
pub mod launch;
pub mod progress;
pub mod runner;
