use crate::error::BatchError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Literal suffix that marks an entry in a batch directory as an input.
pub const FASTA_SUFFIX: &str = ".fasta";

/// One unit of work: a single input file mapped to one output directory.
///
/// Datasets are transient; the resolver builds them, the runner consumes
/// them once, and nothing is retained across datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Input file's base name with its extension stripped.
    pub name: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Classifies `input` and enumerates the datasets to process.
///
/// - A regular file yields exactly one dataset whose output directory is
///   `output_root` itself, unchanged.
/// - A directory yields one dataset per direct entry named `*.fasta`
///   (non-recursive), each mapped to `output_root/<name>`. The list is
///   sorted by name so batch order is deterministic.
/// - Anything else is rejected with [`BatchError::InvalidInput`].
///
/// Resolution is read-only; no directory is created here.
pub fn resolve(input: &Path, output_root: &Path) -> Result<Vec<Dataset>, BatchError> {
    if input.is_file() {
        return Ok(vec![Dataset {
            name: dataset_name(input),
            input_path: input.to_path_buf(),
            output_path: output_root.to_path_buf(),
        }]);
    }
    if input.is_dir() {
        return resolve_directory(input, output_root);
    }
    Err(BatchError::InvalidInput {
        path: input.to_path_buf(),
    })
}

fn resolve_directory(input_dir: &Path, output_root: &Path) -> Result<Vec<Dataset>, BatchError> {
    let mut datasets = Vec::new();
    // Keyed case-insensitively: distinct names that differ only by case
    // would still collide on a case-insensitive output filesystem.
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!("Skipping non-UTF-8 entry in {:?}.", input_dir);
            continue;
        };
        if !file_name.ends_with(FASTA_SUFFIX) {
            continue;
        }

        let input_path = entry.path();
        let name = dataset_name(&input_path);
        if let Some(first) = seen.insert(name.to_lowercase(), input_path.clone()) {
            return Err(BatchError::DuplicateDatasetName {
                name,
                first,
                second: input_path,
            });
        }

        datasets.push(Dataset {
            output_path: output_root.join(&name),
            name,
            input_path,
        });
    }

    datasets.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Resolved {} dataset(s) from directory {:?}.",
        datasets.len(),
        input_dir
    );
    Ok(datasets)
}

fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
