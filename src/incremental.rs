// WHY: Output files sit next to their source screenplay; a document counts as done
// only when every output exists, so interrupted runs redo partial work

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffixes appended to a screenplay's file stem, one per output file
pub const NAMES_SUFFIX: &str = "_names.txt";
pub const INTERACTIONS_SUFFIX: &str = "_interactions.tsv";
pub const COMPLEXITY_SUFFIX: &str = "_complexity.tsv";
pub const ANALYSIS_SUFFIX: &str = "_analysis.json";

pub const OUTPUT_SUFFIXES: &[&str] = &[NAMES_SUFFIX, INTERACTIONS_SUFFIX, COMPLEXITY_SUFFIX, ANALYSIS_SUFFIX];

/// Build the output path for a source file and suffix
///
/// # Example
/// ```
/// use scenelinks::incremental::{generate_output_path, INTERACTIONS_SUFFIX};
/// let path = generate_output_path("scripts/heat.txt".as_ref(), INTERACTIONS_SUFFIX);
/// assert!(path.ends_with("heat_interactions.tsv"));
/// ```
pub fn generate_output_path(source_path: &Path, suffix: &str) -> PathBuf {
    let mut output_path = source_path.to_path_buf();
    let file_stem = output_path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    output_path.set_file_name(format!("{file_stem}{suffix}"));
    output_path
}

/// All output paths for a source file, in `OUTPUT_SUFFIXES` order
pub fn output_paths(source_path: &Path) -> Vec<PathBuf> {
    OUTPUT_SUFFIXES.iter()
        .map(|suffix| generate_output_path(source_path, suffix))
        .collect()
}

/// True when every output for the source file already exists
pub fn outputs_exist<P: AsRef<Path>>(source_path: P) -> bool {
    output_paths(source_path.as_ref()).iter().all(|p| p.exists())
}

/// True when the path looks like something this tool wrote, so discovery can skip it
pub fn is_output_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| OUTPUT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Remove any outputs of a source file, ignoring ones that are missing
pub fn remove_outputs<P: AsRef<Path>>(source_path: P) -> Result<usize, io::Error> {
    let mut removed = 0;
    for path in output_paths(source_path.as_ref()) {
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(removed)
}
