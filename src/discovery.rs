use anyhow::Result;
use futures::stream::{self, Stream, StreamExt};
use glob::{glob, Pattern};
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::incremental::is_output_file;

/// Default file name pattern for extracted screenplay text
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Configuration for screenplay discovery behavior
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Glob matched against file names (not full paths)
    pub pattern: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Discovers screenplay files matching `config.pattern` recursively under the root directory.
/// Files written by this tool are skipped.
///
/// # Returns
/// Stream of `FileValidation` results containing file paths and validation status
pub fn discover_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    let root_path = root_dir.as_ref().to_path_buf();

    stream::unfold(
        DiscoveryState::new(root_path, config),
        |mut state| async move {
            state.next_file().await.map(|result| (result, state))
        }
    )
}

/// Parallel directory traversal with `ignore::WalkBuilder`, streaming files as they are found
pub fn discover_files_parallel(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    let root_path = root_dir.as_ref().to_path_buf();
    let config = Arc::new(config);
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        info!("Starting parallel traversal in: {}", root_path.display());
        let traversal_start = std::time::Instant::now();

        let pattern = match Pattern::new(&config.pattern) {
            Ok(pattern) => pattern,
            Err(e) => {
                let _ = tx.send(Err(anyhow::anyhow!("Invalid file pattern {}: {}", config.pattern, e)));
                return;
            }
        };

        let walker = WalkBuilder::new(&root_path)
            .threads((num_cpus::get() / 2).max(1))
            .follow_links(false)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .build_parallel();

        // UnboundedSender::send is synchronous, so walker threads feed the async side directly
        let (path_tx, mut path_rx) = mpsc::unbounded_channel::<PathBuf>();

        // The walker blocks, keep it off the async runtime
        std::thread::spawn(move || {
            walker.run(|| {
                let path_tx = path_tx.clone();
                let pattern = pattern.clone();
                Box::new(move |result| {
                    if let Ok(entry) = result {
                        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                        let matches = entry.file_name().to_str().is_some_and(|name| pattern.matches(name));
                        if is_file && matches && !is_output_file(entry.path()) {
                            debug!("Found matching file: {}", entry.path().display());
                            if path_tx.send(entry.path().to_path_buf()).is_err() {
                                return WalkState::Quit;
                            }
                        }
                    }
                    WalkState::Continue
                })
            });
        });

        let mut file_count = 0;
        while let Some(path) = path_rx.recv().await {
            file_count += 1;
            match validate_file(path, &config).await {
                Ok(validation) => {
                    if tx.send(Ok(validation)).is_err() {
                        debug!("Receiver dropped, stopping discovery");
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }

        info!(
            "Parallel discovery completed in {}ms, streamed {} files",
            traversal_start.elapsed().as_millis(),
            file_count
        );
    });

    stream::unfold(rx, |mut receiver| async move {
        receiver.recv().await.map(|result| (result, receiver))
    })
}

/// Check a discovered path is a readable regular file.
/// Only returns `Err` under fail-fast; otherwise problems land in `FileValidation::error`.
async fn validate_file(path: PathBuf, config: &DiscoveryConfig) -> Result<FileValidation> {
    debug!("Validating file: {}", path.display());

    match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => Ok(FileValidation { path, error: None }),
        Ok(_) => {
            let error = format!("Path is not a file: {}", path.display());
            warn!("{}", error);
            Ok(FileValidation { path, error: Some(error) })
        }
        Err(e) => {
            let error = format!("Cannot access file {}: {}", path.display(), e);
            warn!("{}", error);

            if config.fail_fast {
                Err(anyhow::anyhow!(error))
            } else {
                Ok(FileValidation { path, error: Some(error) })
            }
        }
    }
}

/// Internal state for sequential discovery
struct DiscoveryState {
    root_dir: PathBuf,
    config: DiscoveryConfig,
    glob_iter: Option<glob::Paths>,
    pattern_failed: bool,
}

impl DiscoveryState {
    fn new(root_dir: PathBuf, config: DiscoveryConfig) -> Self {
        Self {
            root_dir,
            config,
            glob_iter: None,
            pattern_failed: false,
        }
    }

    async fn next_file(&mut self) -> Option<Result<FileValidation>> {
        if self.pattern_failed {
            return None;
        }

        if self.glob_iter.is_none() {
            let pattern = format!("{}/**/{}", Pattern::escape(&self.root_dir.to_string_lossy()), self.config.pattern);
            debug!("Starting file discovery with pattern: {}", pattern);

            match glob(&pattern) {
                Ok(paths) => {
                    self.glob_iter = Some(paths);
                    info!("File discovery initialized for root: {}", self.root_dir.display());
                }
                Err(e) => {
                    self.pattern_failed = true;
                    return Some(Err(anyhow::anyhow!("Failed to create glob pattern: {}", e)));
                }
            }
        }

        let glob_iter = self.glob_iter.as_mut()?;
        loop {
            match glob_iter.next()? {
                Ok(path) if is_output_file(&path) => {
                    debug!("Skipping generated output: {}", path.display());
                }
                Ok(path) => {
                    debug!("Found file: {}", path.display());
                    return Some(validate_file(path, &self.config).await);
                }
                Err(e) => {
                    let error_msg = format!("Glob iteration error: {e}");
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Some(Err(anyhow::anyhow!(error_msg)));
                    }
                }
            }
        }
    }
}

/// Collect all discovered files into a Vec for easier processing
pub async fn collect_discovered_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    collect_stream(discover_files(root_dir, config)).await
}

/// Collect all discovered files using parallel directory traversal
pub async fn collect_discovered_files_parallel(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    let mut files = collect_stream(discover_files_parallel(root_dir, config)).await?;
    // Walker threads finish in any order
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

async fn collect_stream(stream: impl Stream<Item = Result<FileValidation>>) -> Result<Vec<FileValidation>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(stream);

    while let Some(result) = stream.next().await {
        files.push(result?);
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;

    if invalid_count > 0 {
        warn!("Found {} files with validation issues", invalid_count);
    }

    info!("File discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}

/// Convenience function returning only the paths of valid screenplay files
pub async fn find_script_files<P: AsRef<Path>>(root_dir: P) -> Result<Vec<PathBuf>> {
    let validations = collect_discovered_files(root_dir, DiscoveryConfig::default()).await?;

    Ok(validations
        .into_iter()
        .filter(|v| v.error.is_none())
        .map(|v| v.path)
        .collect())
}
