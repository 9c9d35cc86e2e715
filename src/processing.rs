// WHY: Each screenplay is an independent unit of work; documents run concurrently
// and only their statistics are gathered at the end

use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::ScriptAnalysis;
use crate::incremental::{outputs_exist, remove_outputs};
use crate::reader::{ReaderConfig, ScriptReader};
use crate::report::{write_outputs, FileStats};
use crate::segmenter::SegmenterConfig;

/// Options shared by every document in a run
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Reprocess documents whose outputs already exist
    pub overwrite_all: bool,
    /// Abort on the first failing document
    pub fail_fast: bool,
    pub use_mmap: bool,
    pub segmenter: SegmenterConfig,
}

/// Should the file be (re)processed given existing outputs
pub fn should_process_file(path: &Path, options: &ProcessingOptions) -> bool {
    options.overwrite_all || !outputs_exist(path)
}

/// Read, analyze and write outputs for one screenplay
pub async fn process_file(path: &Path, options: &ProcessingOptions) -> Result<FileStats> {
    if !should_process_file(path, options) {
        info!("Skipping {}: outputs already exist", path.display());
        return Ok(FileStats::skipped(path));
    }

    let start_time = std::time::Instant::now();
    let reader = ScriptReader::new(ReaderConfig {
        use_mmap: options.use_mmap,
        ..Default::default()
    });
    let (text, read_stats) = reader.read_script(path).await?;

    let config = options.segmenter.clone();
    let analysis = tokio::task::spawn_blocking(move || ScriptAnalysis::from_text(&text, &config)).await?;

    if let Err(e) = write_outputs(path, &analysis).await {
        // A partial set would make the next run skip this document
        if let Err(cleanup) = remove_outputs(path) {
            warn!("Could not remove partial outputs of {}: {}", path.display(), cleanup);
        }
        return Err(e);
    }

    let stats = FileStats::success(path, read_stats, &analysis, start_time.elapsed().as_millis() as u64);
    info!(
        "Processed {}: {} scenes, {} cues, {} interacting pairs in {}ms",
        path.display(),
        stats.scenes,
        stats.cues,
        stats.interacting_pairs,
        stats.processing_time_ms
    );
    Ok(stats)
}

/// Process files with bounded concurrency, calling `on_done` as each one finishes.
/// Failures become `failed` stats unless `fail_fast` is set, in which case the first error is returned.
pub async fn process_files_parallel<F>(
    paths: Vec<PathBuf>,
    options: &ProcessingOptions,
    mut on_done: F,
) -> Result<Vec<FileStats>>
where
    F: FnMut(&FileStats),
{
    let concurrency = num_cpus::get().max(1);
    info!("Processing {} files with concurrency {}", paths.len(), concurrency);

    let mut results = stream::iter(paths)
        .map(|path| async move {
            let outcome = process_file(&path, options).await;
            (path, outcome)
        })
        .buffer_unordered(concurrency);

    let mut all_stats = Vec::new();
    while let Some((path, outcome)) = results.next().await {
        let stats = match outcome {
            Ok(stats) => stats,
            Err(e) => {
                if options.fail_fast {
                    return Err(e.context(format!("Processing failed for {}", path.display())));
                }
                warn!("Processing failed for {}: {:#}", path.display(), e);
                FileStats::failed(&path, format!("{e:#}"))
            }
        };
        on_done(&stats);
        all_stats.push(stats);
    }

    Ok(all_stats)
}
