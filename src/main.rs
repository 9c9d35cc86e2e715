use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use scenelinks::discovery::{self, DiscoveryConfig, DEFAULT_PATTERN};
use scenelinks::{process_files_parallel, PreludePolicy, ProcessingOptions, RunStats, SegmenterConfig};

#[derive(Parser, Debug)]
#[command(name = "scenelinks")]
#[command(about = "Character interaction and scene complexity analysis for screenplay text")]
#[command(version)]
struct Args {
    /// Root directory to scan for extracted screenplay text
    root_dir: PathBuf,

    /// File name glob for screenplays
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Reprocess screenplays whose outputs already exist
    #[arg(long)]
    overwrite_all: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Keep cues before the first scene heading as scene 0
    #[arg(long)]
    keep_prelude: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting scenelinks");
    info!(?args, "Parsed CLI arguments");

    if !args.root_dir.exists() {
        anyhow::bail!("Root directory does not exist: {}", args.root_dir.display());
    }

    if !args.root_dir.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", args.root_dir.display());
    }

    let run_start = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let start_time = std::time::Instant::now();

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
        pattern: args.pattern.clone(),
    };

    info!("Starting screenplay discovery in: {}", args.root_dir.display());
    let discovered = discovery::collect_discovered_files_parallel(&args.root_dir, discovery_config).await?;

    let mut stats = RunStats::new(run_start);
    let mut valid_paths = Vec::new();
    for file in discovered {
        match file.error {
            None => valid_paths.push(file.path),
            Some(error) => {
                info!("Issue with {}: {}", file.path.display(), error);
                stats.record(scenelinks::FileStats::failed(&file.path, error));
            }
        }
    }

    println!("scenelinks v{} - discovery complete", env!("CARGO_PKG_VERSION"));
    println!("Found {} screenplays matching {}", valid_paths.len(), args.pattern);

    let options = ProcessingOptions {
        overwrite_all: args.overwrite_all,
        fail_fast: args.fail_fast,
        use_mmap: args.use_mmap,
        segmenter: SegmenterConfig {
            prelude: if args.keep_prelude { PreludePolicy::SceneZero } else { PreludePolicy::Discard },
        },
    };

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(valid_paths.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
        );
        bar
    };

    let file_stats = process_files_parallel(valid_paths, &options, |file| {
        progress.set_message(file.status.clone());
        progress.inc(1);
    })
    .await?;
    progress.finish_and_clear();

    for file in file_stats {
        stats.record(file);
    }
    stats.finish(start_time.elapsed().as_millis() as u64);
    stats.write(&args.stats_out).await?;

    println!("Processing complete:");
    println!("  Processed: {} screenplays", stats.files_processed);
    println!("  Skipped (outputs exist): {}", stats.files_skipped);
    if stats.files_failed > 0 {
        println!("  Failed: {}", stats.files_failed);
    }
    println!("  Scenes: {}, interacting pairs: {}", stats.total_scenes, stats.total_interacting_pairs);
    println!("  Stats written to {}", args.stats_out.display());

    info!(
        "Run completed: {} processed, {} skipped, {} failed",
        stats.files_processed, stats.files_skipped, stats.files_failed
    );

    Ok(())
}
