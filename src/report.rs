// WHY: Tabular rendering of analysis records plus per-run statistics; the core only
// hands out structs, everything about file formats lives here

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::analysis::ScriptAnalysis;
use crate::complexity::SceneComplexity;
use crate::incremental::{
    generate_output_path, ANALYSIS_SUFFIX, COMPLEXITY_SUFFIX, INTERACTIONS_SUFFIX, NAMES_SUFFIX,
};
use crate::interactions::InteractionRecord;
use crate::reader::ReadStats;

/// Column order of the interaction table
pub const INTERACTIONS_HEADER: &str = "character1\tcharacter2\tdirect\tindirect";
/// Column order of the complexity table
pub const COMPLEXITY_HEADER: &str = "scene\tappearances";

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    /// Screenplay path as discovered
    pub path: String,
    pub bytes_processed: u64,
    /// Numbered scenes, matching the complexity table rows
    pub scenes: u64,
    pub cues: u64,
    pub characters: u64,
    pub interacting_pairs: u64,
    pub read_time_ms: u64,
    pub processing_time_ms: u64,
    /// success, skipped or failed
    pub status: String,
    pub error: Option<String>,
}

impl FileStats {
    pub fn success(path: &Path, read: ReadStats, analysis: &ScriptAnalysis, processing_time_ms: u64) -> Self {
        Self {
            path: path.display().to_string(),
            bytes_processed: read.bytes_read,
            scenes: analysis.scene_count() as u64,
            cues: analysis.cue_count() as u64,
            characters: analysis.names.len() as u64,
            interacting_pairs: analysis.interactions.len() as u64,
            read_time_ms: read.duration_ms,
            processing_time_ms,
            status: "success".to_string(),
            error: None,
        }
    }

    pub fn skipped(path: &Path) -> Self {
        Self::empty(path, "skipped", None)
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self::empty(path, "failed", Some(error))
    }

    fn empty(path: &Path, status: &str, error: Option<String>) -> Self {
        Self {
            path: path.display().to_string(),
            bytes_processed: 0,
            scenes: 0,
            cues: 0,
            characters: 0,
            interacting_pairs: 0,
            read_time_ms: 0,
            processing_time_ms: 0,
            status: status.to_string(),
            error,
        }
    }
}

/// Aggregate statistics for one CLI run
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    /// Seconds since the Unix epoch
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub total_bytes_processed: u64,
    pub total_scenes: u64,
    pub total_interacting_pairs: u64,
    pub files_processed: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    pub fn new(run_start: u64) -> Self {
        Self { run_start, ..Default::default() }
    }

    /// Fold one file's stats into the totals
    pub fn record(&mut self, stats: FileStats) {
        match stats.status.as_str() {
            "success" => self.files_processed += 1,
            "skipped" => self.files_skipped += 1,
            _ => self.files_failed += 1,
        }
        self.total_bytes_processed += stats.bytes_processed;
        self.total_scenes += stats.scenes;
        self.total_interacting_pairs += stats.interacting_pairs;
        self.file_stats.push(stats);
    }

    /// Sort per-file rows by path so reports are stable across concurrent runs
    pub fn finish(&mut self, total_processing_time_ms: u64) {
        self.total_processing_time_ms = total_processing_time_ms;
        self.file_stats.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub async fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

/// Render the interaction table, header first
pub fn format_interactions(records: &[InteractionRecord]) -> String {
    let mut out = String::from(INTERACTIONS_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!("{}\t{}\t{}\t{}\n", r.character1, r.character2, r.direct, r.indirect));
    }
    out
}

/// Render the per-scene complexity table, header first
pub fn format_complexity(rows: &[SceneComplexity]) -> String {
    let mut out = String::from(COMPLEXITY_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!("{}\t{}\n", row.scene, row.appearances));
    }
    out
}

async fn write_text(path: &Path, content: &str) -> Result<()> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Write every output file for one screenplay next to it
pub async fn write_outputs(source_path: &Path, analysis: &ScriptAnalysis) -> Result<Vec<PathBuf>> {
    let mut names = analysis.names.join("\n");
    if !names.is_empty() {
        names.push('\n');
    }

    let outputs = [
        (NAMES_SUFFIX, names),
        (INTERACTIONS_SUFFIX, format_interactions(&analysis.interactions)),
        (COMPLEXITY_SUFFIX, format_complexity(&analysis.complexity)),
        (ANALYSIS_SUFFIX, serde_json::to_string_pretty(analysis)?),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (suffix, content) in outputs {
        let path = generate_output_path(source_path, suffix);
        write_text(&path, &content).await?;
        written.push(path);
    }
    Ok(written)
}
