use anyhow::Result;
use memmap2::Mmap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for screenplay reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Map the file into memory instead of streaming it
    pub use_mmap: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
        }
    }
}

/// Statistics for a single screenplay read
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadStats {
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads extracted screenplay text from disk
pub struct ScriptReader {
    config: ReaderConfig,
}

impl ScriptReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole screenplay as UTF-8 text
    pub async fn read_script<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting read of screenplay: {}", path.display());

        let outcome = if self.config.use_mmap {
            let owned = path.to_path_buf();
            tokio::task::spawn_blocking(move || read_mmap(&owned)).await?
        } else {
            self.read_buffered(path).await
        };

        let text = match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Err(e.context(format!("Failed to read {}", path.display())));
            }
        };

        let stats = ReadStats {
            bytes_read: text.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            "Read {}: {} bytes in {}ms{}",
            path.display(),
            stats.bytes_read,
            stats.duration_ms,
            if self.config.use_mmap { " (mmap)" } else { "" }
        );
        Ok((text, stats))
    }

    async fn read_buffered(&self, path: &Path) -> Result<String> {
        let file = File::open(path).await?;
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut text = String::new();
        // read_to_string rejects invalid UTF-8
        reader.read_to_string(&mut text).await?;
        Ok(text)
    }
}

fn read_mmap(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        // Zero-length files cannot be mapped on every platform
        return Ok(String::new());
    }
    // SAFETY: the map is only sound while no other process truncates or rewrites the
    // file; the bytes are copied into an owned String before the map is dropped
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)?;
    Ok(text.to_string())
}

/// Convenience function for reading a single screenplay with default configuration
pub async fn read_script_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = ScriptReader::new(ReaderConfig::default());
    let (text, _stats) = reader.read_script(file_path).await?;
    Ok(text)
}
