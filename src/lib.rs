pub mod classifier;
pub mod tokenizer;
pub mod names;
pub mod segmenter;
pub mod interactions;
pub mod complexity;
pub mod analysis;
pub mod discovery;
pub mod reader;
pub mod incremental;
pub mod report;
pub mod processing;

// Re-export the pipeline stages for convenient access
pub use classifier::{classify_line, ExtractionMode, LineClass};
pub use tokenizer::{tokenize, Token};
pub use names::extract_names;
pub use segmenter::{segment, PreludePolicy, Scene, SegmenterConfig};
pub use interactions::{count_interactions, count_token_interactions, InteractionRecord};
pub use complexity::{label_scenes, scene_complexity, LabeledToken, SceneComplexity};
pub use analysis::ScriptAnalysis;

// Re-export processing types for the CLI and benchmarks
pub use processing::{process_file, process_files_parallel, should_process_file, ProcessingOptions};
pub use report::{FileStats, RunStats};
