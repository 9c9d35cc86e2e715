// WHY: One entry point per document so the CLI, tests and benches all run the
// same sequence of stages over the same text

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complexity::{label_scenes, scene_complexity, SceneComplexity};
use crate::interactions::{count_interactions, InteractionRecord};
use crate::names::extract_names;
use crate::segmenter::{segment, PreludePolicy, Scene, SegmenterConfig};
use crate::tokenizer::tokenize;

/// Every output of the pipeline for a single screenplay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptAnalysis {
    pub prelude_policy: PreludePolicy,
    /// Distinct names from the name inventory pass
    pub names: Vec<String>,
    pub scenes: Vec<Scene>,
    pub interactions: Vec<InteractionRecord>,
    pub complexity: Vec<SceneComplexity>,
}

impl ScriptAnalysis {
    /// Run the full pipeline over extracted screenplay text
    pub fn from_text(text: &str, config: &SegmenterConfig) -> Self {
        let tokens = tokenize(text);
        let scenes = segment(&tokens, config);
        let interactions = count_interactions(&scenes);
        let complexity = scene_complexity(&label_scenes(&tokens));
        let names = extract_names(text);

        debug!(
            "Analysis complete: {} names, {} scenes, {} interacting pairs",
            names.len(),
            scenes.len(),
            interactions.len()
        );

        Self {
            prelude_policy: config.prelude,
            names,
            scenes,
            interactions,
            complexity,
        }
    }

    /// Numbered scenes only; a kept prelude is not a scene of the screenplay
    pub fn scene_count(&self) -> usize {
        self.scenes.iter().filter(|s| s.id > 0).count()
    }

    /// Total cue entries across the counted scenes
    pub fn cue_count(&self) -> usize {
        self.scenes.iter().map(|s| s.characters.len()).sum()
    }
}
