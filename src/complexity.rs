use serde::{Deserialize, Serialize};

use crate::segmenter::collapse_boundaries;
use crate::tokenizer::Token;

/// Label prefix for renumbered scene headings
pub const SCENE_LABEL_PREFIX: &str = "SCENE";

/// Token stream with every (deduplicated) heading replaced by its scene label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabeledToken {
    Scene(String),
    Character(String),
}

/// Number of cue entries in one scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneComplexity {
    pub scene: String,
    pub appearances: usize,
}

pub fn scene_label(id: usize) -> String {
    format!("{SCENE_LABEL_PREFIX}{id}")
}

/// Collapse repeated headings and rename the rest `SCENE1`, `SCENE2`, ...
pub fn label_scenes(tokens: &[Token]) -> Vec<LabeledToken> {
    let mut next_id = 0;
    collapse_boundaries(tokens)
        .into_iter()
        .map(|token| match token {
            Token::SceneBoundary => {
                next_id += 1;
                LabeledToken::Scene(scene_label(next_id))
            }
            Token::CharacterCue(name) => LabeledToken::Character(name.clone()),
        })
        .collect()
}

/// Count cue entries under each scene label, in scene order.
/// Scenes without cues are reported with zero; cues before the first label are not counted.
pub fn scene_complexity(labeled: &[LabeledToken]) -> Vec<SceneComplexity> {
    let mut rows: Vec<SceneComplexity> = Vec::new();
    for token in labeled {
        match token {
            LabeledToken::Scene(label) => rows.push(SceneComplexity {
                scene: label.clone(),
                appearances: 0,
            }),
            LabeledToken::Character(_) => {
                if let Some(row) = rows.last_mut() {
                    row.appearances += 1;
                }
            }
        }
    }
    rows
}
