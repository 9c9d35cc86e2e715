// WHY: Scenes are numbered only after back-to-back headings collapse, so ids stay
// stable no matter how many redundant headings a converted script carries

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokenizer::Token;

/// What to do with cues that appear before the first scene heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreludePolicy {
    /// Drop them: they belong to no scene and are never counted
    #[default]
    Discard,
    /// Keep them as scene 0 (only emitted when non-empty)
    SceneZero,
}

/// Configuration for scene segmentation
#[derive(Debug, Clone, Default)]
pub struct SegmenterConfig {
    pub prelude: PreludePolicy,
}

/// Cues spoken within one scene, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based scene number; 0 only for a kept prelude
    pub id: usize,
    pub characters: Vec<String>,
}

/// Drop every boundary that immediately follows another boundary
pub fn collapse_boundaries(tokens: &[Token]) -> Vec<&Token> {
    let mut collapsed: Vec<&Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let repeated = token.is_boundary() && collapsed.last().is_some_and(|prev| prev.is_boundary());
        if !repeated {
            collapsed.push(token);
        }
    }
    collapsed
}

/// Group cue tokens into numbered scenes
pub fn segment(tokens: &[Token], config: &SegmenterConfig) -> Vec<Scene> {
    let mut scenes = Vec::new();
    let mut prelude = Vec::new();

    for token in collapse_boundaries(tokens) {
        match token {
            Token::SceneBoundary => scenes.push(Scene {
                id: scenes.len() + 1,
                characters: Vec::new(),
            }),
            Token::CharacterCue(name) => match scenes.last_mut() {
                Some(scene) => scene.characters.push(name.clone()),
                None => prelude.push(name.clone()),
            },
        }
    }

    if !prelude.is_empty() {
        match config.prelude {
            PreludePolicy::Discard => {
                debug!("Discarding {} cues before the first scene heading", prelude.len());
            }
            PreludePolicy::SceneZero => scenes.insert(0, Scene { id: 0, characters: prelude }),
        }
    }

    debug!("Segmented {} tokens into {} scenes", tokens.len(), scenes.len());
    scenes
}
