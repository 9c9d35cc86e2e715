// WHY: Co-occurrence counting with a three-cue window; adjacent cues are a direct
// exchange, cues one speaker apart are indirect. Counts span the whole document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::segmenter::{segment, Scene, SegmenterConfig};
use crate::tokenizer::Token;

/// Cue distances that count: 1 is direct, 2 is indirect
pub const WINDOW: usize = 2;

/// Unordered pair of distinct characters, stored sorted
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPair(String, String);

impl CanonicalPair {
    /// Build the canonical key; `None` when both names are the same character
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self(a.to_string(), b.to_string())),
            std::cmp::Ordering::Greater => Some(Self(b.to_string(), a.to_string())),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Direct and indirect counts for one pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionCounts {
    pub direct: u64,
    pub indirect: u64,
}

/// One row of the interaction table; `character1 < character2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub character1: String,
    pub character2: String,
    pub direct: u64,
    pub indirect: u64,
}

/// Fold one scene's cue sequence into the running counts
fn count_scene(
    mut counts: BTreeMap<CanonicalPair, InteractionCounts>,
    characters: &[String],
) -> BTreeMap<CanonicalPair, InteractionCounts> {
    for (j, speaker) in characters.iter().enumerate() {
        for distance in 1..=WINDOW {
            let Some(other) = characters.get(j + distance) else {
                break;
            };
            let Some(pair) = CanonicalPair::new(speaker, other) else {
                continue;
            };
            let entry = counts.entry(pair).or_default();
            if distance == 1 {
                entry.direct += 1;
            } else {
                entry.indirect += 1;
            }
        }
    }
    counts
}

/// Count pairwise interactions across all scenes, sorted by pair
pub fn count_interactions<'a, I>(scenes: I) -> Vec<InteractionRecord>
where
    I: IntoIterator<Item = &'a Scene>,
{
    let counts = scenes
        .into_iter()
        .fold(BTreeMap::new(), |counts, scene| count_scene(counts, &scene.characters));

    debug!("Counted interactions for {} character pairs", counts.len());

    counts
        .into_iter()
        .filter(|(_, c)| c.direct > 0 || c.indirect > 0)
        .map(|(pair, c)| InteractionRecord {
            character1: pair.0,
            character2: pair.1,
            direct: c.direct,
            indirect: c.indirect,
        })
        .collect()
}

/// Segment a token stream and count its interactions
pub fn count_token_interactions(tokens: &[Token], config: &SegmenterConfig) -> Vec<InteractionRecord> {
    count_interactions(&segment(tokens, config))
}
