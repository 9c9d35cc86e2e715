// WHY: Line classification is the single source of truth for what counts as a scene
// heading or a speaker cue; every later stage only sees the tokens produced here

/// Scene heading prefixes, matched case-sensitively as whole words
pub const SCENE_PREFIXES: &[&str] = &["INT", "EXT"];

/// Which symbol set a character cue may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMode {
    /// Uppercase letters, spaces and apostrophes (name inventories)
    NameInventory,
    /// Same as `NameInventory` plus parentheses, so cues like `BOB (CONT'D)` survive
    #[default]
    Structural,
}

impl ExtractionMode {
    fn allows(self, ch: char) -> bool {
        match ch {
            'A'..='Z' | ' ' | '\'' => true,
            '(' | ')' => self == ExtractionMode::Structural,
            _ => false,
        }
    }
}

/// Classification of a single line of screenplay text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    SceneBoundary,
    /// Trimmed cue text, borrowed from the line
    CharacterCue(&'a str),
    Ordinary,
}

/// Classify a line. The scene heading check runs first, so a line is never both.
pub fn classify_line(line: &str, mode: ExtractionMode) -> LineClass<'_> {
    if is_scene_boundary(line) {
        LineClass::SceneBoundary
    } else if let Some(name) = character_cue(line, mode) {
        LineClass::CharacterCue(name)
    } else {
        LineClass::Ordinary
    }
}

/// True when the line, ignoring leading whitespace, starts with `INT` or `EXT`
/// followed by a non-word character or the end of the line
pub fn is_scene_boundary(line: &str) -> bool {
    let content = line.trim_start();
    SCENE_PREFIXES.iter().any(|prefix| {
        content
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.chars().next().map_or(true, |ch| !is_word_char(ch)))
    })
}

/// Return the trimmed cue text if the whole line is a speaker name in the given mode
pub fn character_cue(line: &str, mode: ExtractionMode) -> Option<&str> {
    let name = line.trim();
    if name.is_empty() || !name.chars().all(|ch| mode.allows(ch)) {
        return None;
    }
    Some(name)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
