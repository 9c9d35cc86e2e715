// WHY: Structural pass over a whole document; ordinary lines are dropped so the
// token stream only carries scene headings and speaker cues in document order

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{classify_line, ExtractionMode, LineClass};

/// One structural element of a screenplay
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    SceneBoundary,
    CharacterCue(String),
}

impl Token {
    pub fn is_boundary(&self) -> bool {
        matches!(self, Token::SceneBoundary)
    }
}

/// Split text into lines on `\n`, `\r\n`, `\r` and the remaining Unicode line separators
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(is_line_break) {
            Some(pos) => {
                let break_len = if current[pos..].starts_with("\r\n") {
                    2
                } else {
                    current[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = Some(&current[pos + break_len..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                // A trailing line break does not open an extra empty line
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Tokenize a document: headings become `SceneBoundary`, cue lines become `CharacterCue`
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = split_lines(text)
        .filter_map(|line| match classify_line(line, ExtractionMode::Structural) {
            LineClass::SceneBoundary => Some(Token::SceneBoundary),
            LineClass::CharacterCue(name) => Some(Token::CharacterCue(name.to_string())),
            LineClass::Ordinary => None,
        })
        .collect();

    debug!(
        "Tokenized {} bytes into {} tokens ({} boundaries)",
        text.len(),
        tokens.len(),
        tokens.iter().filter(|t| t.is_boundary()).count()
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(name: &str) -> Token {
        Token::CharacterCue(name.to_string())
    }

    #[test]
    fn test_split_lines_conventions() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<&str> = split_lines("one\u{2028}two\n").collect();
        assert_eq!(lines, vec!["one", "two"]);

        let lines: Vec<&str> = split_lines("x\n\ny").collect();
        assert_eq!(lines, vec!["x", "", "y"]);

        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_tokenize_screenplay_fragment() {
        let text = "\
INT. KITCHEN - DAY

Alice pours coffee.

                ALICE
        Morning.

                BOB (CONT'D)
        Is it?

EXT. GARDEN - LATER

                ALICE
        Come outside.
";
        let tokens = tokenize(text);
        assert_eq!(
            tokens,
            vec![
                Token::SceneBoundary,
                cue("ALICE"),
                cue("BOB (CONT'D)"),
                Token::SceneBoundary,
                cue("ALICE"),
            ]
        );
    }

    #[test]
    fn test_tokenize_crlf_document() {
        let tokens = tokenize("INT. CAR\r\nJOE\r\nhello\r\nMAX\r\n");
        assert_eq!(tokens, vec![Token::SceneBoundary, cue("JOE"), cue("MAX")]);
    }

    #[test]
    fn test_tokenize_empty_and_prose() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("Nothing but prose here.\nAnd more of it.").is_empty());
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "INT. A\nX\nY\nEXT. B\nZ\n";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
