//! Note line bodies: free text with `@i{...}` emphasis and `@akk{...}` language parts.

use once_cell::sync::Lazy;
use regex::Regex;

use super::content::parse_content;
use super::LineError;
use crate::atf::lines::{Line, NoteLine, NotePart};
use crate::atf::tokens::Language;

static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(?P<code>i|akk|sux|es)\{").unwrap());

/// Byte index of the brace closing the one opened just before `from`.
fn closing_brace(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1;
    for (index, c) in text[from..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the body of a note line; `offset` is where `body` starts in its line.
pub(crate) fn parse_note(body: &str, offset: usize) -> Result<Line, LineError> {
    let mut parts = Vec::new();
    let mut position = 0;
    while let Some(captures) = MARKUP_REGEX.captures_at(body, position) {
        let Some(markup) = captures.get(0) else {
            break;
        };
        parts.push(NotePart::string(&body[position..markup.start()]));
        let end = closing_brace(body, markup.end())
            .ok_or(LineError::invalid_line(offset + markup.start()))?;
        let inner = &body[markup.end()..end];
        let part = match &captures["code"] {
            "i" => NotePart::emphasis(inner),
            code => {
                let language = Language::from_note_code(code).unwrap_or_default();
                let tokens = parse_content(inner, offset + markup.end(), language, false)?;
                NotePart::LanguagePart { language, tokens }
            }
        };
        parts.push(part);
        position = end + 1;
    }
    parts.push(NotePart::string(&body[position..]));
    Ok(Line::NoteLine(NoteLine::new(parts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::formats::atf::ToAtf;

    fn note(body: &str) -> NoteLine {
        match parse_note(body, 0).unwrap() {
            Line::NoteLine(note) => note,
            other => panic!("expected a note line, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(note("a plain note").parts, vec![NotePart::string("a plain note")]);
    }

    #[test]
    fn test_language_part_is_parsed_in_its_language() {
        let note = note("cf. @sux{{d}en-lil₂} and @akk{šar-ru}");
        assert_eq!(note.parts.len(), 4);
        match &note.parts[1] {
            NotePart::LanguagePart { language, tokens } => {
                assert_eq!(*language, Language::Sumerian);
                assert_eq!(tokens.to_atf(), "{d}en-lil₂");
                assert!(!tokens[0].lemmatizable());
            }
            other => panic!("expected a language part, got {:?}", other),
        }
        assert_eq!(note.body(), "cf. @sux{{d}en-lil₂} and @akk{šar-ru}");
    }

    #[test]
    fn test_unclosed_markup() {
        assert_eq!(parse_note("see @i{CAD", 7), Err(LineError::invalid_line(11)));
    }

    #[test]
    fn test_invalid_language_part_content() {
        assert_eq!(parse_note("@akk{ku ~}", 0), Err(LineError::invalid_line(8)));
    }
}
