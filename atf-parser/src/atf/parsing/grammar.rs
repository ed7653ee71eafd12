//! Line grammar
//!
//!     Physical lines are classified by a declarative table of regular expressions. Patterns are
//!     tried in declaration order and the first match decides the line kind:
//!
//!         1. empty    - only whitespace
//!         2. note     - `#note:`, must precede control since it shares the `#` prefix
//!         3. dollar   - `$ <body>`
//!         4. control  - `=:`, `&`, `@` or `#` followed by free text
//!         5. text     - `<line number>. <content>`
//!
//!     The body of each kind is handed to its own parser. A line matching no pattern is an
//!     invalid line at offset 0.

use once_cell::sync::Lazy;
use regex::Regex;

use super::content::parse_content;
use super::dollar::parse_dollar;
use super::note::parse_note;
use super::LineError;
use crate::atf::lines::{ControlLine, Line, LineLabel, TextLine};
use crate::atf::tokens::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Empty,
    Note,
    Dollar,
    Control,
    Text,
}

/// Line patterns in the order they are tried.
pub const LINE_PATTERNS: &[(LineRule, &str)] = &[
    (LineRule::Empty, r"^\s*$"),
    (LineRule::Note, r"^#note:(?P<body>.*)$"),
    (LineRule::Dollar, r"^\$(?P<body>.*)$"),
    (LineRule::Control, r"^(?P<prefix>=:|&|@|#)(?P<body>.*)$"),
    (LineRule::Text, r"^(?P<label>[^\s.]+)\.(?P<body>.*)$"),
];

/// The compiled line patterns. Built once and shared by every parser.
#[derive(Debug)]
pub struct LineGrammar {
    rules: Vec<(LineRule, Regex)>,
}

pub(crate) static GRAMMAR: Lazy<LineGrammar> = Lazy::new(|| LineGrammar {
    rules: LINE_PATTERNS
        .iter()
        .map(|(rule, pattern)| (*rule, Regex::new(pattern).unwrap()))
        .collect(),
});

impl LineGrammar {
    /// The first rule matching `line`.
    pub fn classify(&self, line: &str) -> Option<LineRule> {
        self.rules
            .iter()
            .find(|(_, regex)| regex.is_match(line))
            .map(|(rule, _)| *rule)
    }

    pub(crate) fn parse_line(&self, line: &str) -> Result<Line, LineError> {
        let Some((rule, captures)) = self
            .rules
            .iter()
            .find_map(|(rule, regex)| regex.captures(line).map(|captures| (*rule, captures)))
        else {
            return Err(LineError::invalid_line(0));
        };
        let body = captures.name("body");
        let (body, start) = body
            .map(|body| (body.as_str(), body.start()))
            .unwrap_or(("", line.len()));
        match rule {
            LineRule::Empty => Ok(Line::EmptyLine),
            LineRule::Note => {
                let trimmed = body.trim_start();
                parse_note(trimmed, start + body.len() - trimmed.len())
            }
            LineRule::Dollar => {
                let trimmed = body.trim_start();
                parse_dollar(trimmed.trim_end(), start + body.len() - trimmed.len())
            }
            LineRule::Control => Ok(Line::ControlLine(ControlLine::new(
                &captures["prefix"],
                body,
            ))),
            LineRule::Text => {
                let label =
                    LineLabel::parse(&captures["label"]).ok_or(LineError::invalid_line(0))?;
                if !body.starts_with(char::is_whitespace) {
                    return Err(LineError::invalid_line(start));
                }
                if body.trim().is_empty() {
                    return Err(LineError::invalid_line(line.len()));
                }
                let content = parse_content(body, start, Language::default(), false)?;
                Ok(Line::TextLine(TextLine::new(label, content)))
            }
        }
    }
}
