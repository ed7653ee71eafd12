//! Transliteration parser
//!
//!     Turns a whole transliteration into a [`Text`]. Parsing is line oriented: each physical line
//!     is classified by the [grammar](grammar) and its body handed to the parser for its kind.
//!
//! Error handling
//!
//!     A broken line does not stop the parse. Every failure is recorded as an
//!     [`ErrorAnnotation`] with the 1-based number of the line, a description of the failure and
//!     a caret under the failing character:
//!
//!         Invalid line.
//!         1. ku ~
//!               ^
//!
//!     Once all lines are processed a single [`TransliterationError`] carries every annotation.
//!
//! Lookahead
//!
//!     A `#note:` line absorbs the non-empty physical lines after it that start with whitespace.
//!     They are joined to the note with one space and count as part of it, so their errors are
//!     reported at the note's own line.
//!
//! Trailing empty lines are dropped from the result. Empty lines between other lines are kept.

mod content;
mod dollar;
mod enclosures;
pub mod grammar;
mod note;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::atf::error::{ErrorAnnotation, TransliterationError};
use crate::atf::lines::Line;
use crate::atf::text::Text;
use grammar::{LineGrammar, GRAMMAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    InvalidLine,
    InvalidBrackets,
}

impl ErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidLine => "Invalid line.",
            ErrorKind::InvalidBrackets => "Invalid brackets.",
        }
    }
}

/// A failure within one line, at a byte offset of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl LineError {
    pub fn invalid_line(offset: usize) -> Self {
        LineError {
            kind: ErrorKind::InvalidLine,
            offset,
        }
    }

    pub fn invalid_brackets(offset: usize) -> Self {
        LineError {
            kind: ErrorKind::InvalidBrackets,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Characters of context shown on each side of the caret.
    pub error_context: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { error_context: 20 }
    }
}

/// A logical line: one physical line, or a note with its continuation lines.
struct SourceLine {
    text: String,
    line_number: usize,
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

fn source_lines(source: &str) -> Vec<SourceLine> {
    let mut lines: Vec<SourceLine> = Vec::new();
    let mut in_note = false;
    for (index, line) in source.lines().enumerate() {
        if in_note && is_continuation(line) {
            if let Some(note) = lines.last_mut() {
                note.text.push(' ');
                note.text.push_str(line.trim());
                continue;
            }
        }
        in_note = line.starts_with("#note:");
        lines.push(SourceLine {
            text: line.to_string(),
            line_number: index + 1,
        });
    }
    lines
}

pub struct AtfParser {
    grammar: &'static LineGrammar,
    options: ParserOptions,
}

impl Default for AtfParser {
    fn default() -> Self {
        AtfParser::new(ParserOptions::default())
    }
}

impl AtfParser {
    pub fn new(options: ParserOptions) -> Self {
        AtfParser {
            grammar: &GRAMMAR,
            options,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn parse(&self, source: &str) -> Result<Text, TransliterationError> {
        let mut lines = Vec::new();
        let mut errors = Vec::new();
        for line in source_lines(source) {
            match self.grammar.parse_line(&line.text) {
                Ok(parsed) => lines.push(parsed),
                Err(error) => errors.push(ErrorAnnotation::new(
                    self.describe(&line.text, error),
                    line.line_number,
                )),
            }
        }
        tracing::debug!(
            lines = lines.len() + errors.len(),
            errors = errors.len(),
            "parsed transliteration"
        );
        if !errors.is_empty() {
            return Err(TransliterationError::new(errors));
        }
        while lines.last() == Some(&Line::EmptyLine) {
            lines.pop();
        }
        Ok(Text::new(lines))
    }

    /// Description, context window and caret for an error at a byte offset of `line`.
    fn describe(&self, line: &str, error: LineError) -> String {
        let chars: Vec<char> = line.chars().collect();
        let position = line
            .char_indices()
            .take_while(|(index, _)| *index < error.offset)
            .count();
        let start = position.saturating_sub(self.options.error_context);
        let end = (position + self.options.error_context + 1).min(chars.len());
        let context: String = chars[start..end].iter().collect();
        format!(
            "{}\n{}\n{}^",
            error.kind.description(),
            context,
            " ".repeat(position - start)
        )
    }
}

/// The shared parser with default options.
pub static DEFAULT_PARSER: Lazy<AtfParser> = Lazy::new(AtfParser::default);

pub fn parse_atf(source: &str) -> Result<Text, TransliterationError> {
    DEFAULT_PARSER.parse(source)
}
