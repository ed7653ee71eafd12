//! Line model
//!
//!     A text is an ordered sequence of lines. Each line kind is one variant of the closed
//!     [`Line`] enum:
//!
//!         EmptyLine:      a blank line.
//!         ControlLine:    `&`, `@`, `=:` and `#` lines, kept as one opaque value.
//!         TextLine:       a line number followed by tokenized content. See [tokens](crate::atf::tokens).
//!         Dollar lines:   physical-state statements (`$ ...`). See [dollar](dollar).
//!         NoteLine:       `#note:` lines. See [note](note).
//!
//!     Only text lines carry annotations, so only text lines have a non-trivial merge. Every
//!     other kind is replaced wholesale by its edited version.

pub mod dollar;
pub mod label;
pub mod note;
mod repr;

use serde::{Deserialize, Serialize};

use crate::atf::annotations::{AlignmentToken, LemmatizationToken};
use crate::atf::error::{AlignmentError, LemmatizationError};
use crate::atf::formats::atf::ToAtf;
use crate::atf::merging::{self, DiffAlgorithm};
use crate::atf::tokens::Token;

pub use dollar::{
    DollarStatus, Extent, ImageDollarLine, LooseDollarLine, Object, Qualification, Ruling,
    RulingDollarLine, Scope, ScopeContainer, State, StateDollarLine, Surface,
};
pub use label::{LineLabel, LineNumber};
pub use note::{NoteLine, NotePart};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "type")]
pub enum Line {
    EmptyLine,
    ControlLine(ControlLine),
    TextLine(TextLine),
    LooseDollarLine(LooseDollarLine),
    ImageDollarLine(ImageDollarLine),
    RulingDollarLine(RulingDollarLine),
    StateDollarLine(StateDollarLine),
    NoteLine(NoteLine),
}

/// A line kept verbatim after its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlLine {
    pub prefix: String,
    pub content: Vec<Token>,
}

impl ControlLine {
    pub const PREFIXES: [&'static str; 4] = ["=:", "&", "@", "#"];

    pub fn new(prefix: impl Into<String>, value: impl Into<String>) -> Self {
        ControlLine {
            prefix: prefix.into(),
            content: vec![Token::value_token(value)],
        }
    }

    pub fn value(&self) -> String {
        self.content.iter().map(Token::value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    pub line_number: LineLabel,
    pub content: Vec<Token>,
}

impl TextLine {
    pub fn new(line_number: LineLabel, content: Vec<Token>) -> Self {
        TextLine {
            line_number,
            content,
        }
    }

    pub fn prefix(&self) -> String {
        format!("{}.", self.line_number)
    }

    /// Reconcile the edited line `other` with this one. The line number always comes from
    /// `other`; tokens are merged so that unchanged words keep their annotations.
    pub fn merge_with(&self, other: &TextLine, algorithm: DiffAlgorithm) -> TextLine {
        let content = merging::merge(
            &self.content,
            &other.content,
            Token::get_key,
            Token::merge,
            algorithm,
        );
        TextLine::new(other.line_number.clone(), content)
    }

    pub fn lemmatization(&self) -> Vec<LemmatizationToken> {
        self.content
            .iter()
            .map(|token| {
                let lemma = token
                    .lemmatizable()
                    .then(|| token.unique_lemma().to_vec());
                LemmatizationToken::new(token.value(), lemma)
            })
            .collect()
    }

    pub fn update_lemmatization(
        &self,
        row: &[LemmatizationToken],
    ) -> Result<TextLine, LemmatizationError> {
        if row.len() != self.content.len() {
            return Err(LemmatizationError::LengthMismatch {
                expected: self.content.len(),
                actual: row.len(),
            });
        }
        let content = self
            .content
            .iter()
            .zip(row)
            .map(|(token, lemma)| token.set_unique_lemma(lemma))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TextLine::new(self.line_number.clone(), content))
    }

    pub fn alignment(&self) -> Vec<AlignmentToken> {
        self.content
            .iter()
            .map(|token| {
                let alignment = if token.alignable() {
                    token.alignment()
                } else {
                    None
                };
                AlignmentToken::new(token.value(), alignment)
            })
            .collect()
    }

    pub fn update_alignment(&self, row: &[AlignmentToken]) -> Result<TextLine, AlignmentError> {
        if row.len() != self.content.len() {
            return Err(AlignmentError::LengthMismatch {
                expected: self.content.len(),
                actual: row.len(),
            });
        }
        let content = self
            .content
            .iter()
            .zip(row)
            .map(|(token, alignment)| token.set_alignment(alignment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TextLine::new(self.line_number.clone(), content))
    }
}

impl Line {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Line::EmptyLine => "EmptyLine",
            Line::ControlLine(_) => "ControlLine",
            Line::TextLine(_) => "TextLine",
            Line::LooseDollarLine(_) => "LooseDollarLine",
            Line::ImageDollarLine(_) => "ImageDollarLine",
            Line::RulingDollarLine(_) => "RulingDollarLine",
            Line::StateDollarLine(_) => "StateDollarLine",
            Line::NoteLine(_) => "NoteLine",
        }
    }

    pub fn prefix(&self) -> String {
        match self {
            Line::EmptyLine => String::new(),
            Line::ControlLine(line) => line.prefix.clone(),
            Line::TextLine(line) => line.prefix(),
            Line::LooseDollarLine(_)
            | Line::ImageDollarLine(_)
            | Line::RulingDollarLine(_)
            | Line::StateDollarLine(_) => "$".to_string(),
            Line::NoteLine(_) => "#note:".to_string(),
        }
    }

    /// Tokens of the line. Kinds without tokenized content expose their body as one value token.
    pub fn content(&self) -> Vec<Token> {
        match self {
            Line::EmptyLine => Vec::new(),
            Line::ControlLine(line) => line.content.clone(),
            Line::TextLine(line) => line.content.clone(),
            _ => {
                let atf = self.atf();
                vec![Token::value_token(&atf[self.prefix().len()..])]
            }
        }
    }

    pub fn atf(&self) -> String {
        self.to_atf()
    }

    /// Diff key of the line within a text.
    pub fn key(&self) -> String {
        format!("{}⁝{}", self.kind_name(), self.atf())
    }

    pub fn merge(&self, other: &Line) -> Line {
        self.merge_with(other, DiffAlgorithm::default())
    }

    /// Text lines merge token by token; any other pair is replaced by `other`.
    pub fn merge_with(&self, other: &Line, algorithm: DiffAlgorithm) -> Line {
        match (self, other) {
            (Line::TextLine(old), Line::TextLine(new)) => {
                Line::TextLine(old.merge_with(new, algorithm))
            }
            _ => other.clone(),
        }
    }

    pub fn lemmatization(&self) -> Vec<LemmatizationToken> {
        match self {
            Line::TextLine(line) => line.lemmatization(),
            _ => Vec::new(),
        }
    }

    pub fn update_lemmatization(
        &self,
        row: &[LemmatizationToken],
    ) -> Result<Line, LemmatizationError> {
        match self {
            Line::TextLine(line) => line.update_lemmatization(row).map(Line::TextLine),
            _ if row.is_empty() => Ok(self.clone()),
            _ => Err(LemmatizationError::LengthMismatch {
                expected: 0,
                actual: row.len(),
            }),
        }
    }

    pub fn alignment(&self) -> Vec<AlignmentToken> {
        match self {
            Line::TextLine(line) => line.alignment(),
            _ => Vec::new(),
        }
    }

    pub fn update_alignment(&self, row: &[AlignmentToken]) -> Result<Line, AlignmentError> {
        match self {
            Line::TextLine(line) => line.update_alignment(row).map(Line::TextLine),
            _ if row.is_empty() => Ok(self.clone()),
            _ => Err(AlignmentError::LengthMismatch {
                expected: 0,
                actual: row.len(),
            }),
        }
    }
}
