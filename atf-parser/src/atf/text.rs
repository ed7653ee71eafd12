//! Text aggregate
//!
//!     A [`Text`] is the parsed form of one transliteration: its lines in order plus the version
//!     of the parser that produced them. Texts are values; every update returns a new text.

use serde::{Deserialize, Serialize};

use crate::atf::annotations::{Alignment, Lemmatization};
use crate::atf::error::{AlignmentError, LemmatizationError};
use crate::atf::formats::atf::ToAtf;
use crate::atf::lines::Line;
use crate::atf::merging::{self, DiffAlgorithm};
use crate::atf::ATF_PARSER_VERSION;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    lines: Vec<Line>,
    parser_version: String,
}

impl Text {
    pub fn new(lines: Vec<Line>) -> Self {
        Self::with_version(lines, ATF_PARSER_VERSION)
    }

    pub fn with_version(lines: Vec<Line>, parser_version: impl Into<String>) -> Self {
        Text {
            lines,
            parser_version: parser_version.into(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn parser_version(&self) -> &str {
        &self.parser_version
    }

    pub fn atf(&self) -> String {
        self.to_atf()
    }

    /// Merge an edited re-parse into this text. Unchanged lines keep their annotations and text
    /// lines that changed are merged token by token. The parser version comes from `other`.
    pub fn merge(&self, other: &Text) -> Text {
        self.merge_with(other, DiffAlgorithm::default())
    }

    pub fn merge_with(&self, other: &Text, algorithm: DiffAlgorithm) -> Text {
        let lines = merging::merge(
            &self.lines,
            &other.lines,
            Line::key,
            |old, new| old.merge_with(new, algorithm),
            algorithm,
        );
        tracing::debug!(
            old = self.lines.len(),
            new = other.lines.len(),
            ?algorithm,
            "merged texts"
        );
        Text::with_version(lines, other.parser_version.clone())
    }

    pub fn lemmatization(&self) -> Lemmatization {
        self.lines.iter().map(Line::lemmatization).collect()
    }

    pub fn update_lemmatization(
        &self,
        lemmatization: &Lemmatization,
    ) -> Result<Text, LemmatizationError> {
        if lemmatization.len() != self.lines.len() {
            return Err(LemmatizationError::LengthMismatch {
                expected: self.lines.len(),
                actual: lemmatization.len(),
            });
        }
        let lines = self
            .lines
            .iter()
            .zip(lemmatization)
            .map(|(line, row)| line.update_lemmatization(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Text::with_version(lines, self.parser_version.clone()))
    }

    pub fn alignment(&self) -> Alignment {
        self.lines.iter().map(Line::alignment).collect()
    }

    pub fn update_alignment(&self, alignment: &Alignment) -> Result<Text, AlignmentError> {
        if alignment.len() != self.lines.len() {
            return Err(AlignmentError::LengthMismatch {
                expected: self.lines.len(),
                actual: alignment.len(),
            });
        }
        let lines = self
            .lines
            .iter()
            .zip(alignment)
            .map(|(line, row)| line.update_alignment(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Text::with_version(lines, self.parser_version.clone()))
    }
}
