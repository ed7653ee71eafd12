//! Error types
//!
//!     Two families of errors leave this crate:
//!
//!         Transliteration errors:
//!             Syntax and enclosure errors found while parsing. The parser never stops at the
//!             first broken line; it collects one [`ErrorAnnotation`] per broken line and raises
//!             a single [`TransliterationError`] carrying all of them.
//!
//!         Annotation errors:
//!             [`LemmatizationError`] and [`AlignmentError`] are raised immediately by the
//!             annotation updates when an annotation does not fit the token it targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One broken line, with a caret pointing at the failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorAnnotation {
    pub description: String,
    /// 1-based physical line number.
    pub line_number: usize,
}

impl ErrorAnnotation {
    pub fn new(description: impl Into<String>, line_number: usize) -> Self {
        ErrorAnnotation {
            description: description.into(),
            line_number,
        }
    }
}

impl fmt::Display for ErrorAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "line {}:", self.line_number)?;
        for line in self.description.lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}

/// All errors found in one parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transliteration: {} error(s) on line(s) {}", .errors.len(), line_list(.errors))]
pub struct TransliterationError {
    pub errors: Vec<ErrorAnnotation>,
}

impl TransliterationError {
    pub fn new(errors: Vec<ErrorAnnotation>) -> Self {
        TransliterationError { errors }
    }

    /// Multi-line listing of every annotation, for terminals.
    pub fn report(&self) -> String {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

fn line_list(errors: &[ErrorAnnotation]) -> String {
    errors
        .iter()
        .map(|e| e.line_number.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LemmatizationError {
    #[error("lemmatization value {actual:?} does not match token {expected:?}")]
    ValueMismatch { expected: String, actual: String },
    #[error("token {value:?} cannot be lemmatized")]
    NotLemmatizable { value: String },
    #[error("lemmatization has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("alignment value {actual:?} does not match token {expected:?}")]
    ValueMismatch { expected: String, actual: String },
    #[error("token {value:?} cannot be aligned")]
    NotAlignable { value: String },
    #[error("alignment has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliteration_error_lists_every_line() {
        let error = TransliterationError::new(vec![
            ErrorAnnotation::new("Invalid line.", 2),
            ErrorAnnotation::new("Invalid brackets.", 5),
        ]);
        assert_eq!(
            error.to_string(),
            "invalid transliteration: 2 error(s) on line(s) 2, 5"
        );
        let report = error.report();
        assert!(report.contains("line 2:"));
        assert!(report.contains("    Invalid brackets."));
    }
}
