//! Text loading utilities
//!
//! `TextLoader` reads transliteration source from a file or a string and parses it, either with
//! the shared default parser or with one configured by the caller.
//!
//! # Example
//!
//! ```rust
//! use atf_parser::atf::loader::TextLoader;
//!
//! // From file
//! let text = TextLoader::from_path("tablet.atf").unwrap().parse().unwrap();
//!
//! // From string
//! let text = TextLoader::from_string("1. kur\n").parse().unwrap();
//! ```

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::atf::error::TransliterationError;
use crate::atf::parsing::{AtfParser, DEFAULT_PARSER};
use crate::atf::text::Text;

/// Error that can occur when loading texts
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Transliteration(#[from] TransliterationError),
}

pub struct TextLoader {
    source: String,
}

impl TextLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(TextLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        TextLoader {
            source: source.into(),
        }
    }

    /// Parse with the shared default parser.
    pub fn parse(&self) -> Result<Text, LoaderError> {
        self.parse_with(&DEFAULT_PARSER)
    }

    pub fn parse_with(&self, parser: &AtfParser) -> Result<Text, LoaderError> {
        Ok(parser.parse(&self.source)?)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::parsing::ParserOptions;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = TextLoader::from_string("1. kur\n");
        assert_eq!(loader.source(), "1. kur\n");
        assert_eq!(loader.parse().unwrap().atf(), "1. kur");
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("atf-loader-{}.atf", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "&P000001 = Tablet\n1. kur").unwrap();
        let text = TextLoader::from_path(&path).unwrap().parse().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let error = TextLoader::from_path("does/not/exist.atf").err().unwrap();
        assert!(matches!(error, LoaderError::Io(_)));
    }

    #[test]
    fn test_parse_errors_surface() {
        let parser = AtfParser::new(ParserOptions { error_context: 5 });
        let error = TextLoader::from_string("1. kur\nbroken")
            .parse_with(&parser)
            .unwrap_err();
        match error {
            LoaderError::Transliteration(error) => assert_eq!(error.errors[0].line_number, 2),
            other => panic!("expected a transliteration error, got {}", other),
        }
    }
}
