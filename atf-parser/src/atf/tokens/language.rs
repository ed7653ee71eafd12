//! Languages and language shifts
//!
//!     A `%code` token switches the language of every following word on the same line. The
//!     language and the normalized flag are derived from the code and never stored.

use serde::{Deserialize, Serialize};

const AKKADIAN_CODES: &[&str] = &[
    "akk", "a", "ma", "mb", "na", "nb", "lb", "sb", "oa", "ob", "oakk", "eakk", "ur3akk",
];
const SUMERIAN_CODES: &[&str] = &["sux", "s", "eg"];
const EMESAL_CODES: &[&str] = &["es", "e"];
const NORMALIZED_CODE: &str = "n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    Akkadian,
    Sumerian,
    Emesal,
    Unknown,
}

impl Language {
    /// Only Akkadian words can be lemmatized.
    pub fn lemmatizable(&self) -> bool {
        matches!(self, Language::Akkadian)
    }

    /// Code used by note-line language parts (`@akk{...}`).
    pub fn note_code(&self) -> Option<&'static str> {
        match self {
            Language::Akkadian => Some("akk"),
            Language::Sumerian => Some("sux"),
            Language::Emesal => Some("es"),
            Language::Unknown => None,
        }
    }

    pub fn from_note_code(code: &str) -> Option<Language> {
        match code {
            "akk" => Some(Language::Akkadian),
            "sux" => Some(Language::Sumerian),
            "es" => Some(Language::Emesal),
            _ => None,
        }
    }
}

/// `%sux`, `%akk`, `%n`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageShift {
    /// The full textual form, including the `%`.
    pub value: String,
}

impl LanguageShift {
    pub fn new(value: impl Into<String>) -> Self {
        LanguageShift {
            value: value.into(),
        }
    }

    fn code(&self) -> &str {
        self.value.trim_start_matches('%')
    }

    pub fn language(&self) -> Language {
        let code = self.code();
        if code == NORMALIZED_CODE || AKKADIAN_CODES.contains(&code) {
            Language::Akkadian
        } else if SUMERIAN_CODES.contains(&code) {
            Language::Sumerian
        } else if EMESAL_CODES.contains(&code) {
            Language::Emesal
        } else {
            Language::Unknown
        }
    }

    pub fn normalized(&self) -> bool {
        self.code() == NORMALIZED_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("%akk", Language::Akkadian, false)]
    #[case("%sb", Language::Akkadian, false)]
    #[case("%n", Language::Akkadian, true)]
    #[case("%sux", Language::Sumerian, false)]
    #[case("%eg", Language::Sumerian, false)]
    #[case("%es", Language::Emesal, false)]
    #[case("%foo", Language::Unknown, false)]
    fn test_language_shift_resolution(
        #[case] value: &str,
        #[case] language: Language,
        #[case] normalized: bool,
    ) {
        let shift = LanguageShift::new(value);
        assert_eq!(shift.language(), language);
        assert_eq!(shift.normalized(), normalized);
    }

    #[test]
    fn test_only_akkadian_is_lemmatizable() {
        assert!(Language::Akkadian.lemmatizable());
        assert!(!Language::Sumerian.lemmatizable());
        assert!(!Language::Emesal.lemmatizable());
        assert!(!Language::Unknown.lemmatizable());
    }
}
