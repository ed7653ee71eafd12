//! Words
//!
//!     A word is the unit that receives philological annotation. Its parts are the signs,
//!     joiners, determinatives and word-internal enclosure markers in source order; its value is
//!     the concatenation of their values.
//!
//!     The context a word was read in (language, normalized transliteration, erasure state) is not
//!     visible in its value and is stamped on by the parser after the line is tokenized.

use serde::{Deserialize, Serialize};

use super::language::Language;
use super::token::Token;

/// Where a word sits relative to an erasure: `°erased\over-erased°`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErasureState {
    #[default]
    None,
    Erased,
    OverErased,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    parts: Vec<Token>,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    normalized: bool,
    #[serde(default)]
    erasure: ErasureState,
    #[serde(default)]
    unique_lemma: Vec<String>,
    #[serde(default)]
    alignment: Option<usize>,
}

impl Word {
    pub fn new(parts: Vec<Token>) -> Self {
        Word {
            parts,
            language: Language::default(),
            normalized: false,
            erasure: ErasureState::None,
            unique_lemma: Vec::new(),
            alignment: None,
        }
    }

    pub fn with_language(mut self, language: Language, normalized: bool) -> Self {
        self.language = language;
        self.normalized = normalized;
        self
    }

    pub fn with_erasure(mut self, erasure: ErasureState) -> Self {
        self.erasure = erasure;
        self
    }

    pub fn with_unique_lemma(mut self, unique_lemma: Vec<String>) -> Self {
        self.unique_lemma = unique_lemma;
        self
    }

    pub fn with_alignment(mut self, alignment: Option<usize>) -> Self {
        self.alignment = alignment;
        self
    }

    /// Carry the lemma and alignment of `old` onto this word, as far as this word accepts them.
    pub fn with_annotations_from(mut self, old: &Word) -> Self {
        if self.lemmatizable() {
            self.unique_lemma = old.unique_lemma.clone();
        }
        if self.alignable() {
            self.alignment = old.alignment;
        }
        self
    }

    pub fn parts(&self) -> &[Token] {
        &self.parts
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn erasure(&self) -> ErasureState {
        self.erasure
    }

    pub fn unique_lemma(&self) -> &[String] {
        &self.unique_lemma
    }

    pub fn alignment(&self) -> Option<usize> {
        self.alignment
    }

    pub fn value(&self) -> String {
        self.parts.iter().map(Token::value).collect()
    }

    pub fn clean_value(&self) -> String {
        self.parts.iter().map(Token::clean_value).collect()
    }

    /// A word is partial when it begins or ends with a joiner, as happens next to a gloss or an
    /// erasure that splits it.
    pub fn partial(&self) -> (bool, bool) {
        let mut material = self.parts.iter().filter(|part| !part.is_enclosure());
        let starts = material.next().is_some_and(Token::is_joiner);
        let ends = self
            .parts
            .iter()
            .rev()
            .find(|part| !part.is_enclosure())
            .is_some_and(Token::is_joiner);
        (starts, ends)
    }

    pub fn is_partial(&self) -> bool {
        let (starts, ends) = self.partial();
        starts || ends
    }

    pub fn lemmatizable(&self) -> bool {
        if self.erasure == ErasureState::Erased || self.is_partial() {
            return false;
        }
        if self.normalized {
            return true;
        }
        self.language.lemmatizable() && self.parts.iter().all(is_lemmatizable_material)
    }

    pub fn alignable(&self) -> bool {
        self.lemmatizable()
    }
}

/// Unreadable or ambiguous material makes the whole word unreadable for lemmatization.
fn is_lemmatizable_material(token: &Token) -> bool {
    match token {
        Token::UnclearSign { .. }
        | Token::UnidentifiedSign { .. }
        | Token::Variant { .. }
        | Token::UnknownNumberOfSigns => false,
        token => token.children().iter().all(is_lemmatizable_material),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::testing::factories::{determinative, reading, word_with};
    use crate::atf::tokens::{JoinerKind, Side};

    fn hyphen() -> Token {
        Token::joiner(JoinerKind::Hyphen)
    }

    #[test]
    fn test_value_concatenates_parts() {
        let word = Word::new(vec![
            determinative(vec![reading("d")]),
            reading("utu"),
            hyphen(),
            reading("ma"),
        ]);
        assert_eq!(word.value(), "{d}utu-ma");
    }

    #[test]
    fn test_akkadian_word_is_lemmatizable() {
        assert!(Word::new(vec![reading("ku"), hyphen(), reading("nu")]).lemmatizable());
    }

    #[test]
    fn test_sumerian_word_is_not_lemmatizable() {
        let word = Word::new(vec![reading("lugal")]).with_language(Language::Sumerian, false);
        assert!(!word.lemmatizable());
        assert!(!word.alignable());
    }

    #[test]
    fn test_normalized_word_is_lemmatizable() {
        let word = Word::new(vec![reading("šarrum")]).with_language(Language::Akkadian, true);
        assert!(word.lemmatizable());
    }

    #[test]
    fn test_erased_word_is_not_lemmatizable() {
        let word = Word::new(vec![reading("ku")]);
        assert!(!word.clone().with_erasure(ErasureState::Erased).lemmatizable());
        assert!(word.with_erasure(ErasureState::OverErased).lemmatizable());
    }

    #[test]
    fn test_partial_word_is_not_lemmatizable() {
        let word = Word::new(vec![reading("ku"), hyphen()]);
        assert_eq!(word.partial(), (false, true));
        assert!(!word.lemmatizable());
    }

    #[test]
    fn test_enclosures_do_not_hide_partial_word() {
        let word = Word::new(vec![
            hyphen(),
            Token::broken_away(Side::Left),
            reading("ku"),
            Token::broken_away(Side::Right),
        ]);
        assert_eq!(word.partial(), (true, false));
    }

    #[test]
    fn test_unreadable_material_is_not_lemmatizable() {
        let unclear = word_with(vec![
            reading("ku"),
            hyphen(),
            Token::UnclearSign { flags: vec![] },
        ]);
        assert!(!unclear.lemmatizable());
        let variant = word_with(vec![Token::Variant {
            tokens: vec![reading("ku"), reading("ka")],
        }]);
        assert!(!variant.lemmatizable());
        let nested = word_with(vec![
            determinative(vec![Token::UnidentifiedSign { flags: vec![] }]),
            reading("ku"),
        ]);
        assert!(!nested.lemmatizable());
    }

    #[test]
    fn test_annotations_carry_only_where_accepted() {
        let old = Word::new(vec![reading("ku")])
            .with_unique_lemma(vec!["L".to_string()])
            .with_alignment(Some(2));
        let sumerian = Word::new(vec![reading("ku")]).with_language(Language::Sumerian, false);
        let merged = sumerian.with_annotations_from(&old);
        assert!(merged.unique_lemma().is_empty());
        assert_eq!(merged.alignment(), None);
    }
}
