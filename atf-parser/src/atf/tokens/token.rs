//! The closed set of token kinds

use serde::Deserialize;

use super::enclosures::{ErasureSide, Omission, Side};
use super::language::LanguageShift;
use super::signs::{flags_to_string, CompoundGrapheme, Divider, Flag, JoinerKind, NamedSign, NumberSign};
use super::word::Word;
use crate::atf::annotations::{AlignmentToken, LemmatizationToken};
use crate::atf::error::{AlignmentError, LemmatizationError};

/// A token of text-line content.
///
/// The dict form is internally tagged by `type`; see [repr](super::repr) for the dumped shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "type")]
pub enum Token {
    /// Opaque literal, used for control-line and dollar-line content.
    ValueToken { value: String },
    Reading(NamedSign),
    Logogram(NamedSign),
    Number(NumberSign),
    CompoundGrapheme(CompoundGrapheme),
    UnclearSign {
        #[serde(default)]
        flags: Vec<Flag>,
    },
    UnidentifiedSign {
        #[serde(default)]
        flags: Vec<Flag>,
    },
    UnknownNumberOfSigns,
    /// Alternative readings of one sign: `ku/ka`.
    Variant { tokens: Vec<Token> },
    Joiner { joiner: JoinerKind },
    InWordNewline,
    Determinative { parts: Vec<Token> },
    PhoneticGloss { parts: Vec<Token> },
    LinguisticGloss { parts: Vec<Token> },
    Divider(Divider),
    Column {
        #[serde(default)]
        number: Option<u32>,
    },
    Tabulation,
    CommentaryProtocol { value: String },
    LineContinuation,
    LanguageShift(LanguageShift),
    BrokenAway { side: Side },
    PerhapsBrokenAway { side: Side },
    OmissionOrRemoval { omission: Omission, side: Side },
    DocumentOrientedGloss { side: Side },
    Erasure { side: ErasureSide },
    Word(Word),
    /// A word consisting of a single determinative: `{d}`.
    LoneDeterminative(Word),
}

impl Token {
    pub const COMMENTARY_PROTOCOLS: [&'static str; 4] = ["!qt", "!bs", "!cm", "!zz"];

    pub fn value_token(value: impl Into<String>) -> Token {
        Token::ValueToken {
            value: value.into(),
        }
    }

    pub fn joiner(joiner: JoinerKind) -> Token {
        Token::Joiner { joiner }
    }

    pub fn broken_away(side: Side) -> Token {
        Token::BrokenAway { side }
    }

    pub fn perhaps_broken_away(side: Side) -> Token {
        Token::PerhapsBrokenAway { side }
    }

    pub fn omission(omission: Omission, side: Side) -> Token {
        Token::OmissionOrRemoval { omission, side }
    }

    pub fn document_oriented_gloss(side: Side) -> Token {
        Token::DocumentOrientedGloss { side }
    }

    pub fn erasure(side: ErasureSide) -> Token {
        Token::Erasure { side }
    }

    /// Name of the kind, as used in the dict form and in diff keys.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::ValueToken { .. } => "ValueToken",
            Token::Reading(_) => "Reading",
            Token::Logogram(_) => "Logogram",
            Token::Number(_) => "Number",
            Token::CompoundGrapheme(_) => "CompoundGrapheme",
            Token::UnclearSign { .. } => "UnclearSign",
            Token::UnidentifiedSign { .. } => "UnidentifiedSign",
            Token::UnknownNumberOfSigns => "UnknownNumberOfSigns",
            Token::Variant { .. } => "Variant",
            Token::Joiner { .. } => "Joiner",
            Token::InWordNewline => "InWordNewline",
            Token::Determinative { .. } => "Determinative",
            Token::PhoneticGloss { .. } => "PhoneticGloss",
            Token::LinguisticGloss { .. } => "LinguisticGloss",
            Token::Divider(_) => "Divider",
            Token::Column { .. } => "Column",
            Token::Tabulation => "Tabulation",
            Token::CommentaryProtocol { .. } => "CommentaryProtocol",
            Token::LineContinuation => "LineContinuation",
            Token::LanguageShift(_) => "LanguageShift",
            Token::BrokenAway { .. } => "BrokenAway",
            Token::PerhapsBrokenAway { .. } => "PerhapsBrokenAway",
            Token::OmissionOrRemoval { .. } => "OmissionOrRemoval",
            Token::DocumentOrientedGloss { .. } => "DocumentOrientedGloss",
            Token::Erasure { .. } => "Erasure",
            Token::Word(_) => "Word",
            Token::LoneDeterminative(_) => "LoneDeterminative",
        }
    }

    /// The raw textual form.
    pub fn value(&self) -> String {
        match self {
            Token::ValueToken { value } => value.clone(),
            Token::Reading(sign) | Token::Logogram(sign) => sign.value(),
            Token::Number(number) => number.value(),
            Token::CompoundGrapheme(compound) => compound.value(),
            Token::UnclearSign { flags } => format!("x{}", flags_to_string(flags)),
            Token::UnidentifiedSign { flags } => format!("X{}", flags_to_string(flags)),
            Token::UnknownNumberOfSigns => "...".to_string(),
            Token::Variant { tokens } => join_values(tokens, "/", Token::value),
            Token::Joiner { joiner } => joiner.as_str().to_string(),
            Token::InWordNewline => ";".to_string(),
            Token::Determinative { parts } => format!("{{{}}}", join_values(parts, "", Token::value)),
            Token::PhoneticGloss { parts } => format!("{{+{}}}", join_values(parts, "", Token::value)),
            Token::LinguisticGloss { parts } => {
                format!("{{{{{}}}}}", join_values(parts, "", Token::value))
            }
            Token::Divider(divider) => divider.value(),
            Token::Column { number } => match number {
                Some(number) => format!("&{}", number),
                None => "&".to_string(),
            },
            Token::Tabulation => "($___$)".to_string(),
            Token::CommentaryProtocol { value } => value.clone(),
            Token::LineContinuation => "→".to_string(),
            Token::LanguageShift(shift) => shift.value.clone(),
            Token::BrokenAway { side } => side.pick("[", "]").to_string(),
            Token::PerhapsBrokenAway { side } => side.pick("(", ")").to_string(),
            Token::OmissionOrRemoval { omission, side } => omission.marker(*side).to_string(),
            Token::DocumentOrientedGloss { side } => side.pick("{(", ")}").to_string(),
            Token::Erasure { side } => side.as_str().to_string(),
            Token::Word(word) | Token::LoneDeterminative(word) => word.value(),
        }
    }

    /// The textual form without flags and enclosure markers.
    pub fn clean_value(&self) -> String {
        match self {
            Token::Reading(sign) | Token::Logogram(sign) => sign.clean_value(),
            Token::Number(number) => number.clean_value(),
            Token::CompoundGrapheme(compound) => compound.clean_value(),
            Token::UnclearSign { .. } => "x".to_string(),
            Token::UnidentifiedSign { .. } => "X".to_string(),
            Token::Variant { tokens } => join_values(tokens, "/", Token::clean_value),
            Token::Determinative { parts } => {
                format!("{{{}}}", join_values(parts, "", Token::clean_value))
            }
            Token::PhoneticGloss { parts } => {
                format!("{{+{}}}", join_values(parts, "", Token::clean_value))
            }
            Token::LinguisticGloss { parts } => {
                format!("{{{{{}}}}}", join_values(parts, "", Token::clean_value))
            }
            Token::Divider(divider) => divider.clean_value(),
            Token::Word(word) | Token::LoneDeterminative(word) => word.clean_value(),
            token if token.is_enclosure() => String::new(),
            token => token.value(),
        }
    }

    /// Key used to diff token sequences: the kind and the clean value, so a flag or bracket edit
    /// still lines up with the old token. Words add the context that is not visible in their
    /// value. Enclosures have no clean value and keep their marker.
    pub fn get_key(&self) -> String {
        match self {
            Token::Word(word) | Token::LoneDeterminative(word) => format!(
                "{}⁝{}⁝{:?}⁝{}⁝{:?}",
                self.kind_name(),
                word.clean_value(),
                word.language(),
                word.normalized(),
                word.erasure()
            ),
            token if token.is_enclosure() => format!("{}⁝{}", self.kind_name(), self.value()),
            _ => format!("{}⁝{}", self.kind_name(), self.clean_value()),
        }
    }

    pub fn is_enclosure(&self) -> bool {
        matches!(
            self,
            Token::BrokenAway { .. }
                | Token::PerhapsBrokenAway { .. }
                | Token::OmissionOrRemoval { .. }
                | Token::DocumentOrientedGloss { .. }
                | Token::Erasure { .. }
        )
    }

    /// Words and lone determinatives.
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_) | Token::LoneDeterminative(_))
    }

    pub fn is_joiner(&self) -> bool {
        matches!(self, Token::Joiner { .. } | Token::InWordNewline)
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Token::Word(word) | Token::LoneDeterminative(word) => Some(word),
            _ => None,
        }
    }

    /// Tokens nested inside this one (word parts, determinative parts, variant alternatives).
    pub fn children(&self) -> &[Token] {
        match self {
            Token::Word(word) | Token::LoneDeterminative(word) => word.parts(),
            Token::Determinative { parts }
            | Token::PhoneticGloss { parts }
            | Token::LinguisticGloss { parts } => parts,
            Token::Variant { tokens } => tokens,
            _ => &[],
        }
    }

    pub fn lemmatizable(&self) -> bool {
        match self {
            Token::Word(word) => word.lemmatizable(),
            _ => false,
        }
    }

    pub fn alignable(&self) -> bool {
        match self {
            Token::Word(word) => word.alignable(),
            _ => false,
        }
    }

    pub fn unique_lemma(&self) -> &[String] {
        match self {
            Token::Word(word) | Token::LoneDeterminative(word) => word.unique_lemma(),
            _ => &[],
        }
    }

    pub fn alignment(&self) -> Option<usize> {
        self.as_word().and_then(Word::alignment)
    }

    /// Assign a lemma. The value must match, and only lemmatizable words accept a non-empty lemma.
    pub fn set_unique_lemma(&self, lemma: &LemmatizationToken) -> Result<Token, LemmatizationError> {
        let value = self.value();
        if lemma.value != value {
            return Err(LemmatizationError::ValueMismatch {
                expected: value,
                actual: lemma.value.clone(),
            });
        }
        match self {
            Token::Word(word) if word.lemmatizable() || !lemma.has_lemma() => Ok(Token::Word(
                word.clone()
                    .with_unique_lemma(lemma.unique_lemma.clone().unwrap_or_default()),
            )),
            _ if !lemma.has_lemma() => Ok(self.clone()),
            _ => Err(LemmatizationError::NotLemmatizable { value }),
        }
    }

    /// Assign an alignment index. The value must match, and only alignable words accept an index.
    pub fn set_alignment(&self, alignment: &AlignmentToken) -> Result<Token, AlignmentError> {
        let value = self.value();
        if alignment.value != value {
            return Err(AlignmentError::ValueMismatch {
                expected: value,
                actual: alignment.value.clone(),
            });
        }
        match self {
            Token::Word(word) if word.alignable() || alignment.alignment.is_none() => {
                Ok(Token::Word(word.clone().with_alignment(alignment.alignment)))
            }
            _ if alignment.alignment.is_none() => Ok(self.clone()),
            _ => Err(AlignmentError::NotAlignable { value }),
        }
    }

    /// Reconcile an edited token with the token it replaces.
    ///
    /// When both are words with the same clean value, the lemma and alignment of `self` carry
    /// over to `other`. Anything else means the content changed and `other` wins unchanged.
    pub fn merge(&self, other: &Token) -> Token {
        match (self, other) {
            (Token::Word(old), Token::Word(new)) if old.clean_value() == new.clean_value() => {
                Token::Word(new.clone().with_annotations_from(old))
            }
            _ => other.clone(),
        }
    }
}

fn join_values(tokens: &[Token], separator: &str, value: fn(&Token) -> String) -> String {
    tokens.iter().map(value).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::testing::factories::{reading, word};

    #[test]
    fn test_enclosure_values() {
        assert_eq!(Token::broken_away(Side::Left).value(), "[");
        assert_eq!(Token::perhaps_broken_away(Side::Right).value(), ")");
        assert_eq!(Token::omission(Omission::Intentional, Side::Left).value(), "<(");
        assert_eq!(Token::omission(Omission::Removal, Side::Right).value(), ">>");
        assert_eq!(Token::document_oriented_gloss(Side::Left).value(), "{(");
        assert_eq!(Token::erasure(ErasureSide::Center).value(), "\\");
    }

    #[test]
    fn test_clean_value_drops_flags_and_enclosures() {
        let damaged = Token::Reading(NamedSign::new("ku").with_flags(vec![Flag::Damage]));
        let token = word(vec![
            Token::broken_away(Side::Left),
            damaged,
            Token::joiner(JoinerKind::Hyphen),
            reading("nu"),
            Token::broken_away(Side::Right),
        ]);
        assert_eq!(token.value(), "[ku#-nu]");
        assert_eq!(token.clean_value(), "ku-nu");
    }

    #[test]
    fn test_determinative_value() {
        let token = Token::Determinative {
            parts: vec![reading("d")],
        };
        assert_eq!(token.value(), "{d}");
        let gloss = Token::PhoneticGloss {
            parts: vec![reading("ia")],
        };
        assert_eq!(gloss.value(), "{+ia}");
        let linguistic = Token::LinguisticGloss {
            parts: vec![reading("ia")],
        };
        assert_eq!(linguistic.value(), "{{ia}}");
    }

    #[test]
    fn test_non_word_accepts_only_empty_lemma() {
        let divider = Token::Divider(Divider::new(":"));
        assert_eq!(
            divider.set_unique_lemma(&LemmatizationToken::bare(":")),
            Ok(divider.clone())
        );
        assert_eq!(
            divider.set_unique_lemma(&LemmatizationToken::new(":", Some(vec![]))),
            Ok(divider.clone())
        );
        assert!(matches!(
            divider.set_unique_lemma(&LemmatizationToken::new(":", Some(vec!["L".into()]))),
            Err(LemmatizationError::NotLemmatizable { .. })
        ));
    }

    #[test]
    fn test_set_unique_lemma_requires_matching_value() {
        let token = word(vec![reading("kur")]);
        let error = token
            .set_unique_lemma(&LemmatizationToken::new("mu", Some(vec!["L".into()])))
            .unwrap_err();
        assert_eq!(
            error,
            LemmatizationError::ValueMismatch {
                expected: "kur".to_string(),
                actual: "mu".to_string()
            }
        );
    }

    #[test]
    fn test_set_unique_lemma_on_word() {
        let token = word(vec![reading("kur")]);
        let lemmatized = token
            .set_unique_lemma(&LemmatizationToken::new("kur", Some(vec!["šadû I".into()])))
            .unwrap();
        assert_eq!(lemmatized.unique_lemma(), ["šadû I".to_string()]);
        // the input is untouched
        assert!(token.unique_lemma().is_empty());
    }

    #[test]
    fn test_set_alignment() {
        let token = word(vec![reading("kur")]);
        let aligned = token
            .set_alignment(&AlignmentToken::new("kur", Some(3)))
            .unwrap();
        assert_eq!(aligned.alignment(), Some(3));

        let column = Token::Column { number: Some(2) };
        assert_eq!(
            column.set_alignment(&AlignmentToken::new("&2", None)),
            Ok(column.clone())
        );
        assert!(matches!(
            column.set_alignment(&AlignmentToken::new("&2", Some(1))),
            Err(AlignmentError::NotAlignable { .. })
        ));
        assert!(matches!(
            token.set_alignment(&AlignmentToken::new("mu", None)),
            Err(AlignmentError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn test_merge_carries_annotations_when_clean_value_is_unchanged() {
        let old = word(vec![reading("kur")])
            .set_unique_lemma(&LemmatizationToken::new("kur", Some(vec!["L".into()])))
            .unwrap()
            .set_alignment(&AlignmentToken::new("kur", Some(1)))
            .unwrap();
        let damaged = word(vec![Token::Reading(
            NamedSign::new("kur").with_flags(vec![Flag::Damage]),
        )]);
        let merged = old.merge(&damaged);
        assert_eq!(merged.value(), "kur#");
        assert_eq!(merged.unique_lemma(), ["L".to_string()]);
        assert_eq!(merged.alignment(), Some(1));
    }

    #[test]
    fn test_merge_drops_annotations_when_content_changed() {
        let old = word(vec![reading("kur")])
            .set_unique_lemma(&LemmatizationToken::new("kur", Some(vec!["L".into()])))
            .unwrap();
        let new = word(vec![reading("mu")]);
        assert_eq!(old.merge(&new), new);
        let divider = Token::Divider(Divider::new("|"));
        assert_eq!(old.merge(&divider), divider);
    }
}
