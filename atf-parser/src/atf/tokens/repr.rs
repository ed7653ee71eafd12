//! Dict form of tokens
//!
//!     Every dumped token carries its `type` and its derived `value`. Words also carry the derived
//!     `lemmatizable` flag, language shifts their resolved `language` and `normalized` flag. Derived keys are ignored when loading, the structure alone is the
//!     source of truth.

use serde::{Serialize, Serializer};

use super::enclosures::{ErasureSide, Omission, Side};
use super::language::Language;
use super::signs::{CompoundGrapheme, Divider, Flag, JoinerKind, NamedSign, NumberSign};
use super::token::Token;
use super::word::Word;

#[derive(Serialize)]
struct Tagged<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: String,
    #[serde(flatten)]
    body: Body<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lemmatizable: Option<bool>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Body<'a> {
    Named(&'a NamedSign),
    Number(&'a NumberSign),
    Compound(&'a CompoundGrapheme),
    Divider(&'a Divider),
    Word(&'a Word),
    Flags { flags: &'a [Flag] },
    Tokens { tokens: &'a [Token] },
    Parts { parts: &'a [Token] },
    Joiner { joiner: JoinerKind },
    Column { number: Option<u32> },
    Side { side: Side },
    Omission { omission: Omission, side: Side },
    Erasure { side: ErasureSide },
    Shift { language: Language, normalized: bool },
    Bare,
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Token::Reading(sign) | Token::Logogram(sign) => Body::Named(sign),
            Token::Number(number) => Body::Number(number),
            Token::CompoundGrapheme(compound) => Body::Compound(compound),
            Token::Divider(divider) => Body::Divider(divider),
            Token::Word(word) | Token::LoneDeterminative(word) => Body::Word(word),
            Token::UnclearSign { flags } | Token::UnidentifiedSign { flags } => {
                Body::Flags { flags }
            }
            Token::Variant { tokens } => Body::Tokens { tokens },
            Token::Determinative { parts }
            | Token::PhoneticGloss { parts }
            | Token::LinguisticGloss { parts } => Body::Parts { parts },
            Token::Joiner { joiner } => Body::Joiner { joiner: *joiner },
            Token::Column { number } => Body::Column { number: *number },
            Token::BrokenAway { side }
            | Token::PerhapsBrokenAway { side }
            | Token::DocumentOrientedGloss { side } => Body::Side { side: *side },
            Token::OmissionOrRemoval { omission, side } => Body::Omission {
                omission: *omission,
                side: *side,
            },
            Token::Erasure { side } => Body::Erasure { side: *side },
            Token::LanguageShift(shift) => Body::Shift {
                language: shift.language(),
                normalized: shift.normalized(),
            },
            // the value is the whole content of these
            Token::ValueToken { .. }
            | Token::CommentaryProtocol { .. }
            | Token::UnknownNumberOfSigns
            | Token::InWordNewline
            | Token::Tabulation
            | Token::LineContinuation => Body::Bare,
        };
        Tagged {
            kind: self.kind_name(),
            value: self.value(),
            body,
            lemmatizable: self.is_word().then(|| self.lemmatizable()),
        }
        .serialize(serializer)
    }
}
