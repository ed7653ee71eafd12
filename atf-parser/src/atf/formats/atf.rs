//! Canonical atf serialization
//!
//!     Projects tokens, lines and texts back to text. The output reparses to the same structure;
//!     runs of whitespace collapse to a single space and trailing empty lines are lost.
//!
//! Separators
//!
//!     Top-level tokens are separated by one space, except where the space would change how the
//!     line is read back:
//!
//!         - A language shift is always surrounded by spaces.
//!         - A word dangling a joiner toward its neighbour touches it (`ku-°nu\ra°`).
//!         - Nothing follows an opening marker and nothing precedes a closing one (`[...]`,
//!           `{(he-pi₂)}`), unless the marker is a bracket and the neighbour is a word: `[ ku`
//!           written without the space would put the bracket inside the word.

use crate::atf::lines::{Line, NoteLine};
use crate::atf::text::Text;
use crate::atf::tokens::{ErasureSide, Side, Token};

/// Serialization to canonical atf.
pub trait ToAtf {
    fn to_atf(&self) -> String;
}

impl ToAtf for Token {
    fn to_atf(&self) -> String {
        self.value()
    }
}

impl ToAtf for [Token] {
    fn to_atf(&self) -> String {
        let mut atf = String::new();
        for (index, token) in self.iter().enumerate() {
            if index > 0 && needs_separator(&self[index - 1], token) {
                atf.push(' ');
            }
            atf.push_str(&token.value());
        }
        atf
    }
}

impl ToAtf for Vec<Token> {
    fn to_atf(&self) -> String {
        self.as_slice().to_atf()
    }
}

impl ToAtf for Line {
    fn to_atf(&self) -> String {
        match self {
            Line::EmptyLine => String::new(),
            Line::ControlLine(line) => format!("{}{}", line.prefix, line.value()),
            Line::TextLine(line) => format!("{} {}", line.prefix(), line.content.to_atf()),
            Line::LooseDollarLine(line) => format!("$ {}", line.body()),
            Line::ImageDollarLine(line) => format!("$ {}", line.body()),
            Line::RulingDollarLine(line) => format!("$ {}", line.body()),
            Line::StateDollarLine(line) => format!("$ {}", line.body()),
            Line::NoteLine(line) => format!("{}{}", NoteLine::PREFIX, line.body()),
        }
    }
}

impl ToAtf for Text {
    fn to_atf(&self) -> String {
        self.lines()
            .iter()
            .map(Line::atf)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn is_bracket(token: &Token) -> bool {
    matches!(
        token,
        Token::BrokenAway { .. } | Token::PerhapsBrokenAway { .. } | Token::OmissionOrRemoval { .. }
    )
}

fn is_opening(token: &Token) -> bool {
    match token {
        Token::BrokenAway { side }
        | Token::PerhapsBrokenAway { side }
        | Token::OmissionOrRemoval { side, .. }
        | Token::DocumentOrientedGloss { side } => *side == Side::Left,
        Token::Erasure { side } => *side != ErasureSide::Right,
        _ => false,
    }
}

fn is_closing(token: &Token) -> bool {
    match token {
        Token::BrokenAway { side }
        | Token::PerhapsBrokenAway { side }
        | Token::OmissionOrRemoval { side, .. }
        | Token::DocumentOrientedGloss { side } => *side == Side::Right,
        Token::Erasure { side } => *side != ErasureSide::Left,
        _ => false,
    }
}

fn partial(token: &Token) -> (bool, bool) {
    token.as_word().map(|word| word.partial()).unwrap_or_default()
}

fn needs_separator(left: &Token, right: &Token) -> bool {
    if matches!(left, Token::LanguageShift(_)) || matches!(right, Token::LanguageShift(_)) {
        return true;
    }
    if partial(left).1 || partial(right).0 {
        return false;
    }
    if is_opening(left) {
        return is_bracket(left) && right.is_word();
    }
    if is_closing(right) {
        return is_bracket(right) && left.is_word();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::testing::factories::{determinative, reading, word, word_with};
    use crate::atf::tokens::{JoinerKind, LanguageShift};

    #[test]
    fn test_enclosed_unknown_signs() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            Token::UnknownNumberOfSigns,
            Token::broken_away(Side::Right),
            Token::LoneDeterminative(word_with(vec![determinative(vec![reading("bu")])])),
            Token::broken_away(Side::Left),
            Token::UnknownNumberOfSigns,
            Token::broken_away(Side::Right),
        ];
        assert_eq!(tokens.to_atf(), "[...] {bu} [...]");
    }

    #[test]
    fn test_bracket_next_to_word_keeps_space() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            word(vec![reading("ku")]),
            Token::broken_away(Side::Right),
        ];
        assert_eq!(tokens.to_atf(), "[ ku ]");
    }

    #[test]
    fn test_partial_words_touch_erasure() {
        let hyphen = || Token::joiner(JoinerKind::Hyphen);
        let tokens = vec![
            word(vec![reading("ku"), hyphen()]),
            Token::erasure(ErasureSide::Left),
            word(vec![reading("nu")]),
            Token::erasure(ErasureSide::Center),
            word(vec![reading("ra")]),
            Token::erasure(ErasureSide::Right),
            word(vec![hyphen(), reading("ma")]),
        ];
        assert_eq!(tokens.to_atf(), "ku-°nu\\ra°-ma");
    }

    #[test]
    fn test_whole_words_around_erasure_keep_spaces() {
        let tokens = vec![
            word(vec![reading("ku")]),
            Token::erasure(ErasureSide::Left),
            word(vec![reading("nu")]),
            Token::erasure(ErasureSide::Center),
            Token::erasure(ErasureSide::Right),
            word(vec![reading("ma")]),
        ];
        assert_eq!(tokens.to_atf(), "ku °nu\\° ma");
    }

    #[test]
    fn test_document_oriented_gloss() {
        let tokens = vec![
            word(vec![reading("ku")]),
            Token::document_oriented_gloss(Side::Left),
            word(vec![reading("he")]),
            word(vec![reading("pi")]),
            Token::document_oriented_gloss(Side::Right),
        ];
        assert_eq!(tokens.to_atf(), "ku {(he pi)}");
    }

    #[test]
    fn test_language_shift_is_always_separated() {
        let tokens = vec![
            Token::broken_away(Side::Left),
            Token::LanguageShift(LanguageShift::new("%sux")),
            Token::UnknownNumberOfSigns,
            Token::broken_away(Side::Right),
        ];
        assert_eq!(tokens.to_atf(), "[ %sux ...]");
    }
}
