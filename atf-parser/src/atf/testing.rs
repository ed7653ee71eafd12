//! Test helpers
//!
//!     Factories for building tokens and lines tersely in tests.

pub mod factories {
    use crate::atf::lines::{Line, LineLabel, TextLine};
    use crate::atf::tokens::{NamedSign, Token, Word};

    pub fn reading(name: &str) -> Token {
        Token::Reading(NamedSign::new(name))
    }

    pub fn logogram(name: &str) -> Token {
        Token::Logogram(NamedSign::new(name))
    }

    pub fn determinative(parts: Vec<Token>) -> Token {
        Token::Determinative { parts }
    }

    pub fn word_with(parts: Vec<Token>) -> Word {
        Word::new(parts)
    }

    pub fn word(parts: Vec<Token>) -> Token {
        Token::Word(Word::new(parts))
    }

    /// A word carrying one lemma.
    pub fn lemmatized(token: Token, lemma: &str) -> Token {
        match token {
            Token::Word(word) => Token::Word(word.with_unique_lemma(vec![lemma.to_string()])),
            other => other,
        }
    }

    pub fn text_line(number: u32, content: Vec<Token>) -> Line {
        Line::TextLine(TextLine::new(LineLabel::number(number), content))
    }
}
