//! Lexer for text-line content
//!
//!     Text-line content is tokenized with a plain logos lexer. Lexemes are purely lexical: the
//!     same `:` is a joiner inside a word and a divider on its own, the same `(` opens a damaged
//!     span or a written-as sign. Those decisions are left to the content parser, which sees the
//!     lexemes together with their source slice and byte range.
//!
//!     Multi-character markers (`{(`, `<<`, `($___$)`, ...) are single lexemes; logos picks the
//!     longest match, so `{{` never lexes as two determinative openers.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("...")]
    Ellipsis,
    #[token("($___$)")]
    Tabulation,
    #[token("→")]
    Arrow,

    // Glosses and determinatives
    #[token("{(")]
    DocumentGlossOpen,
    #[token(")}")]
    DocumentGlossClose,
    #[token("{{")]
    LinguisticGlossOpen,
    #[token("}}")]
    LinguisticGlossClose,
    #[token("{+")]
    PhoneticGlossOpen,
    #[token("{")]
    DeterminativeOpen,
    #[token("}")]
    BraceClose,

    // Enclosures
    #[token("[")]
    BrokenOpen,
    #[token("]")]
    BrokenClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("<")]
    AccidentalOpen,
    #[token(">")]
    AccidentalClose,
    #[token("<(")]
    IntentionalOpen,
    #[token(")>")]
    IntentionalClose,
    #[token("<<")]
    RemovalOpen,
    #[token(">>")]
    RemovalClose,
    #[token("°")]
    Erasure,
    #[token("\\")]
    ErasureCenter,

    // Joiners and separators
    #[token("-")]
    Hyphen,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("|")]
    Pipe,
    #[token("$")]
    Dollar,
    #[token("'")]
    Prime,
    #[token("\"")]
    DoubleQuote,

    #[token("#")]
    #[token("?")]
    #[token("!")]
    #[token("*")]
    Flag,

    #[regex(r"&[0-9]*")]
    Column,
    #[regex(r"%[a-z0-9]+")]
    LanguageShift,
    #[regex(r"!(qt|bs|cm|zz)")]
    Protocol,
    #[regex(r"@[a-z0-9]+")]
    Modifier,

    /// `|KUR.KUR|`, `|A×HA|`
    #[regex(r"\|[A-ZŠṢṬḪĜŊŚ0-9][^|\s\[\]{}]*\|")]
    Compound,
    #[regex(r"[a-zšṣṭḫĝŋśʾáàéèíìúùāēīūâêîû]+")]
    Lower,
    #[regex(r"[A-ZŠṢṬḪĜŊŚÁÀÉÈÍÌÚÙĀĒĪŪÂÊÎÛ]+")]
    Upper,
    #[regex(r"[0-9]+")]
    Digits,
    #[regex(r"[₀-₉]+|ₓ")]
    SubIndex,
}

impl Lexeme {
    /// Lexemes that split a chunk into separately parsed pieces.
    pub fn is_split(&self) -> bool {
        matches!(
            self,
            Lexeme::DocumentGlossOpen
                | Lexeme::DocumentGlossClose
                | Lexeme::Erasure
                | Lexeme::ErasureCenter
        )
    }

    /// Lexemes that can start a sign.
    pub fn starts_sign(&self) -> bool {
        matches!(
            self,
            Lexeme::Lower | Lexeme::Upper | Lexeme::Digits | Lexeme::Compound | Lexeme::Ellipsis
        )
    }
}

/// A lexeme with its source slice and byte range within the lexed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed<'a> {
    pub lexeme: Lexeme,
    pub slice: &'a str,
    pub span: Range<usize>,
}

/// Tokenize `source`. On failure, returns the byte offset of the first unrecognized character.
pub fn tokenize(source: &str) -> Result<Vec<Lexed<'_>>, usize> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexed = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(lexeme) => lexed.push(Lexed {
                lexeme,
                slice: lexer.slice(),
                span,
            }),
            Err(()) => return Err(span.start),
        }
    }
    Ok(lexed)
}
