//! Text-line content parser
//!
//!     Content is lexed (see [lexing](crate::atf::lexing)) and parsed in three steps.
//!
//!     Chunks:
//!         Whitespace splits the lexemes into chunks. Document oriented glosses and erasure
//!         markers split chunks further; they are always top-level tokens, and the pieces
//!         between them are parsed separately as segments.
//!
//!     Segments:
//!         A segment is parsed by recursive descent into a flat list of parts. Opening brackets
//!         at its start and closing brackets at its end are then set aside. If nothing else is
//!         left, or only a standalone token (`...`, a divider, a column, ...), the brackets stay
//!         top-level tokens. Otherwise the whole segment is one word and the brackets are parts
//!         of it.
//!
//!     Folds:
//!         Language shifts and erasures change the context of the words that follow them. Both
//!         are threaded through the finished token list as left folds and stamped on each word.
//!
//!     Every enclosure marker produced along the way is recorded and the line is validated for
//!     balanced brackets once it parsed. See [enclosures](super::enclosures).

use super::enclosures::{self, EnclosureEvent, EnclosureKind, Role};
use super::LineError;
use crate::atf::lexing::{tokenize, Lexed, Lexeme};
use crate::atf::tokens::signs::parse_sub_index;
use crate::atf::tokens::{
    CompoundGrapheme, Divider, ErasureSide, ErasureState, Flag, JoinerKind, Language,
    LanguageShift, NamedSign, NumberSign, Omission, Side, Token, Word,
};

/// A token with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placed {
    token: Token,
    offset: usize,
}

/// How a part behaves inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartRole {
    Sign,
    Determinative,
    Link,
    Enclosure,
    Standalone,
}

fn part_role(token: &Token) -> PartRole {
    match token {
        Token::Reading(_)
        | Token::Logogram(_)
        | Token::Number(_)
        | Token::CompoundGrapheme(_)
        | Token::UnclearSign { .. }
        | Token::UnidentifiedSign { .. }
        | Token::Variant { .. }
        | Token::UnknownNumberOfSigns => PartRole::Sign,
        Token::Determinative { .. }
        | Token::PhoneticGloss { .. }
        | Token::LinguisticGloss { .. } => PartRole::Determinative,
        Token::Joiner { .. } | Token::InWordNewline => PartRole::Link,
        token if token.is_enclosure() => PartRole::Enclosure,
        _ => PartRole::Standalone,
    }
}

fn is_standalone(token: &Token) -> bool {
    matches!(
        token,
        Token::UnknownNumberOfSigns
            | Token::Divider(_)
            | Token::Column { .. }
            | Token::Tabulation
            | Token::CommentaryProtocol { .. }
            | Token::LineContinuation
            | Token::LanguageShift(_)
            | Token::Joiner {
                joiner: JoinerKind::Colon
            }
    )
}

fn bracket_side(token: &Token) -> Option<Side> {
    match token {
        Token::BrokenAway { side }
        | Token::PerhapsBrokenAway { side }
        | Token::OmissionOrRemoval { side, .. } => Some(*side),
        _ => None,
    }
}

struct Cursor<'s, 'a> {
    lexed: &'s [Lexed<'a>],
    position: usize,
}

impl<'s, 'a> Cursor<'s, 'a> {
    fn new(lexed: &'s [Lexed<'a>]) -> Self {
        Cursor {
            lexed,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'s Lexed<'a>> {
        self.lexed.get(self.position)
    }

    fn peek_lexeme(&self) -> Option<Lexeme> {
        self.peek().map(|lexed| lexed.lexeme)
    }

    fn peek_at(&self, ahead: usize) -> Option<Lexeme> {
        self.lexed.get(self.position + ahead).map(|lexed| lexed.lexeme)
    }

    fn next(&mut self) -> Option<&'s Lexed<'a>> {
        let lexed = self.lexed.get(self.position);
        if lexed.is_some() {
            self.position += 1;
        }
        lexed
    }

    fn next_if(&mut self, lexeme: Lexeme) -> Option<&'s Lexed<'a>> {
        if self.peek_lexeme() == Some(lexeme) {
            self.next()
        } else {
            None
        }
    }

    /// Start of the current lexeme, or end of the segment.
    fn offset(&self) -> usize {
        match self.peek() {
            Some(lexed) => lexed.span.start,
            None => self.lexed.last().map(|lexed| lexed.span.end).unwrap_or(0),
        }
    }
}

struct ContentParser {
    base: usize,
    events: Vec<EnclosureEvent>,
    erasure_open: bool,
}

impl ContentParser {
    fn error(&self, offset: usize) -> LineError {
        LineError::invalid_line(self.base + offset)
    }

    fn parse(&mut self, lexed: &[Lexed]) -> Result<Vec<Placed>, LineError> {
        let mut tokens = Vec::new();
        for chunk in lexed
            .split(|lexed| lexed.lexeme == Lexeme::Whitespace)
            .filter(|chunk| !chunk.is_empty())
        {
            self.parse_chunk(chunk, &mut tokens)?;
        }
        Ok(tokens)
    }

    fn parse_chunk(&mut self, chunk: &[Lexed], out: &mut Vec<Placed>) -> Result<(), LineError> {
        let mut start = 0;
        for index in 0..=chunk.len() {
            let split = chunk.get(index).filter(|lexed| lexed.lexeme.is_split());
            if index < chunk.len() && split.is_none() {
                continue;
            }
            if start < index {
                let segment = &chunk[start..index];
                self.parse_segment(segment, start > 0, split.is_some(), out)?;
            }
            if let Some(lexed) = split {
                let token = self.split_token(lexed);
                out.push(Placed {
                    token,
                    offset: self.base + lexed.span.start,
                });
            }
            start = index + 1;
        }
        Ok(())
    }

    fn split_token(&mut self, lexed: &Lexed) -> Token {
        let offset = self.base + lexed.span.start;
        let (kind, role, token) = match lexed.lexeme {
            Lexeme::DocumentGlossOpen => (
                EnclosureKind::DocumentOrientedGloss,
                Role::Open,
                Token::document_oriented_gloss(Side::Left),
            ),
            Lexeme::DocumentGlossClose => (
                EnclosureKind::DocumentOrientedGloss,
                Role::Close,
                Token::document_oriented_gloss(Side::Right),
            ),
            Lexeme::ErasureCenter => (
                EnclosureKind::Erasure,
                Role::Center,
                Token::erasure(ErasureSide::Center),
            ),
            _ if self.erasure_open => {
                self.erasure_open = false;
                (
                    EnclosureKind::Erasure,
                    Role::Close,
                    Token::erasure(ErasureSide::Right),
                )
            }
            _ => {
                self.erasure_open = true;
                (
                    EnclosureKind::Erasure,
                    Role::Open,
                    Token::erasure(ErasureSide::Left),
                )
            }
        };
        self.events.push(EnclosureEvent::new(kind, role, offset));
        token
    }

    fn parse_segment(
        &mut self,
        segment: &[Lexed],
        split_before: bool,
        split_after: bool,
        out: &mut Vec<Placed>,
    ) -> Result<(), LineError> {
        let mut cursor = Cursor::new(segment);
        let parts = self.parse_parts(&mut cursor, None)?;
        if cursor.peek().is_some() {
            return Err(self.error(cursor.offset()));
        }

        let lead = parts
            .iter()
            .take_while(|part| bracket_side(&part.token) == Some(Side::Left))
            .count();
        let trail = parts[lead..]
            .iter()
            .rev()
            .take_while(|part| bracket_side(&part.token) == Some(Side::Right))
            .count();
        let core = &parts[lead..parts.len() - trail];
        match core {
            [] => out.extend(parts),
            [single] if is_standalone(&single.token) => {
                out.extend(parts.into_iter().map(|part| match part.token {
                    Token::Joiner {
                        joiner: JoinerKind::Colon,
                    } => Placed {
                        token: Token::Divider(Divider::new(":")),
                        offset: part.offset,
                    },
                    _ => part,
                }))
            }
            _ => {
                self.validate_word(core, split_before, split_after)?;
                let offset = parts[0].offset;
                out.push(Placed {
                    token: into_word(parts),
                    offset,
                });
            }
        }
        Ok(())
    }

    fn validate_word(
        &self,
        core: &[Placed],
        split_before: bool,
        split_after: bool,
    ) -> Result<(), LineError> {
        let invalid = |part: &Placed| Err(LineError::invalid_line(part.offset));
        let mut previous: Option<(&Placed, PartRole)> = None;
        let mut has_material = false;
        for part in core {
            let role = part_role(&part.token);
            match role {
                PartRole::Standalone => return invalid(part),
                PartRole::Enclosure => continue,
                _ => {}
            }
            match previous {
                Some((_, PartRole::Link)) if role == PartRole::Link => return invalid(part),
                Some((_, PartRole::Sign)) if role == PartRole::Sign => return invalid(part),
                None if role == PartRole::Link && !split_before => return invalid(part),
                _ => {}
            }
            has_material |= role != PartRole::Link;
            previous = Some((part, role));
        }
        match previous {
            None => invalid(&core[0]),
            Some((_, _)) if !has_material => invalid(&core[0]),
            Some((last, PartRole::Link)) if !split_after => invalid(last),
            _ => Ok(()),
        }
    }

    fn parse_parts(
        &mut self,
        cursor: &mut Cursor,
        until: Option<Lexeme>,
    ) -> Result<Vec<Placed>, LineError> {
        let mut parts = Vec::new();
        while let Some(lexed) = cursor.peek() {
            if Some(lexed.lexeme) == until {
                break;
            }
            let offset = self.base + lexed.span.start;
            let token = match lexed.lexeme {
                Lexeme::Lower
                | Lexeme::Upper
                | Lexeme::Digits
                | Lexeme::Compound
                | Lexeme::Ellipsis => self.parse_sign(cursor)?,
                Lexeme::DeterminativeOpen => self
                    .parse_group(cursor, Lexeme::BraceClose)
                    .map(|parts| Token::Determinative { parts })?,
                Lexeme::PhoneticGlossOpen => self
                    .parse_group(cursor, Lexeme::BraceClose)
                    .map(|parts| Token::PhoneticGloss { parts })?,
                Lexeme::LinguisticGlossOpen => self
                    .parse_group(cursor, Lexeme::LinguisticGlossClose)
                    .map(|parts| Token::LinguisticGloss { parts })?,
                Lexeme::Hyphen => {
                    cursor.next();
                    Token::joiner(JoinerKind::Hyphen)
                }
                Lexeme::Dot => {
                    cursor.next();
                    Token::joiner(JoinerKind::Dot)
                }
                Lexeme::Plus => {
                    cursor.next();
                    Token::joiner(JoinerKind::Plus)
                }
                Lexeme::Semicolon => {
                    cursor.next();
                    Token::InWordNewline
                }
                Lexeme::Colon => self.parse_colon(cursor),
                Lexeme::Pipe | Lexeme::Dollar | Lexeme::Slash => {
                    cursor.next();
                    Token::Divider(
                        Divider::new(lexed.slice)
                            .with_modifiers(modifiers(cursor))
                            .with_flags(flags(cursor)),
                    )
                }
                Lexeme::Column => {
                    cursor.next();
                    let digits = &lexed.slice[1..];
                    let number = match digits {
                        "" => None,
                        digits => Some(digits.parse().map_err(|_| self.error(lexed.span.start))?),
                    };
                    Token::Column { number }
                }
                Lexeme::LanguageShift => {
                    cursor.next();
                    Token::LanguageShift(LanguageShift::new(lexed.slice))
                }
                Lexeme::Protocol => {
                    cursor.next();
                    Token::CommentaryProtocol {
                        value: lexed.slice.to_string(),
                    }
                }
                Lexeme::Tabulation => {
                    cursor.next();
                    Token::Tabulation
                }
                Lexeme::Arrow => {
                    cursor.next();
                    Token::LineContinuation
                }
                lexeme => match self.enclosure(lexeme, offset) {
                    Some(token) => {
                        cursor.next();
                        token
                    }
                    None => return Err(self.error(lexed.span.start)),
                },
            };
            parts.push(Placed { token, offset });
        }
        Ok(parts)
    }

    fn parse_group(&mut self, cursor: &mut Cursor, close: Lexeme) -> Result<Vec<Token>, LineError> {
        cursor.next();
        let parts = self.parse_parts(cursor, Some(close))?;
        if parts.is_empty() || cursor.next_if(close).is_none() {
            return Err(self.error(cursor.offset()));
        }
        Ok(parts.into_iter().map(|part| part.token).collect())
    }

    fn parse_colon(&mut self, cursor: &mut Cursor) -> Token {
        cursor.next();
        let divider = match cursor.peek_lexeme() {
            Some(Lexeme::Prime) => ":'",
            Some(Lexeme::DoubleQuote) => ":\"",
            Some(Lexeme::Dot) => ":.",
            Some(Lexeme::Colon) => "::",
            _ => ":",
        };
        if divider != ":" {
            cursor.next();
        } else if !matches!(
            cursor.peek_lexeme(),
            Some(Lexeme::Modifier) | Some(Lexeme::Flag)
        ) {
            return Token::joiner(JoinerKind::Colon);
        }
        Token::Divider(
            Divider::new(divider)
                .with_modifiers(modifiers(cursor))
                .with_flags(flags(cursor)),
        )
    }

    fn enclosure(&mut self, lexeme: Lexeme, offset: usize) -> Option<Token> {
        let (kind, side) = match lexeme {
            Lexeme::BrokenOpen => (EnclosureKind::BrokenAway, Side::Left),
            Lexeme::BrokenClose => (EnclosureKind::BrokenAway, Side::Right),
            Lexeme::ParenOpen => (EnclosureKind::PerhapsBrokenAway, Side::Left),
            Lexeme::ParenClose => (EnclosureKind::PerhapsBrokenAway, Side::Right),
            Lexeme::AccidentalOpen => (EnclosureKind::Omission(Omission::Accidental), Side::Left),
            Lexeme::AccidentalClose => {
                (EnclosureKind::Omission(Omission::Accidental), Side::Right)
            }
            Lexeme::IntentionalOpen => {
                (EnclosureKind::Omission(Omission::Intentional), Side::Left)
            }
            Lexeme::IntentionalClose => {
                (EnclosureKind::Omission(Omission::Intentional), Side::Right)
            }
            Lexeme::RemovalOpen => (EnclosureKind::Omission(Omission::Removal), Side::Left),
            Lexeme::RemovalClose => (EnclosureKind::Omission(Omission::Removal), Side::Right),
            _ => return None,
        };
        let role = match side {
            Side::Left => Role::Open,
            Side::Right => Role::Close,
        };
        self.events.push(EnclosureEvent::new(kind, role, offset));
        Some(match kind {
            EnclosureKind::BrokenAway => Token::broken_away(side),
            EnclosureKind::PerhapsBrokenAway => Token::perhaps_broken_away(side),
            EnclosureKind::Omission(omission) => Token::omission(omission, side),
            EnclosureKind::DocumentOrientedGloss => Token::document_oriented_gloss(side),
            EnclosureKind::Erasure => Token::erasure(ErasureSide::Center),
        })
    }

    /// A sign, or several signs separated by `/` forming a variant.
    fn parse_sign(&self, cursor: &mut Cursor) -> Result<Token, LineError> {
        let first = self.parse_simple_sign(cursor)?;
        if first == Token::UnknownNumberOfSigns || !starts_variant_alternative(cursor) {
            return Ok(first);
        }
        let mut tokens = vec![first];
        while starts_variant_alternative(cursor) {
            cursor.next();
            tokens.push(self.parse_simple_sign(cursor)?);
        }
        Ok(Token::Variant { tokens })
    }

    fn parse_simple_sign(&self, cursor: &mut Cursor) -> Result<Token, LineError> {
        let offset = cursor.offset();
        let lexed = cursor.next().ok_or_else(|| self.error(offset))?;
        let token = match lexed.lexeme {
            Lexeme::Ellipsis => Token::UnknownNumberOfSigns,
            Lexeme::Lower if lexed.slice == "x" => Token::UnclearSign {
                flags: flags(cursor),
            },
            Lexeme::Upper if lexed.slice == "X" => Token::UnidentifiedSign {
                flags: flags(cursor),
            },
            Lexeme::Lower | Lexeme::Upper => {
                let sub_index = match cursor.next_if(Lexeme::SubIndex) {
                    Some(index) => {
                        parse_sub_index(index.slice).ok_or_else(|| self.error(index.span.start))?
                    }
                    None => Some(1),
                };
                let mut sign = NamedSign::new(lexed.slice)
                    .with_sub_index(sub_index)
                    .with_modifiers(modifiers(cursor))
                    .with_flags(flags(cursor));
                if let Some(written) = self.parse_written_as(cursor, false) {
                    sign = sign.with_sign(written);
                }
                if lexed.lexeme == Lexeme::Lower {
                    Token::Reading(sign)
                } else {
                    Token::Logogram(sign)
                }
            }
            Lexeme::Digits => {
                let mut number = NumberSign::new(lexed.slice);
                if let Some(written) = self.parse_written_as(cursor, true) {
                    number = number.with_sign(written);
                }
                Token::Number(
                    number
                        .with_modifiers(modifiers(cursor))
                        .with_flags(flags(cursor)),
                )
            }
            Lexeme::Compound => {
                let compound = &lexed.slice[1..lexed.slice.len() - 1];
                Token::CompoundGrapheme(CompoundGrapheme::new(compound).with_flags(flags(cursor)))
            }
            _ => return Err(self.error(lexed.span.start)),
        };
        Ok(token)
    }

    /// `(KA)` or `(|A.A|)` directly after a sign. Numbers also take readings: `1(diš)`.
    fn parse_written_as(&self, cursor: &mut Cursor, allow_reading: bool) -> Option<Token> {
        if cursor.peek_lexeme() != Some(Lexeme::ParenOpen) {
            return None;
        }
        match cursor.peek_at(1) {
            Some(Lexeme::Upper) | Some(Lexeme::Compound) => {}
            Some(Lexeme::Lower) if allow_reading => {}
            _ => return None,
        }
        let saved = cursor.position;
        cursor.next();
        match self.parse_simple_sign(cursor) {
            Ok(sign) if cursor.next_if(Lexeme::ParenClose).is_some() => Some(sign),
            _ => {
                cursor.position = saved;
                None
            }
        }
    }
}

fn starts_variant_alternative(cursor: &Cursor) -> bool {
    cursor.peek_lexeme() == Some(Lexeme::Slash)
        && matches!(
            cursor.peek_at(1),
            Some(Lexeme::Lower) | Some(Lexeme::Upper) | Some(Lexeme::Digits) | Some(Lexeme::Compound)
        )
}

fn modifiers(cursor: &mut Cursor) -> Vec<String> {
    let mut modifiers = Vec::new();
    while let Some(lexed) = cursor.next_if(Lexeme::Modifier) {
        modifiers.push(lexed.slice.to_string());
    }
    modifiers
}

fn flags(cursor: &mut Cursor) -> Vec<Flag> {
    let mut flags = Vec::new();
    while let Some(lexed) = cursor.next_if(Lexeme::Flag) {
        flags.extend(lexed.slice.chars().next().and_then(Flag::from_char));
    }
    flags
}

fn into_word(parts: Vec<Placed>) -> Token {
    let parts: Vec<Token> = parts.into_iter().map(|part| part.token).collect();
    let mut material = parts.iter().filter(|part| !part.is_enclosure());
    let lone = matches!(
        (material.next(), material.next()),
        (
            Some(Token::Determinative { .. } | Token::PhoneticGloss { .. }),
            None
        )
    );
    if lone {
        Token::LoneDeterminative(Word::new(parts))
    } else {
        Token::Word(Word::new(parts))
    }
}

/// Stamp the language in effect on every word. Lines start in `language`.
fn fold_language(tokens: Vec<Token>, language: Language, normalized: bool) -> Vec<Token> {
    tokens
        .into_iter()
        .scan((language, normalized), |(language, normalized), token| {
            Some(match token {
                Token::LanguageShift(shift) => {
                    *language = shift.language();
                    *normalized = shift.normalized();
                    Token::LanguageShift(shift)
                }
                Token::Word(word) => Token::Word(word.with_language(*language, *normalized)),
                Token::LoneDeterminative(word) => {
                    Token::LoneDeterminative(word.with_language(*language, *normalized))
                }
                token => token,
            })
        })
        .collect()
}

/// Stamp the erasure state on every word.
fn fold_erasure(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .scan(ErasureState::None, |state, token| {
            Some(match token {
                Token::Erasure { side } => {
                    *state = match side {
                        ErasureSide::Left => ErasureState::Erased,
                        ErasureSide::Center => ErasureState::OverErased,
                        ErasureSide::Right => ErasureState::None,
                    };
                    token
                }
                Token::Word(word) => Token::Word(word.with_erasure(*state)),
                Token::LoneDeterminative(word) => Token::LoneDeterminative(word.with_erasure(*state)),
                token => token,
            })
        })
        .collect()
}

/// Parse text-line content starting at byte `offset` of its line, in the given language.
pub(crate) fn parse_content(
    source: &str,
    offset: usize,
    language: Language,
    normalized: bool,
) -> Result<Vec<Token>, LineError> {
    let lexed = tokenize(source).map_err(|at| LineError::invalid_line(offset + at))?;
    let mut parser = ContentParser {
        base: offset,
        events: Vec::new(),
        erasure_open: false,
    };
    let placed = parser.parse(&lexed)?;
    enclosures::validate(&parser.events)?;
    if let Some((_, continuation)) = placed
        .iter()
        .enumerate()
        .find(|(index, part)| part.token == Token::LineContinuation && index + 1 < placed.len())
    {
        return Err(LineError::invalid_line(continuation.offset));
    }
    let tokens = placed.into_iter().map(|part| part.token).collect();
    Ok(fold_erasure(fold_language(tokens, language, normalized)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::formats::atf::ToAtf;
    use crate::atf::parsing::ErrorKind;

    fn parse(source: &str) -> Vec<Token> {
        parse_content(source, 0, Language::Akkadian, false).unwrap()
    }

    fn error(source: &str) -> LineError {
        parse_content(source, 0, Language::Akkadian, false).unwrap_err()
    }

    fn kinds(tokens: &[Token]) -> Vec<&'static str> {
        tokens.iter().map(Token::kind_name).collect()
    }

    #[test]
    fn test_single_word() {
        let tokens = parse("kur");
        assert_eq!(kinds(&tokens), vec!["Word"]);
        assert_eq!(tokens[0].value(), "kur");
        assert!(tokens[0].lemmatizable());
    }

    #[test]
    fn test_broken_unknown_signs_stay_top_level() {
        let tokens = parse("[...] {bu} [...]");
        assert_eq!(
            kinds(&tokens),
            vec![
                "BrokenAway",
                "UnknownNumberOfSigns",
                "BrokenAway",
                "LoneDeterminative",
                "BrokenAway",
                "UnknownNumberOfSigns",
                "BrokenAway"
            ]
        );
        assert_eq!(tokens[3].value(), "{bu}");
    }

    #[test]
    fn test_brackets_around_word_material_are_word_parts() {
        let tokens = parse("[ku]-nu#");
        assert_eq!(kinds(&tokens), vec!["Word"]);
        let word = tokens[0].as_word().unwrap();
        assert_eq!(
            kinds(word.parts()),
            vec!["BrokenAway", "Reading", "BrokenAway", "Joiner", "Reading"]
        );
        assert_eq!(tokens[0].clean_value(), "ku-nu");
    }

    #[test]
    fn test_signs() {
        let tokens = parse("ku₂@v#!(KA) 1(diš)? |KUR.KUR|* x X ku/ka {d}utu");
        let values: Vec<String> = tokens.iter().map(Token::value).collect();
        assert_eq!(
            values,
            vec!["ku₂@v#!(KA)", "1(diš)?", "|KUR.KUR|*", "x", "X", "ku/ka", "{d}utu"]
        );
        let first = tokens[0].as_word().unwrap();
        assert!(matches!(
            &first.parts()[0],
            Token::Reading(sign) if sign.sub_index == Some(2) && sign.sign.is_some()
        ));
    }

    #[test]
    fn test_standalone_tokens() {
        let tokens = parse("& &2 ($___$) !qt : :' | %sux kur →");
        assert_eq!(
            kinds(&tokens),
            vec![
                "Column",
                "Column",
                "Tabulation",
                "CommentaryProtocol",
                "Divider",
                "Divider",
                "Divider",
                "LanguageShift",
                "Word",
                "LineContinuation"
            ]
        );
    }

    #[test]
    fn test_language_fold() {
        let tokens = parse("kur %sux lugal %n šarrum");
        let word = |index: usize| tokens[index].as_word().unwrap().clone();
        assert_eq!(word(0).language(), Language::Akkadian);
        assert_eq!(word(2).language(), Language::Sumerian);
        assert!(!tokens[2].lemmatizable());
        assert!(word(4).normalized());
        assert!(tokens[4].lemmatizable());
    }

    #[test]
    fn test_erasure_fold() {
        let tokens = parse("ku-°nu\\ra°-ma");
        assert_eq!(
            kinds(&tokens),
            vec!["Word", "Erasure", "Word", "Erasure", "Word", "Erasure", "Word"]
        );
        let erasure = |index: usize| tokens[index].as_word().unwrap().erasure();
        assert_eq!(erasure(0), ErasureState::None);
        assert_eq!(erasure(2), ErasureState::Erased);
        assert_eq!(erasure(4), ErasureState::OverErased);
        assert_eq!(erasure(6), ErasureState::None);
        assert_eq!(tokens.to_atf(), "ku-°nu\\ra°-ma");
    }

    #[test]
    fn test_document_oriented_gloss_splits_words() {
        let tokens = parse("ku {(he-pi₂ eš-šu₂)}");
        assert_eq!(
            kinds(&tokens),
            vec!["Word", "DocumentOrientedGloss", "Word", "Word", "DocumentOrientedGloss"]
        );
        assert_eq!(tokens.to_atf(), "ku {(he-pi₂ eš-šu₂)}");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(parse("ku    nu\tra").to_atf(), "ku nu ra");
    }

    #[test]
    fn test_adjacent_signs_need_a_joiner() {
        assert_eq!(error("kuKA"), LineError::invalid_line(2));
    }

    #[test]
    fn test_dangling_joiner_needs_a_split() {
        assert_eq!(error("ku- nu"), LineError::invalid_line(2));
        assert_eq!(error("ku -nu"), LineError::invalid_line(3));
    }

    #[test]
    fn test_unknown_character() {
        let error = error("ku ~");
        assert_eq!(error.kind, ErrorKind::InvalidLine);
        assert_eq!(error.offset, 3);
    }

    #[test]
    fn test_unbalanced_brackets() {
        assert_eq!(error("[ku nu"), LineError::invalid_brackets(0));
        assert_eq!(error("ku] nu"), LineError::invalid_brackets(2));
        assert_eq!(error("°ku° nu"), LineError::invalid_brackets(4));
    }

    #[test]
    fn test_line_continuation_must_be_last() {
        assert_eq!(error("ku → nu"), LineError::invalid_line(3));
    }

    #[test]
    fn test_offsets_are_relative_to_the_line() {
        let error = parse_content("ku ~", 10, Language::Akkadian, false).unwrap_err();
        assert_eq!(error.offset, 13);
    }
}
