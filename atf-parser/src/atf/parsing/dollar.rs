//! Dollar line bodies
//!
//!     The body after `$` is tried against the image, loose and ruling shapes first. Anything
//!     else must be a state line, read word by word in a fixed order: qualification, extent,
//!     scope, state, status. Each part is optional but at least one must be present and every
//!     word must be used.
//!
//!     `surface` is ambiguous: alone it is the scope keyword (`$ surface broken`), followed by a
//!     label that is not a state or status it is a surface carrying that label
//!     (`$ surface a broken`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::LineError;
use crate::atf::lines::dollar::LabelUse;
use crate::atf::lines::{
    DollarStatus, Extent, ImageDollarLine, Line, LooseDollarLine, Object, Qualification, Ruling,
    RulingDollarLine, Scope, ScopeContainer, State, StateDollarLine, Surface,
};

static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(image (?P<number>[0-9]+)(?P<letter>[a-z])? = (?P<text>.*)\)$").unwrap()
});

static LOOSE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\((?P<text>.*)\)$").unwrap());

static RULING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<number>single|double|triple)\s+ruling(?:\s+(?P<status>\*|\?|!\?|!))?$").unwrap()
});

static EXTENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<start>[0-9]+)(?:-(?P<end>[0-9]+))?$").unwrap());

fn status(word: &str) -> Option<DollarStatus> {
    DollarStatus::ALL.into_iter().find(|status| status.as_str() == word)
}

fn state(word: &str) -> Option<State> {
    State::ALL.into_iter().find(|state| state.as_str() == word)
}

/// Parse the body of a dollar line; `offset` is where `body` starts in its line.
pub(crate) fn parse_dollar(body: &str, offset: usize) -> Result<Line, LineError> {
    if let Some(captures) = IMAGE_REGEX.captures(body) {
        return Ok(Line::ImageDollarLine(ImageDollarLine {
            number: captures["number"].to_string(),
            letter: captures
                .name("letter")
                .and_then(|letter| letter.as_str().chars().next()),
            text: captures["text"].to_string(),
        }));
    }
    if let Some(captures) = LOOSE_REGEX.captures(body) {
        return Ok(Line::LooseDollarLine(LooseDollarLine {
            text: captures["text"].to_string(),
        }));
    }
    if let Some(captures) = RULING_REGEX.captures(body) {
        let number = Ruling::ALL
            .into_iter()
            .find(|ruling| ruling.as_str() == &captures["number"])
            .ok_or_else(|| LineError::invalid_line(offset))?;
        return Ok(Line::RulingDollarLine(RulingDollarLine {
            number,
            status: captures.name("status").and_then(|s| status(s.as_str())),
        }));
    }
    StateReader::new(body, offset)
        .read()
        .map(Line::StateDollarLine)
}

struct StateReader<'a> {
    words: Vec<(usize, &'a str)>,
    position: usize,
    end: usize,
}

impl<'a> StateReader<'a> {
    fn new(body: &'a str, offset: usize) -> Self {
        let mut words = Vec::new();
        let mut start = None;
        for (index, c) in body.char_indices() {
            match (c.is_whitespace(), start) {
                (false, None) => start = Some(index),
                (true, Some(from)) => {
                    words.push((offset + from, &body[from..index]));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(from) = start {
            words.push((offset + from, &body[from..]));
        }
        StateReader {
            words,
            position: 0,
            end: offset + body.len(),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.words.get(self.position).map(|(_, word)| *word)
    }

    fn peek_at(&self, ahead: usize) -> Option<&'a str> {
        self.words.get(self.position + ahead).map(|(_, word)| *word)
    }

    fn take(&mut self, count: usize) {
        self.position += count;
    }

    fn error(&self) -> LineError {
        let offset = self
            .words
            .get(self.position)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.end);
        LineError::invalid_line(offset)
    }

    fn read(mut self) -> Result<StateDollarLine, LineError> {
        let line = StateDollarLine {
            qualification: self.qualification(),
            extent: self.extent(),
            scope: self.scope()?,
            state: self.state(),
            status: self.status(),
        };
        if self.position < self.words.len() || line.is_empty() {
            return Err(self.error());
        }
        Ok(line)
    }

    fn qualification(&mut self) -> Option<Qualification> {
        let qualification = match (self.peek()?, self.peek_at(1)) {
            ("about", _) => Qualification::About,
            ("at", Some("least")) => Qualification::AtLeast,
            ("at", Some("most")) => Qualification::AtMost,
            _ => return None,
        };
        self.take(qualification.as_str().split(' ').count());
        Some(qualification)
    }

    fn extent(&mut self) -> Option<Extent> {
        let word = self.peek()?;
        if let Some(captures) = EXTENT_REGEX.captures(word) {
            let start = captures["start"].parse().ok()?;
            let extent = match captures.name("end") {
                Some(end) => Extent::Range(start, end.as_str().parse().ok()?),
                None => Extent::Number(start),
            };
            self.take(1);
            return Some(extent);
        }
        let (extent, length) = Extent::KEYWORDS.into_iter().find_map(|extent| {
            let atf = extent.atf();
            let words: Vec<&str> = atf.split(' ').collect();
            let matches = words
                .iter()
                .enumerate()
                .all(|(ahead, expected)| self.peek_at(ahead) == Some(*expected));
            matches.then_some((extent, words.len()))
        })?;
        self.take(length);
        Some(extent)
    }

    /// A free-text label after a surface or object keyword. States and statuses are not labels.
    fn label(&self) -> Option<String> {
        self.peek_at(1)
            .filter(|word| state(word).is_none() && status(word).is_none())
            .map(str::to_string)
    }

    fn scope(&mut self) -> Result<Option<ScopeContainer>, LineError> {
        let Some(word) = self.peek() else {
            return Ok(None);
        };
        if word == Scope::Surface.as_str() {
            let container = match self.label() {
                Some(text) => {
                    self.take(2);
                    ScopeContainer::Surface {
                        surface: Surface::Surface,
                        text: Some(text),
                    }
                }
                None => {
                    self.take(1);
                    ScopeContainer::Scope {
                        scope: Scope::Surface,
                    }
                }
            };
            return Ok(Some(container));
        }
        if let Some(scope) = Scope::ALL.into_iter().find(|scope| scope.as_str() == word) {
            self.take(1);
            return Ok(Some(ScopeContainer::Scope { scope }));
        }
        if let Some(surface) = Surface::ALL.into_iter().find(|surface| surface.as_str() == word) {
            let text = self.labelled(surface.label())?;
            return Ok(Some(ScopeContainer::Surface { surface, text }));
        }
        if let Some(object) = Object::ALL.into_iter().find(|object| object.as_str() == word) {
            let text = self.labelled(object.label())?;
            return Ok(Some(ScopeContainer::Object { object, text }));
        }
        Ok(None)
    }

    /// Consume a keyword and, depending on `label`, the label after it.
    fn labelled(&mut self, label: LabelUse) -> Result<Option<String>, LineError> {
        let text = match label {
            LabelUse::None => None,
            LabelUse::Optional => self.label(),
            LabelUse::Required => {
                let text = self.label();
                if text.is_none() {
                    self.take(1);
                    return Err(self.error());
                }
                text
            }
        };
        self.take(if text.is_some() { 2 } else { 1 });
        Ok(text)
    }

    fn state(&mut self) -> Option<State> {
        let state = state(self.peek()?)?;
        self.take(1);
        Some(state)
    }

    fn status(&mut self) -> Option<DollarStatus> {
        let status = status(self.peek()?)?;
        self.take(1);
        Some(status)
    }
}
