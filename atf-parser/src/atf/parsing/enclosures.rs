//! Enclosure validation
//!
//!     The content parser records every enclosure marker it produces, word internal or not, in
//!     source order. A line is valid when, for each enclosure kind on its own, markers alternate
//!     open/close starting with an open and ending closed. Erasures alternate open, center, close.
//!     Different kinds may overlap freely: `[ku (nu] ra)` is valid.

use std::collections::HashMap;

use super::LineError;
use crate::atf::tokens::Omission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EnclosureKind {
    BrokenAway,
    PerhapsBrokenAway,
    Omission(Omission),
    DocumentOrientedGloss,
    Erasure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Open,
    Center,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EnclosureEvent {
    pub kind: EnclosureKind,
    pub role: Role,
    /// Byte offset within the line.
    pub offset: usize,
}

impl EnclosureEvent {
    pub fn new(kind: EnclosureKind, role: Role, offset: usize) -> Self {
        EnclosureEvent { kind, role, offset }
    }
}

pub(crate) fn validate(events: &[EnclosureEvent]) -> Result<(), LineError> {
    let mut open: HashMap<EnclosureKind, usize> = HashMap::new();
    // offset of the opening marker and the last role seen
    let mut erasure: Option<(usize, Role)> = None;
    for event in events {
        let valid = match (event.kind, event.role) {
            (EnclosureKind::Erasure, role) => match (erasure, role) {
                (None, Role::Open) => {
                    erasure = Some((event.offset, Role::Open));
                    true
                }
                (Some((start, Role::Open)), Role::Center) => {
                    erasure = Some((start, Role::Center));
                    true
                }
                (Some((_, Role::Center)), Role::Close) => {
                    erasure = None;
                    true
                }
                _ => false,
            },
            (kind, Role::Open) => open.insert(kind, event.offset).is_none(),
            (kind, Role::Close) => open.remove(&kind).is_some(),
            (_, Role::Center) => false,
        };
        if !valid {
            return Err(LineError::invalid_brackets(event.offset));
        }
    }
    let unclosed = open
        .values()
        .copied()
        .chain(erasure.map(|(start, _)| start))
        .min();
    match unclosed {
        Some(offset) => Err(LineError::invalid_brackets(offset)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: EnclosureKind, role: Role, offset: usize) -> EnclosureEvent {
        EnclosureEvent::new(kind, role, offset)
    }

    #[test]
    fn test_overlapping_kinds_are_valid() {
        let events = [
            event(EnclosureKind::BrokenAway, Role::Open, 0),
            event(EnclosureKind::PerhapsBrokenAway, Role::Open, 4),
            event(EnclosureKind::BrokenAway, Role::Close, 7),
            event(EnclosureKind::PerhapsBrokenAway, Role::Close, 11),
        ];
        assert_eq!(validate(&events), Ok(()));
    }

    #[test]
    fn test_reopening_is_invalid() {
        let events = [
            event(EnclosureKind::BrokenAway, Role::Open, 0),
            event(EnclosureKind::BrokenAway, Role::Open, 3),
        ];
        assert_eq!(validate(&events), Err(LineError::invalid_brackets(3)));
    }

    #[test]
    fn test_close_without_open_is_invalid() {
        let events = [event(
            EnclosureKind::Omission(Omission::Accidental),
            Role::Close,
            5,
        )];
        assert_eq!(validate(&events), Err(LineError::invalid_brackets(5)));
    }

    #[test]
    fn test_unclosed_reports_first_open() {
        let events = [
            event(EnclosureKind::PerhapsBrokenAway, Role::Open, 2),
            event(EnclosureKind::BrokenAway, Role::Open, 6),
        ];
        assert_eq!(validate(&events), Err(LineError::invalid_brackets(2)));
    }

    #[test]
    fn test_erasure_needs_center() {
        let valid = [
            event(EnclosureKind::Erasure, Role::Open, 0),
            event(EnclosureKind::Erasure, Role::Center, 3),
            event(EnclosureKind::Erasure, Role::Close, 6),
        ];
        assert_eq!(validate(&valid), Ok(()));
        let invalid = [
            event(EnclosureKind::Erasure, Role::Open, 0),
            event(EnclosureKind::Erasure, Role::Close, 6),
        ];
        assert_eq!(validate(&invalid), Err(LineError::invalid_brackets(6)));
    }
}
