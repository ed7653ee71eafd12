//! Enclosure markers
//!
//!     Enclosures are paired markers delimiting damaged, restored, omitted or erased spans. Each
//!     marker carries its side explicitly. Erasure is the only three-sided enclosure
//!     (`°erased\over-erased°`), so its side type has a center that no other enclosure can take.

use serde::{Deserialize, Serialize};

/// Side of a paired enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn pick<'a>(&self, left: &'a str, right: &'a str) -> &'a str {
        match self {
            Side::Left => left,
            Side::Right => right,
        }
    }
}

/// Side of an erasure marker. Erasures always appear as open, center, close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErasureSide {
    Left,
    Center,
    Right,
}

impl ErasureSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErasureSide::Left | ErasureSide::Right => "°",
            ErasureSide::Center => "\\",
        }
    }
}

/// The three omission/removal enclosures share one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Omission {
    /// `<` `>`
    Accidental,
    /// `<(` `)>`
    Intentional,
    /// `<<` `>>`
    Removal,
}

impl Omission {
    pub fn marker(&self, side: Side) -> &'static str {
        match (self, side) {
            (Omission::Accidental, Side::Left) => "<",
            (Omission::Accidental, Side::Right) => ">",
            (Omission::Intentional, Side::Left) => "<(",
            (Omission::Intentional, Side::Right) => ")>",
            (Omission::Removal, Side::Left) => "<<",
            (Omission::Removal, Side::Right) => ">>",
        }
    }
}
