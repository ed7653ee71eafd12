//! Token model for text-line content.
//!
//!     A text line is a flat sequence of tokens. Most of them are words, which are themselves
//!     composite tokens built from an ordered list of parts (readings, logograms, joiners,
//!     determinatives and word-internal enclosures). Everything that is not word material lives
//!     at the top level: dividers, language shifts, column and tabulation markers, and the
//!     enclosures that wrap standalone tokens (for example the brackets of `[...]`).
//!
//! Token Layers
//!
//!     Signs:
//!         Readings, logograms, numbers, compound graphemes and the unclear/unidentified sign
//!         placeholders. See [signs](signs).
//!
//!     Enclosures:
//!         Paired markers with an explicit side. Their textual form depends only on kind and
//!         side. See [enclosures](enclosures).
//!
//!     Words:
//!         Composite tokens carrying language, erasure state and the philological annotations
//!         (lemma and alignment). See [word](word).
//!
//!     The closed [`Token`] enum ties the layers together, so adding a kind is a compile time
//!     checked change everywhere it has to be handled.
//!
//! Values
//!
//!     Every token has a `value`, its raw textual form, and a `clean_value`, the same form with
//!     flags and enclosure markers removed. Values are always derived from the structure and are
//!     never stored next to it, with the exception of the opaque [`Token::ValueToken`].

pub mod enclosures;
pub mod language;
mod repr;
pub mod signs;
pub mod token;
pub mod word;

pub use enclosures::{ErasureSide, Omission, Side};
pub use language::{Language, LanguageShift};
pub use signs::{CompoundGrapheme, Divider, Flag, JoinerKind, NamedSign, NumberSign};
pub use token::Token;
pub use word::{ErasureState, Word};
