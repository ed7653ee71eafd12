//! # atf-parser
//!
//! Parser, canonical serializer and annotation merge engine for ATF, the plain-text notation
//! used to transliterate cuneiform tablets line by line.
//!
//! File Layout
//!
//!     src/atf
//!       ├── tokens       Token model (signs, enclosures, words)
//!       ├── lines        Line model (text, control, dollar and note lines)
//!       ├── text         The Text aggregate and its annotation updates
//!       ├── lexing       Logos lexer for text-line content
//!       ├── parsing      Line grammar, content parser and enclosure validation
//!       ├── formats      Canonical atf serializer and the dict (JSON) form
//!       ├── merging      Two-level diff based annotation merge
//!       └── testing      Factories for terse test construction
//!
//! The round trip law ties the parser and the serializer together: for every text the parser
//! produces, parsing the serialized text yields a structurally equal value.

#![allow(rustdoc::invalid_html_tags)]

pub mod atf;

pub use atf::parsing::{parse_atf, AtfParser, ParserOptions};
pub use atf::text::Text;
