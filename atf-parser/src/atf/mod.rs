//! Main module for atf library functionality

pub mod annotations;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod lines;
pub mod loader;
pub mod merging;
pub mod parsing;
pub mod testing;
pub mod text;
pub mod tokens;

/// Version tag stamped on every parsed [`Text`](text::Text).
///
/// Bump whenever the grammar or the shape of the produced model changes, so stored texts can be
/// told apart from texts produced by the current parser.
pub const ATF_PARSER_VERSION: &str = "1.0.0";
