//! Output formats
//!
//!     atf:    the canonical transliteration text. See [atf](atf).
//!     dict:   the lossless serde form used for storage and exchange. See [dict](dict).

pub mod atf;
pub mod dict;

pub use atf::ToAtf;
pub use dict::{from_dict, from_json, to_dict, to_json, DictError};
