//! Philological annotations carried by words
//!
//!     Annotations are supplied by callers per token, always together with the value of the token
//!     they target. The value acts as a guard: an annotation whose value does not match the token
//!     is rejected instead of silently landing on the wrong word.

use serde::{Deserialize, Serialize};

/// A lemma assignment for one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmatizationToken {
    pub value: String,
    #[serde(default)]
    pub unique_lemma: Option<Vec<String>>,
}

impl LemmatizationToken {
    pub fn new(value: impl Into<String>, unique_lemma: Option<Vec<String>>) -> Self {
        LemmatizationToken {
            value: value.into(),
            unique_lemma,
        }
    }

    /// A token that only confirms the value and clears any lemma.
    pub fn bare(value: impl Into<String>) -> Self {
        Self::new(value, None)
    }

    pub fn has_lemma(&self) -> bool {
        self.unique_lemma
            .as_ref()
            .is_some_and(|lemma| !lemma.is_empty())
    }
}

/// An alignment assignment for one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentToken {
    pub value: String,
    #[serde(default)]
    pub alignment: Option<usize>,
}

impl AlignmentToken {
    pub fn new(value: impl Into<String>, alignment: Option<usize>) -> Self {
        AlignmentToken {
            value: value.into(),
            alignment,
        }
    }
}

/// Lemmatization of a whole text: one row per line, one entry per top-level token.
pub type Lemmatization = Vec<Vec<LemmatizationToken>>;

/// Alignment of a whole text: one row per line, one entry per top-level token.
pub type Alignment = Vec<Vec<AlignmentToken>>;
