//! Note lines: `#note: see @i{CAD} s.v. @akk{šar-ru}`

use serde::{Deserialize, Serialize};

use crate::atf::formats::atf::ToAtf;
use crate::atf::tokens::{Language, Token};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotePart {
    StringPart {
        text: String,
    },
    /// `@i{text}`
    EmphasisPart {
        text: String,
    },
    /// `@akk{...}`, body parsed as text-line content in that language.
    LanguagePart {
        language: Language,
        tokens: Vec<Token>,
    },
}

impl NotePart {
    pub fn string(text: impl Into<String>) -> Self {
        NotePart::StringPart { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        NotePart::EmphasisPart { text: text.into() }
    }

    pub fn atf(&self) -> String {
        match self {
            NotePart::StringPart { text } => text.clone(),
            NotePart::EmphasisPart { text } => format!("@i{{{}}}", text),
            NotePart::LanguagePart { language, tokens } => format!(
                "@{}{{{}}}",
                language.note_code().unwrap_or("akk"),
                tokens.to_atf()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteLine {
    pub parts: Vec<NotePart>,
}

impl NoteLine {
    pub const PREFIX: &'static str = "#note: ";

    /// Build a note, merging adjacent string parts.
    pub fn new(parts: Vec<NotePart>) -> Self {
        let mut merged: Vec<NotePart> = Vec::with_capacity(parts.len());
        for part in parts {
            if let NotePart::StringPart { text } = &part {
                if text.is_empty() {
                    continue;
                }
                if let Some(NotePart::StringPart { text: last }) = merged.last_mut() {
                    last.push_str(text);
                    continue;
                }
            }
            merged.push(part);
        }
        NoteLine { parts: merged }
    }

    pub fn body(&self) -> String {
        self.parts.iter().map(NotePart::atf).collect()
    }
}
