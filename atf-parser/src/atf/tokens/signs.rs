//! Sign level tokens
//!
//!     Readings and logograms share one shape, [`NamedSign`]: a name, an optional numeric
//!     sub-index, modifiers, flags and an optional written-as sign. Numbers keep their sign in
//!     parentheses directly after the digits (`1(diš)`) and therefore have their own shape.

use serde::{Deserialize, Serialize};

use super::token::Token;

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Sub-index written as `ₓ`, an index known to exist but not known which.
pub const UNKNOWN_SUB_INDEX: char = 'ₓ';

/// Flags that may trail a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "#")]
    Damage,
    #[serde(rename = "?")]
    Uncertain,
    #[serde(rename = "!")]
    Correction,
    #[serde(rename = "*")]
    Collation,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Damage => "#",
            Flag::Uncertain => "?",
            Flag::Correction => "!",
            Flag::Collation => "*",
        }
    }

    pub fn from_char(c: char) -> Option<Flag> {
        match c {
            '#' => Some(Flag::Damage),
            '?' => Some(Flag::Uncertain),
            '!' => Some(Flag::Correction),
            '*' => Some(Flag::Collation),
            _ => None,
        }
    }
}

pub(crate) fn flags_to_string(flags: &[Flag]) -> String {
    flags.iter().map(Flag::as_str).collect()
}

/// Render a sub-index. `Some(1)` is the implicit default and renders as nothing.
pub fn sub_index_to_string(sub_index: Option<u32>) -> String {
    match sub_index {
        Some(1) => String::new(),
        Some(index) => index
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| SUBSCRIPT_DIGITS[d as usize])
            .collect(),
        None => UNKNOWN_SUB_INDEX.to_string(),
    }
}

/// Parse subscript digits (or `ₓ`) back into a sub-index.
pub fn parse_sub_index(text: &str) -> Option<Option<u32>> {
    if text == UNKNOWN_SUB_INDEX.to_string() {
        return Some(None);
    }
    let digits: Option<String> = text
        .chars()
        .map(|c| {
            SUBSCRIPT_DIGITS
                .iter()
                .position(|s| *s == c)
                .and_then(|d| char::from_digit(d as u32, 10))
        })
        .collect();
    digits.and_then(|d| d.parse::<u32>().ok()).map(Some)
}

fn default_sub_index() -> Option<u32> {
    Some(1)
}

/// A reading or a logogram: `ku₂@v#!(KA)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSign {
    pub name: String,
    #[serde(default = "default_sub_index")]
    pub sub_index: Option<u32>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default)]
    pub sign: Option<Box<Token>>,
}

impl NamedSign {
    pub fn new(name: impl Into<String>) -> Self {
        NamedSign {
            name: name.into(),
            sub_index: Some(1),
            modifiers: Vec::new(),
            flags: Vec::new(),
            sign: None,
        }
    }

    pub fn with_sub_index(mut self, sub_index: Option<u32>) -> Self {
        self.sub_index = sub_index;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_sign(mut self, sign: Token) -> Self {
        self.sign = Some(Box::new(sign));
        self
    }

    fn stem(&self) -> String {
        format!(
            "{}{}{}",
            self.name,
            sub_index_to_string(self.sub_index),
            self.modifiers.concat()
        )
    }

    pub fn value(&self) -> String {
        let sign = self
            .sign
            .as_ref()
            .map(|sign| format!("({})", sign.value()))
            .unwrap_or_default();
        format!("{}{}{}", self.stem(), flags_to_string(&self.flags), sign)
    }

    pub fn clean_value(&self) -> String {
        let sign = self
            .sign
            .as_ref()
            .map(|sign| format!("({})", sign.clean_value()))
            .unwrap_or_default();
        format!("{}{}", self.stem(), sign)
    }
}

/// A number, optionally qualified by the sign it is written with: `1(diš)#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSign {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default)]
    pub sign: Option<Box<Token>>,
}

impl NumberSign {
    pub fn new(name: impl Into<String>) -> Self {
        NumberSign {
            name: name.into(),
            modifiers: Vec::new(),
            flags: Vec::new(),
            sign: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_sign(mut self, sign: Token) -> Self {
        self.sign = Some(Box::new(sign));
        self
    }

    fn stem(&self, sign: Option<String>) -> String {
        let sign = sign.map(|s| format!("({})", s)).unwrap_or_default();
        format!("{}{}{}", self.name, sign, self.modifiers.concat())
    }

    pub fn value(&self) -> String {
        let stem = self.stem(self.sign.as_ref().map(|s| s.value()));
        format!("{}{}", stem, flags_to_string(&self.flags))
    }

    pub fn clean_value(&self) -> String {
        self.stem(self.sign.as_ref().map(|s| s.clean_value()))
    }
}

/// A grapheme built from several signs, written between pipes: `|KUR.KUR|`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundGrapheme {
    pub compound: String,
    #[serde(default)]
    pub flags: Vec<Flag>,
}

impl CompoundGrapheme {
    pub fn new(compound: impl Into<String>) -> Self {
        CompoundGrapheme {
            compound: compound.into(),
            flags: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn value(&self) -> String {
        format!("|{}|{}", self.compound, flags_to_string(&self.flags))
    }

    pub fn clean_value(&self) -> String {
        format!("|{}|", self.compound)
    }
}

/// Word and line dividers: `|`, `:`, `:'`, `:"`, `:.`, `::`, `$`, `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Divider {
    pub divider: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub flags: Vec<Flag>,
}

impl Divider {
    pub const VALUES: [&'static str; 8] = ["|", ":", ":'", ":\"", ":.", "::", "$", "/"];

    pub fn new(divider: impl Into<String>) -> Self {
        Divider {
            divider: divider.into(),
            modifiers: Vec::new(),
            flags: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn value(&self) -> String {
        format!(
            "{}{}{}",
            self.divider,
            self.modifiers.concat(),
            flags_to_string(&self.flags)
        )
    }

    pub fn clean_value(&self) -> String {
        format!("{}{}", self.divider, self.modifiers.concat())
    }
}

/// Joiners between the signs of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinerKind {
    Hyphen,
    Dot,
    Plus,
    Colon,
}

impl JoinerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinerKind::Hyphen => "-",
            JoinerKind::Dot => ".",
            JoinerKind::Plus => "+",
            JoinerKind::Colon => ":",
        }
    }
}
