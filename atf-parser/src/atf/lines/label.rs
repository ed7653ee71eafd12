//! Line numbers of text lines: `1.`, `2'.`, `A+3a.`, `1-3.`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static LINE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<prefix>[A-Z])\+)?(?P<number>[0-9]+)(?P<prime>['′])?(?P<suffix>[a-z])?$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineNumber {
    pub number: u32,
    #[serde(default)]
    pub has_prime: bool,
    #[serde(default)]
    pub prefix_modifier: Option<char>,
    #[serde(default)]
    pub suffix_modifier: Option<char>,
}

impl LineNumber {
    pub fn new(number: u32) -> Self {
        LineNumber {
            number,
            has_prime: false,
            prefix_modifier: None,
            suffix_modifier: None,
        }
    }

    pub fn primed(mut self) -> Self {
        self.has_prime = true;
        self
    }

    pub fn with_prefix_modifier(mut self, modifier: char) -> Self {
        self.prefix_modifier = Some(modifier);
        self
    }

    pub fn with_suffix_modifier(mut self, modifier: char) -> Self {
        self.suffix_modifier = Some(modifier);
        self
    }

    pub fn parse(text: &str) -> Option<LineNumber> {
        let captures = LINE_NUMBER_REGEX.captures(text)?;
        let number = captures["number"].parse().ok()?;
        let first_char = |name: &str| captures.name(name).and_then(|m| m.as_str().chars().next());
        Some(LineNumber {
            number,
            has_prime: captures.name("prime").is_some(),
            prefix_modifier: first_char("prefix"),
            suffix_modifier: first_char("suffix"),
        })
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix_modifier {
            write!(f, "{}+", prefix)?;
        }
        write!(f, "{}", self.number)?;
        if self.has_prime {
            write!(f, "'")?;
        }
        if let Some(suffix) = self.suffix_modifier {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

/// A single line number or a range of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineLabel {
    LineNumber(LineNumber),
    LineNumberRange { start: LineNumber, end: LineNumber },
}

impl LineLabel {
    pub fn number(number: u32) -> Self {
        LineLabel::LineNumber(LineNumber::new(number))
    }

    pub fn parse(text: &str) -> Option<LineLabel> {
        if let Some(number) = LineNumber::parse(text) {
            return Some(LineLabel::LineNumber(number));
        }
        let (start, end) = text.split_once('-')?;
        Some(LineLabel::LineNumberRange {
            start: LineNumber::parse(start)?,
            end: LineNumber::parse(end)?,
        })
    }

    pub fn atf(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineLabel::LineNumber(number) => write!(f, "{}", number),
            LineLabel::LineNumberRange { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", "1")]
    #[case("12'", "12'")]
    #[case("3′", "3'")]
    #[case("A+1'a", "A+1'a")]
    #[case("4b", "4b")]
    #[case("1-3", "1-3")]
    #[case("1'-2'", "1'-2'")]
    fn test_label_round_trip(#[case] text: &str, #[case] atf: &str) {
        assert_eq!(LineLabel::parse(text).unwrap().atf(), atf);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("1''")]
    #[case("1-")]
    #[case("a+1")]
    fn test_invalid_labels(#[case] text: &str) {
        assert_eq!(LineLabel::parse(text), None);
    }

    #[test]
    fn test_line_number_fields() {
        let number = LineNumber::parse("A+1'a").unwrap();
        assert_eq!(
            number,
            LineNumber::new(1)
                .primed()
                .with_prefix_modifier('A')
                .with_suffix_modifier('a')
        );
    }
}
