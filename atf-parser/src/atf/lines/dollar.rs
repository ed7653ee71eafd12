//! Dollar lines: physical-state statements about the tablet
//!
//!     `$ (image 1a = obverse photo)`, `$ (free text)`, `$ double ruling` and the structured
//!     state lines such as `$ at least 3 lines broken` or `$ obverse blank ?`.
//!
//!     Each kind renders its body without the `$ ` prefix; [Line](super::Line) adds it.

use serde::{Deserialize, Serialize};

/// `$ (free text)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LooseDollarLine {
    pub text: String,
}

impl LooseDollarLine {
    pub fn body(&self) -> String {
        format!("({})", self.text)
    }
}

/// `$ (image 1a = caption)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDollarLine {
    pub number: String,
    #[serde(default)]
    pub letter: Option<char>,
    pub text: String,
}

impl ImageDollarLine {
    pub fn body(&self) -> String {
        let letter = self.letter.map(String::from).unwrap_or_default();
        format!("(image {}{} = {})", self.number, letter, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ruling {
    Single,
    Double,
    Triple,
}

impl Ruling {
    pub const ALL: [Ruling; 3] = [Ruling::Single, Ruling::Double, Ruling::Triple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ruling::Single => "single",
            Ruling::Double => "double",
            Ruling::Triple => "triple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DollarStatus {
    Uncertain,
    Emendation,
    Collation,
    NeedsCollation,
}

impl DollarStatus {
    pub const ALL: [DollarStatus; 4] = [
        DollarStatus::Uncertain,
        DollarStatus::Emendation,
        DollarStatus::Collation,
        DollarStatus::NeedsCollation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DollarStatus::Uncertain => "?",
            DollarStatus::Emendation => "!",
            DollarStatus::Collation => "*",
            DollarStatus::NeedsCollation => "!?",
        }
    }
}

/// `$ single ruling`, `$ double ruling ?`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulingDollarLine {
    pub number: Ruling,
    #[serde(default)]
    pub status: Option<DollarStatus>,
}

impl RulingDollarLine {
    pub fn body(&self) -> String {
        let mut body = format!("{} ruling", self.number.as_str());
        if let Some(status) = self.status {
            body.push(' ');
            body.push_str(status.as_str());
        }
        body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Qualification {
    AtLeast,
    AtMost,
    About,
}

impl Qualification {
    pub const ALL: [Qualification; 3] = [
        Qualification::AtLeast,
        Qualification::AtMost,
        Qualification::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::AtLeast => "at least",
            Qualification::AtMost => "at most",
            Qualification::About => "about",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Extent {
    Number(u32),
    Range(u32, u32),
    Several,
    Some,
    RestOf,
    StartOf,
    BeginningOf,
    EndOf,
}

impl Extent {
    pub const KEYWORDS: [Extent; 6] = [
        Extent::Several,
        Extent::Some,
        Extent::RestOf,
        Extent::StartOf,
        Extent::BeginningOf,
        Extent::EndOf,
    ];

    pub fn atf(&self) -> String {
        match self {
            Extent::Number(number) => number.to_string(),
            Extent::Range(start, end) => format!("{}-{}", start, end),
            Extent::Several => "several".to_string(),
            Extent::Some => "some".to_string(),
            Extent::RestOf => "rest of".to_string(),
            Extent::StartOf => "start of".to_string(),
            Extent::BeginningOf => "beginning of".to_string(),
            Extent::EndOf => "end of".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    Column,
    Columns,
    Line,
    Lines,
    Case,
    Cases,
    Surface,
    Side,
    Excerpt,
}

impl Scope {
    pub const ALL: [Scope; 9] = [
        Scope::Column,
        Scope::Columns,
        Scope::Line,
        Scope::Lines,
        Scope::Case,
        Scope::Cases,
        Scope::Surface,
        Scope::Side,
        Scope::Excerpt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Column => "column",
            Scope::Columns => "columns",
            Scope::Line => "line",
            Scope::Lines => "lines",
            Scope::Case => "case",
            Scope::Cases => "cases",
            Scope::Surface => "surface",
            Scope::Side => "side",
            Scope::Excerpt => "excerpt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Surface {
    Obverse,
    Reverse,
    Left,
    Right,
    Top,
    Bottom,
    Edge,
    Face,
    Surface,
}

impl Surface {
    pub const ALL: [Surface; 9] = [
        Surface::Obverse,
        Surface::Reverse,
        Surface::Left,
        Surface::Right,
        Surface::Top,
        Surface::Bottom,
        Surface::Edge,
        Surface::Face,
        Surface::Surface,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Obverse => "obverse",
            Surface::Reverse => "reverse",
            Surface::Left => "left",
            Surface::Right => "right",
            Surface::Top => "top",
            Surface::Bottom => "bottom",
            Surface::Edge => "edge",
            Surface::Face => "face",
            Surface::Surface => "surface",
        }
    }

    pub fn label(&self) -> LabelUse {
        match self {
            Surface::Edge => LabelUse::Optional,
            Surface::Face | Surface::Surface => LabelUse::Required,
            _ => LabelUse::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Object {
    Tablet,
    Envelope,
    Prism,
    Bulla,
    Fragment,
    Object,
}

impl Object {
    pub const ALL: [Object; 6] = [
        Object::Tablet,
        Object::Envelope,
        Object::Prism,
        Object::Bulla,
        Object::Fragment,
        Object::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Object::Tablet => "tablet",
            Object::Envelope => "envelope",
            Object::Prism => "prism",
            Object::Bulla => "bulla",
            Object::Fragment => "fragment",
            Object::Object => "object",
        }
    }

    pub fn label(&self) -> LabelUse {
        match self {
            Object::Fragment | Object::Object => LabelUse::Required,
            _ => LabelUse::None,
        }
    }
}

/// Whether a surface or object keyword takes a free-text label after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelUse {
    None,
    Optional,
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScopeContainer {
    Scope {
        scope: Scope,
    },
    Surface {
        surface: Surface,
        #[serde(default)]
        text: Option<String>,
    },
    Object {
        object: Object,
        #[serde(default)]
        text: Option<String>,
    },
}

impl ScopeContainer {
    pub fn atf(&self) -> String {
        let (keyword, text) = match self {
            ScopeContainer::Scope { scope } => (scope.as_str(), None),
            ScopeContainer::Surface { surface, text } => (surface.as_str(), text.as_deref()),
            ScopeContainer::Object { object, text } => (object.as_str(), text.as_deref()),
        };
        match text {
            Some(text) => format!("{} {}", keyword, text),
            None => keyword.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Blank,
    Broken,
    Effaced,
    Illegible,
    Missing,
    Traces,
    Omitted,
    Continues,
}

impl State {
    pub const ALL: [State; 8] = [
        State::Blank,
        State::Broken,
        State::Effaced,
        State::Illegible,
        State::Missing,
        State::Traces,
        State::Omitted,
        State::Continues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::Blank => "blank",
            State::Broken => "broken",
            State::Effaced => "effaced",
            State::Illegible => "illegible",
            State::Missing => "missing",
            State::Traces => "traces",
            State::Omitted => "omitted",
            State::Continues => "continues",
        }
    }
}

/// `$ [qualification] [extent] [scope] [state] [status]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateDollarLine {
    #[serde(default)]
    pub qualification: Option<Qualification>,
    #[serde(default)]
    pub extent: Option<Extent>,
    #[serde(default)]
    pub scope: Option<ScopeContainer>,
    #[serde(default)]
    pub state: Option<State>,
    #[serde(default)]
    pub status: Option<DollarStatus>,
}

impl StateDollarLine {
    pub fn is_empty(&self) -> bool {
        self == &StateDollarLine::default()
    }

    pub fn body(&self) -> String {
        let parts = [
            self.qualification.map(|q| q.as_str().to_string()),
            self.extent.map(|e| e.atf()),
            self.scope.as_ref().map(ScopeContainer::atf),
            self.state.map(|s| s.as_str().to_string()),
            self.status.map(|s| s.as_str().to_string()),
        ];
        parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_body_joins_present_parts() {
        let line = StateDollarLine {
            qualification: Some(Qualification::AtLeast),
            extent: Some(Extent::Number(3)),
            scope: Some(ScopeContainer::Scope {
                scope: Scope::Lines,
            }),
            state: Some(State::Broken),
            status: None,
        };
        assert_eq!(line.body(), "at least 3 lines broken");
    }

    #[test]
    fn test_surface_with_label() {
        let scope = ScopeContainer::Surface {
            surface: Surface::Edge,
            text: Some("a".to_string()),
        };
        assert_eq!(scope.atf(), "edge a");
    }

    #[test]
    fn test_ruling_and_image_bodies() {
        let ruling = RulingDollarLine {
            number: Ruling::Double,
            status: Some(DollarStatus::NeedsCollation),
        };
        assert_eq!(ruling.body(), "double ruling !?");
        let image = ImageDollarLine {
            number: "1".to_string(),
            letter: Some('a'),
            text: "obverse photo".to_string(),
        };
        assert_eq!(image.body(), "(image 1a = obverse photo)");
    }
}
