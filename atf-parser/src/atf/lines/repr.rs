//! Dict form of lines: `{"type", "prefix", "content", ...kind specific fields}`

use serde::{Serialize, Serializer};

use super::dollar::{ImageDollarLine, LooseDollarLine, RulingDollarLine, StateDollarLine};
use super::label::LineLabel;
use super::note::NoteLine;
use super::Line;
use crate::atf::tokens::Token;

#[derive(Serialize)]
struct Tagged<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    prefix: String,
    content: Vec<Token>,
    #[serde(flatten)]
    body: Body<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Body<'a> {
    Text {
        #[serde(rename = "lineNumber")]
        line_number: &'a LineLabel,
    },
    Loose(&'a LooseDollarLine),
    Image(&'a ImageDollarLine),
    Ruling(&'a RulingDollarLine),
    State(&'a StateDollarLine),
    Note(&'a NoteLine),
    Bare,
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Line::TextLine(line) => Body::Text {
                line_number: &line.line_number,
            },
            Line::LooseDollarLine(line) => Body::Loose(line),
            Line::ImageDollarLine(line) => Body::Image(line),
            Line::RulingDollarLine(line) => Body::Ruling(line),
            Line::StateDollarLine(line) => Body::State(line),
            Line::NoteLine(line) => Body::Note(line),
            Line::EmptyLine | Line::ControlLine(_) => Body::Bare,
        };
        Tagged {
            kind: self.kind_name(),
            prefix: self.prefix(),
            content: self.content(),
            body,
        }
        .serialize(serializer)
    }
}
