//! Dict form
//!
//!     Texts, lines and tokens serialize to plain maps through serde. Derived keys (`value`,
//!     `prefix`, `lemmatizable`, ...) are written for consumers but ignored when loading, so
//!     `from_dict(to_dict(text)) == text` holds exactly.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid dict: {0}")]
pub struct DictError(#[from] serde_json::Error);

pub fn to_dict<T: Serialize>(value: &T) -> Result<Value, DictError> {
    Ok(serde_json::to_value(value)?)
}

pub fn from_dict<T: DeserializeOwned>(dict: Value) -> Result<T, DictError> {
    Ok(serde_json::from_value(dict)?)
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, DictError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, DictError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::text::Text;
    use crate::atf::testing::factories::{lemmatized, reading, text_line, word};

    #[test]
    fn test_text_dict_round_trip() {
        let text = Text::new(vec![text_line(
            1,
            vec![lemmatized(word(vec![reading("kur")]), "šadû I")],
        )]);
        let dict = to_dict(&text).unwrap();
        assert_eq!(dict["parser_version"], crate::atf::ATF_PARSER_VERSION);
        assert_eq!(dict["lines"][0]["content"][0]["uniqueLemma"][0], "šadû I");
        let loaded: Text = from_dict(dict).unwrap();
        assert_eq!(loaded, text);
    }

    #[test]
    fn test_invalid_dict() {
        let error = from_json::<Text>("{\"lines\": 3}").unwrap_err();
        assert!(error.to_string().starts_with("invalid dict:"));
    }
}
