//! JSON model loader.
//!
//! Reads enums from an already-parsed interface model. Accepted shapes are a
//! top-level array of enums or an object with an `enums` array.

use crate::model::Enum;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid enum model: {0}")]
    Model(#[from] serde_json::Error),
    #[error("unsupported document: {0}")]
    Unsupported(String),
}

/// Parse enums from a JSON document.
pub fn parse_enums(input: &Value) -> Result<Vec<Enum>, ParseError> {
    let enums = match input {
        Value::Array(_) => input,
        Value::Object(obj) => obj.get("enums").ok_or_else(|| {
            ParseError::Unsupported("expected an `enums` array at the top level".to_string())
        })?,
        other => {
            return Err(ParseError::Unsupported(format!(
                "expected an array or object, found {}",
                json_kind(other)
            )));
        }
    };
    Ok(Vec::<Enum>::deserialize(enums)?)
}

/// Parse enums from JSON text.
pub fn parse_enums_str(content: &str) -> Result<Vec<Enum>, ParseError> {
    let value: Value = serde_json::from_str(content)?;
    parse_enums(&value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_top_level_array() {
        let enums = parse_enums(&json!([
            { "name": "Light", "elements": [{ "name": "ON" }, { "name": "OFF" }] },
            { "name": "Media", "elements": [{ "name": "CD-ROM" }] }
        ]))
        .unwrap();
        assert_eq!(enums.len(), 2);
        assert_eq!(enums[0].name, "Light");
        assert_eq!(enums[1].elements["CD-ROM"].name, "CD-ROM");
    }

    #[test]
    fn parse_enums_key() {
        let enums = parse_enums(&json!({
            "enums": [{ "name": "Light", "since": "1.0", "elements": [] }]
        }))
        .unwrap();
        assert_eq!(enums[0].since.as_deref(), Some("1.0"));
        assert!(enums[0].elements.is_empty());
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = parse_enums(&json!([{ "elements": [] }])).unwrap_err();
        assert!(matches!(err, ParseError::Model(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn missing_element_name_is_an_error() {
        let err = parse_enums(&json!([{ "name": "Light", "elements": [{ "value": 1 }] }]))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn object_without_enums_is_unsupported() {
        let err = parse_enums(&json!({ "structs": [] })).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported(_)));
    }

    #[test]
    fn scalar_document_is_unsupported() {
        let err = parse_enums(&json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported document: expected an array or object, found a number"
        );
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(matches!(parse_enums_str("[{"), Err(ParseError::Model(_))));
    }
}
