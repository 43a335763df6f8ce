//! Render models handed to the template renderer.
//!
//! Field names are the template contract; serialization must not rename or
//! add keys.

use serde::Serialize;
use std::collections::BTreeSet;

/// Import added to every custom enum for its backing-value set.
pub const ENUM_SET_IMPORT: &str = "java.util.EnumSet";

/// Enum-wide rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Members are emitted as bare literals.
    Simple,
    /// Members carry an internal backing value.
    Custom,
}

/// Type returned by the generated value accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "String")]
    String,
}

/// Literal expression backing a custom enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Internal {
    /// Explicit backing value from the model.
    Value(i64),
    /// Quoted raw name, e.g. `"CD-ROM"` including the quotes.
    Quoted(String),
}

impl Internal {
    /// Quote a raw element name as a string literal.
    pub fn quoted(raw: &str) -> Self {
        Internal::Quoted(format!("\"{raw}\""))
    }
}

/// Per-element output record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    /// Raw element name.
    pub origin: String,
    /// Normalized identifier.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<Internal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Wrapped description lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

/// Everything the enum template needs for one enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub kind: Kind,
    pub return_type: ReturnType,
    pub package_name: String,
    pub class_name: String,
    pub params: Vec<Param>,
    pub since: Option<String>,
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub imports: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_and_return_type_literals() {
        assert_eq!(serde_json::to_value(Kind::Simple).unwrap(), json!("simple"));
        assert_eq!(serde_json::to_value(Kind::Custom).unwrap(), json!("custom"));
        assert_eq!(serde_json::to_value(ReturnType::Int).unwrap(), json!("int"));
        assert_eq!(serde_json::to_value(ReturnType::String).unwrap(), json!("String"));
    }

    #[test]
    fn internal_serializes_as_bare_literal() {
        assert_eq!(serde_json::to_value(Internal::Value(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(Internal::quoted("CD-ROM")).unwrap(),
            json!("\"CD-ROM\"")
        );
    }

    #[test]
    fn absent_param_fields_are_omitted() {
        let param = Param {
            origin: "ON".into(),
            name: "ON".into(),
            internal: None,
            since: None,
            deprecated: None,
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({ "origin": "ON", "name": "ON" })
        );
    }
}
