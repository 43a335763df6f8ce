//! Interface model entities consumed by producers.
//!
//! These are produced by an upstream loader and never mutated by the
//! transformation stage. Optional attributes are explicit `Option` fields.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A named enumeration from the interface definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Enum {
    /// Enum name as written in the interface definition.
    pub name: String,
    /// Free-form documentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Version the enum was introduced in.
    #[serde(default)]
    pub since: Option<String>,
    /// Whether the enum is deprecated.
    #[serde(default)]
    pub deprecated: Option<bool>,
    /// Elements keyed by raw name, in declaration order.
    #[serde(deserialize_with = "elements_from_seq")]
    pub elements: IndexMap<String, EnumElement>,
}

/// One member of an [`Enum`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumElement {
    /// Raw wire-format identifier. May start with a digit or contain hyphens.
    pub name: String,
    /// Explicit backing value.
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub deprecated: Option<bool>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            since: None,
            deprecated: None,
            elements: IndexMap::new(),
        }
    }

    /// Add an element, keyed by its raw name.
    ///
    /// A repeated name replaces the earlier element but keeps its position.
    pub fn with_element(mut self, element: EnumElement) -> Self {
        self.elements.insert(element.name.clone(), element);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }
}

impl EnumElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            description: None,
            since: None,
            deprecated: None,
        }
    }

    /// Element with an explicit backing value.
    pub fn valued(name: impl Into<String>, value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::new(name)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }
}

/// Elements arrive as a JSON array and are folded into the ordered map.
fn elements_from_seq<'de, D>(deserializer: D) -> Result<IndexMap<String, EnumElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let elements = Vec::<EnumElement>::deserialize(deserializer)?;
    let mut map = IndexMap::with_capacity(elements.len());
    for element in elements {
        map.insert(element.name.clone(), element);
    }
    Ok(map)
}
