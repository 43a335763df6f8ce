//! Enum producer.
//!
//! Turns an [`Enum`] into the [`RenderModel`] the enum template consumes.
//! Kind and return type are decided once per enum, never per element, so the
//! generated class is uniform.

use crate::config::GeneratorConfig;
use crate::description::wrapped;
use crate::model::{Enum, EnumElement};
use crate::naming::{class_name, converted_name};
use crate::render::{ENUM_SET_IMPORT, Internal, Kind, Param, RenderModel, ReturnType};
use crate::traits::Producer;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::BTreeSet;

/// How the enum-wide return type is derived from the elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnTypePolicy {
    /// The last element decides: `int` if it has a value, `String` otherwise.
    /// Earlier elements are ignored. Matches previously generated sources.
    #[default]
    LastElement,
    /// `int` if any element has a value. Agrees with the kind decision.
    AnyElement,
}

impl ReturnTypePolicy {
    /// Infer the return type for `item`. Enums without elements are `String`.
    pub fn infer(self, item: &Enum) -> ReturnType {
        let mut elements = item.elements.values();
        let valued = match self {
            ReturnTypePolicy::LastElement => {
                elements.next_back().is_some_and(|e| e.value.is_some())
            }
            ReturnTypePolicy::AnyElement => elements.any(|e| e.value.is_some()),
        };
        if valued { ReturnType::Int } else { ReturnType::String }
    }
}

/// Decide the rendering mode for the whole enum.
///
/// One element whose name changes under normalization, or which carries an
/// explicit value, makes every member custom.
pub fn classify_kind(item: &Enum) -> Kind {
    let custom = item.elements.values().fold(false, |custom, element| {
        custom || element.value.is_some() || converted_name(&element.name) != element.name
    });
    if custom { Kind::Custom } else { Kind::Simple }
}

/// Producer for enum models.
#[derive(Debug, Clone)]
pub struct EnumsProducer {
    package_name: String,
    return_type: ReturnTypePolicy,
}

impl EnumsProducer {
    /// Producer for `package_name` with the default return-type policy.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            return_type: ReturnTypePolicy::default(),
        }
    }

    /// Producer using the package and policy from a loaded configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            package_name: config.package_name.clone(),
            return_type: config.return_type,
        }
    }

    /// Replace the return-type policy.
    pub fn with_return_type(mut self, policy: ReturnTypePolicy) -> Self {
        self.return_type = policy;
        self
    }

    /// Return-type policy in effect.
    pub fn return_type_policy(&self) -> ReturnTypePolicy {
        self.return_type
    }

    /// Transform a batch of enums in parallel. Output order matches input order.
    pub fn transform_all(&self, items: &[Enum]) -> Vec<RenderModel> {
        items.par_iter().map(|item| self.transform(item)).collect()
    }

    fn extract_param(element: &EnumElement, kind: Kind) -> Param {
        let internal = match kind {
            Kind::Custom => Some(match element.value {
                Some(value) => Internal::Value(value),
                None => Internal::quoted(&element.name),
            }),
            Kind::Simple => None,
        };

        Param {
            origin: element.name.clone(),
            name: converted_name(&element.name),
            internal,
            since: element.since.clone().filter(|since| !since.is_empty()),
            deprecated: element.deprecated.filter(|deprecated| *deprecated),
            description: wrapped(element.description.as_deref()),
        }
    }
}

impl Producer for EnumsProducer {
    type Item = Enum;
    type Output = RenderModel;

    fn name(&self) -> &'static str {
        "enums"
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn transform(&self, item: &Enum) -> RenderModel {
        let kind = classify_kind(item);
        let return_type = self.return_type.infer(item);

        let mut imports = BTreeSet::new();
        if kind == Kind::Custom {
            imports.insert(ENUM_SET_IMPORT.to_string());
        }

        // Members colliding after normalization collapse into one: first
        // position, last contents.
        let mut members: IndexMap<String, Param> = IndexMap::with_capacity(item.elements.len());
        for element in item.elements.values() {
            let param = Self::extract_param(element, kind);
            members.insert(param.name.clone(), param);
        }
        let params: Vec<Param> = members.into_values().collect();

        tracing::debug!(
            enum_name = %item.name,
            ?kind,
            ?return_type,
            params = params.len(),
            "Transformed enum"
        );

        RenderModel {
            kind,
            return_type,
            package_name: self.package_name.clone(),
            class_name: class_name(&item.name),
            params,
            since: item.since.clone(),
            deprecated: item.deprecated,
            description: wrapped(item.description.as_deref()),
            imports,
        }
    }
}
