//! Wire-level schema model.
//!
//! These types serialize straight into the `parameters` object of a
//! function-calling tool declaration (OpenAI tools, MCP `inputSchema`, …),
//! so the serde attributes follow the JSON-Schema spelling: the kind is
//! emitted under `type`, enum literals under `enum`, and unset members are
//! skipped entirely.
//!
//! `properties` is a [`BTreeMap`] on purpose: property names are unique and
//! their order carries no meaning, but sorted keys keep the serialized form
//! stable across runs (snapshot tests, prompt caching).

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// JSON-Schema type names the reflector can emit.
///
/// `null` and the schema-less Rust kinds never appear here; they surface as
/// [`crate::SchemaError`] during derivation instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
}

/// One node of the derived schema tree: the root, an object member or an
/// array element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: DataType,
    /// Human-readable text sourced from the `description` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Element schema, present exactly when `kind` is [`DataType::Array`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
    /// Member schemas, present when `kind` is [`DataType::Object`] — except
    /// for string-keyed map fields, which stay open (no declared members).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Property>>,
    /// Names of members that must appear, in field declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Permitted literal values, converted to the field's primitive kind.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Default literal, converted to the field's primitive kind (kept as raw
    /// text for composite kinds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Property {
    /// A bare property of the given kind with every optional member unset.
    pub fn new(kind: DataType) -> Self {
        Self {
            kind,
            description: None,
            items: None,
            properties: None,
            required: None,
            enum_values: None,
            default: None,
        }
    }
}

/// Top-level result of a derivation: always an object, holding only the
/// member table and the required list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootSchema {
    #[serde(rename = "type")]
    pub kind: DataType,
    pub properties: BTreeMap<String, Property>,
    pub required: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_serializes_lowercase() {
        let json = serde_json::to_value(DataType::Integer).unwrap();
        assert_eq!(json, serde_json::json!("integer"));
    }

    #[test]
    fn unset_members_are_skipped() {
        let json = serde_json::to_value(Property::new(DataType::String)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "string" }));
    }
}
