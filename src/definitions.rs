//! Typed documentation objects read from semantic tags.
//!
//! A tag counts as present when it has the shape the documentation format
//! requires at minimum (usually "is an object"). Fields inside are read
//! leniently: a mistyped field reads as absent and unknown fields (such as
//! `x-` extensions) are kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discriminator of a polymorphic schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscriminatorObject {
    pub property_name: String,
    /// Discriminator values to schema references, in tag order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiscriminatorObject {
    /// A discriminator needs a non-empty `propertyName` string; nothing
    /// else about the tag is checked.
    pub fn from_tag(value: &Value) -> Option<Self> {
        let tag = value.as_object()?;
        let property_name = tag
            .get("propertyName")?
            .as_str()
            .filter(|name| !name.is_empty())?
            .to_string();
        let mapping = tag.get("mapping").and_then(Value::as_object).cloned();
        let extra = tag
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "propertyName" | "mapping"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Self {
            property_name,
            mapping,
            extra,
        })
    }

    /// Target of `value` in the mapping, if it is a string.
    pub fn mapped(&self, value: &str) -> Option<&str> {
        self.mapping.as_ref()?.get(value)?.as_str()
    }
}

/// XML representation hints, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmlObject(Map<String, Value>);

impl XmlObject {
    /// Any object is an XML hint.
    pub fn from_tag(value: &Value) -> Option<Self> {
        value.as_object().cloned().map(Self)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.0.get("namespace")?.as_str()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.0.get("prefix")?.as_str()
    }

    pub fn attribute(&self) -> Option<bool> {
        self.0.get("attribute")?.as_bool()
    }

    pub fn wrapped(&self) -> Option<bool> {
        self.0.get("wrapped")?.as_bool()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// One named example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
}

/// Encoding of one multipart / form property, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodingObject(Map<String, Value>);

impl EncodingObject {
    pub fn content_type(&self) -> Option<&str> {
        self.0.get("contentType")?.as_str()
    }

    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.0.get("headers")?.as_object()
    }

    pub fn style(&self) -> Option<&str> {
        self.0.get("style")?.as_str()
    }

    pub fn explode(&self) -> Option<bool> {
        self.0.get("explode")?.as_bool()
    }

    pub fn allow_reserved(&self) -> Option<bool> {
        self.0.get("allowReserved")?.as_bool()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Encodings keyed by property name, in tag order.
pub type EncodingMap = Vec<(String, EncodingObject)>;

/// Any object is an encoding tag. Entries that are not objects are skipped.
pub fn encoding_from_tag(value: &Value) -> Option<EncodingMap> {
    let entries = value
        .as_object()?
        .iter()
        .filter_map(|(name, encoding)| {
            let encoding = EncodingObject(encoding.as_object()?.clone());
            Some((name.clone(), encoding))
        })
        .collect();
    Some(entries)
}

/// Whether, or with which schema, extra object properties are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Map<String, Value>),
}

impl AdditionalProperties {
    pub fn from_tag(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(allowed) => Some(Self::Allowed(*allowed)),
            Value::Object(schema) => Some(Self::Schema(schema.clone())),
            _ => None,
        }
    }
}
