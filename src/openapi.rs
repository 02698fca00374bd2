//! OpenAPI format adapter.

use serde_json::{Map, Value};

use crate::definitions::{
    encoding_from_tag, AdditionalProperties, DiscriminatorObject, EncodingMap, ExampleObject,
    XmlObject,
};
use crate::handle::SchemaHandle;
use crate::helper::DocHelper;

/// Describes a schema for an OpenAPI document.
#[derive(Debug, Clone, Default)]
pub struct OpenApiHelper {
    handle: SchemaHandle,
}

impl DocHelper for OpenApiHelper {
    fn from_handle(handle: SchemaHandle) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &SchemaHandle {
        &self.handle
    }

    fn hints(&self) -> Map<String, Value> {
        let mut hints = Map::new();
        if let Some(style) = self.style() {
            hints.insert("style".into(), Value::String(style.into()));
        }
        if let Some(additional) = self.additional_properties() {
            hints.insert("additionalProperties".into(), to_json(&additional));
        }
        if let Some(reference) = self.reference() {
            hints.insert("$ref".into(), Value::String(reference.into()));
        }
        if let Some(discriminator) = self.discriminator() {
            hints.insert("discriminator".into(), to_json(&discriminator));
        }
        if let Some(xml) = self.xml() {
            hints.insert("xml".into(), to_json(&xml));
        }
        if let Some(examples) = self.examples() {
            let examples = examples
                .iter()
                .map(|(key, example)| (key.clone(), to_json(example)))
                .collect();
            hints.insert("examples".into(), Value::Object(examples));
        }
        if let Some(encoding) = self.encoding() {
            let encoding = encoding
                .iter()
                .map(|(name, encoding)| (name.clone(), to_json(encoding)))
                .collect();
            hints.insert("encoding".into(), Value::Object(encoding));
        }
        hints
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl OpenApiHelper {
    pub fn has_style(&self) -> bool {
        self.style().is_some()
    }

    /// Parameter serialization style (`form`, `simple`, ...).
    pub fn style(&self) -> Option<&str> {
        self.handle.meta_str("style")
    }

    pub fn has_additional_properties(&self) -> bool {
        self.additional_properties().is_some()
    }

    pub fn additional_properties(&self) -> Option<AdditionalProperties> {
        AdditionalProperties::from_tag(self.handle.get_meta("additionalProperties")?)
    }

    pub fn has_ref(&self) -> bool {
        self.reference().is_some()
    }

    /// The `ref` tag: a reference to a reusable component.
    pub fn reference(&self) -> Option<&str> {
        self.handle.meta_str("ref")
    }

    pub fn has_discriminator(&self) -> bool {
        self.discriminator().is_some()
    }

    pub fn discriminator(&self) -> Option<DiscriminatorObject> {
        DiscriminatorObject::from_tag(self.handle.get_meta("discriminator")?)
    }

    pub fn has_xml(&self) -> bool {
        self.xml().is_some()
    }

    pub fn xml(&self) -> Option<XmlObject> {
        XmlObject::from_tag(self.handle.get_meta("xml")?)
    }

    pub fn has_examples(&self) -> bool {
        self.examples().is_some()
    }

    /// The `examples` tag as named examples `"1"`, `"2"`, ... in order.
    pub fn examples(&self) -> Option<Vec<(String, ExampleObject)>> {
        let examples = self.handle.get_meta("examples")?.as_array()?;
        if examples.is_empty() {
            return None;
        }
        Some(
            examples
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let example = ExampleObject {
                        value: Some(value.clone()),
                        ..ExampleObject::default()
                    };
                    ((i + 1).to_string(), example)
                })
                .collect(),
        )
    }

    pub fn has_encoding(&self) -> bool {
        self.encoding().is_some()
    }

    pub fn encoding(&self) -> Option<EncodingMap> {
        encoding_from_tag(self.handle.get_meta("encoding")?)
    }
}
