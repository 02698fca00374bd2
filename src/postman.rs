//! Postman format adapter.

use serde_json::{Map, Value};

use crate::definitions::XmlObject;
use crate::handle::SchemaHandle;
use crate::helper::DocHelper;

/// Describes a schema for a Postman collection.
#[derive(Debug, Clone, Default)]
pub struct PostmanHelper {
    handle: SchemaHandle,
}

impl DocHelper for PostmanHelper {
    fn from_handle(handle: SchemaHandle) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &SchemaHandle {
        &self.handle
    }

    fn hints(&self) -> Map<String, Value> {
        let mut hints = Map::new();
        if let Some(content_type) = self.content_type() {
            hints.insert("contentType".into(), Value::String(content_type.into()));
        }
        if let Some(description_type) = self.description_type() {
            hints.insert(
                "descriptionType".into(),
                Value::String(description_type.into()),
            );
        }
        if let Some(xml) = self.xml().and_then(|xml| serde_json::to_value(xml).ok()) {
            hints.insert("xml".into(), xml);
        }
        hints
    }
}

impl PostmanHelper {
    pub fn has_content_type(&self) -> bool {
        self.content_type().is_some()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.handle.meta_str("contentType")
    }

    pub fn has_description_type(&self) -> bool {
        self.description_type().is_some()
    }

    /// Format of the description text (e.g. `text/markdown`).
    pub fn description_type(&self) -> Option<&str> {
        self.handle.meta_str("descriptionType")
    }

    pub fn has_xml(&self) -> bool {
        self.xml().is_some()
    }

    pub fn xml(&self) -> Option<XmlObject> {
        XmlObject::from_tag(self.handle.get_meta("xml")?)
    }
}
