//! Semantic tag access.
//!
//! Tags are read from the node the handle references, exactly as wrapped.
//! Nothing is merged across modifier layers.

use serde_json::Value;

use crate::handle::SchemaHandle;

impl SchemaHandle {
    pub fn has_meta(&self, name: &str) -> bool {
        self.get_meta(name).is_some()
    }

    pub fn get_meta(&self, name: &str) -> Option<&Value> {
        self.node()?.meta.get(name)
    }

    /// A tag, only if it holds a string.
    pub fn meta_str(&self, name: &str) -> Option<&str> {
        self.get_meta(name)?.as_str()
    }

    /// A tag, only if it holds a JSON object.
    pub fn meta_object(&self, name: &str) -> Option<&serde_json::Map<String, Value>> {
        self.get_meta(name)?.as_object()
    }
}
