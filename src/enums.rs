//! Enum value extraction.

use serde_json::Value;

use crate::handle::SchemaHandle;
use crate::node::SchemaDef;

impl SchemaHandle {
    /// Choices of the nearest `enum` layer, or else the literal values of the
    /// nearest `union` layer's literal branches, in branch order.
    pub fn enum_values(&self) -> Vec<Value> {
        if let Some(SchemaDef::Enum { entries }) = self.find_layer("enum").map(|node| &node.def) {
            return entries.values();
        }
        match self.find_layer("union").map(|node| &node.def) {
            Some(SchemaDef::Union { options }) => options
                .iter()
                .filter_map(|option| match &option.def {
                    SchemaDef::Literal { values } => Some(values.iter().cloned()),
                    _ => None,
                })
                .flatten()
                .collect(),
            _ => Vec::new(),
        }
    }
}
