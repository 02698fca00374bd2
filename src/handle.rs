//! Schema handle - the shared introspection core.
//!
//! A [`SchemaHandle`] wraps one schema node, or nothing when it was built
//! from a value that is not a schema node. Every accessor on an invalid
//! handle returns an "absent" result (`false`, `""`, `None`, empty).

use std::sync::Arc;

use serde_json::Value;

use crate::node::{SchemaDef, SchemaNode};
use crate::types::is_truthy;

/// Input accepted when constructing a handle or helper.
#[derive(Debug, Clone)]
pub struct HelperInput {
    pub value: InputValue,
    /// Accepted for interface compatibility; has no effect.
    pub is_root: bool,
}

/// A schema node, or an arbitrary JSON value that may describe one.
#[derive(Debug, Clone)]
pub enum InputValue {
    Node(Arc<SchemaNode>),
    Raw(Value),
}

impl HelperInput {
    pub fn new(value: impl Into<InputValue>) -> Self {
        Self {
            value: value.into(),
            is_root: false,
        }
    }

    pub fn root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }
}

impl From<SchemaNode> for InputValue {
    fn from(node: SchemaNode) -> Self {
        Self::Node(Arc::new(node))
    }
}

impl From<Arc<SchemaNode>> for InputValue {
    fn from(node: Arc<SchemaNode>) -> Self {
        Self::Node(node)
    }
}

impl From<Value> for InputValue {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<SchemaNode> for HelperInput {
    fn from(node: SchemaNode) -> Self {
        Self::new(node)
    }
}

impl From<Arc<SchemaNode>> for HelperInput {
    fn from(node: Arc<SchemaNode>) -> Self {
        Self::new(node)
    }
}

impl From<Value> for HelperInput {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Read-only view over one schema node.
#[derive(Debug, Clone, Default)]
pub struct SchemaHandle {
    node: Option<Arc<SchemaNode>>,
}

impl SchemaHandle {
    /// Build a handle. Raw JSON values are accepted only if they parse as a
    /// schema node document; anything else yields an invalid handle.
    pub fn new(input: impl Into<HelperInput>) -> Self {
        let input = input.into();
        let node = match input.value {
            InputValue::Node(node) => Some(node),
            InputValue::Raw(value @ Value::Object(_)) => {
                match serde_json::from_value::<SchemaNode>(value) {
                    Ok(node) => Some(Arc::new(node)),
                    Err(err) => {
                        tracing::debug!(
                            is_root = input.is_root,
                            error = %err,
                            "value is not a schema node"
                        );
                        None
                    }
                }
            }
            InputValue::Raw(other) => {
                tracing::debug!(
                    is_root = input.is_root,
                    kind = crate::types::json_type_name(&other),
                    "value is not a schema node"
                );
                None
            }
        };
        Self { node }
    }

    pub(crate) fn from_node(node: &Arc<SchemaNode>) -> Self {
        Self {
            node: Some(Arc::clone(node)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// The node exactly as wrapped, without unwrapping modifiers.
    pub fn node(&self) -> Option<&SchemaNode> {
        self.node.as_deref()
    }

    /// Own `description` tag, falling back to the most-inner node's.
    pub fn description(&self) -> String {
        let own = self.meta_str("description");
        let inner = || {
            self.most_inner()
                .and_then(|node| node.meta.get("description"))
                .and_then(Value::as_str)
        };
        own.or_else(inner).unwrap_or_default().to_string()
    }

    /// False when an `optional` layer is present, or the handle is invalid.
    pub fn is_required(&self) -> bool {
        self.is_valid() && self.optional_layer().is_none()
    }

    pub fn is_unique(&self) -> bool {
        self.get_meta("uniqueItems") == Some(&Value::Bool(true))
    }

    pub fn is_deprecated(&self) -> bool {
        self.get_meta("deprecated").is_some_and(is_truthy)
    }

    pub fn has_default_value(&self) -> bool {
        self.default_layer().is_some()
    }

    /// The stored default, invoking its producer when it has one.
    pub fn default_value(&self) -> Option<Value> {
        match &self.default_layer()?.def {
            SchemaDef::Default { default_value, .. } => Some(default_value.get()),
            _ => None,
        }
    }

    pub fn has_example_value(&self) -> bool {
        self.example_value().is_some()
    }

    /// First entry of a non-empty `examples` tag.
    pub fn example_value(&self) -> Option<Value> {
        self.get_meta("examples")?.as_array()?.first().cloned()
    }

    pub fn allows_empty_value(&self) -> bool {
        match self.most_inner().map(|node| &node.def) {
            Some(SchemaDef::Enum { entries }) => entries.contains(&Value::String(String::new())),
            Some(SchemaDef::String { min_length, .. }) => min_length.map_or(true, |m| m == 0.0),
            _ => false,
        }
    }

    pub fn unit(&self) -> String {
        self.meta_str("unit").unwrap_or_default().to_string()
    }

    /// Element of the most-inner array node.
    pub fn first_item(&self) -> Option<SchemaHandle> {
        match &self.most_inner()?.def {
            SchemaDef::Array { element, .. } => Some(Self::from_node(element)),
            _ => None,
        }
    }

    /// Properties of the most-inner object node, in declaration order.
    pub fn children(&self) -> Vec<(String, SchemaHandle)> {
        match self.most_inner().map(|node| &node.def) {
            Some(SchemaDef::Object { shape }) => shape
                .iter()
                .map(|(name, node)| (name.to_string(), Self::from_node(node)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Non-literal branches of the nearest union layer.
    pub fn alternatives(&self) -> Vec<SchemaHandle> {
        match self.find_layer("union").map(|node| &node.def) {
            Some(SchemaDef::Union { options }) => options
                .iter()
                .filter(|option| !option.is_kind("literal"))
                .map(Self::from_node)
                .collect(),
            _ => Vec::new(),
        }
    }
}
