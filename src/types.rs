//! Shared types: documentation targets and describe options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default recursion limit for [`DescribeOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are false; anything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Documentation format a descriptor is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    OpenApi,
    Postman,
}

impl Target {
    /// Parse a target name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "openapi" => Some(Target::OpenApi),
            "postman" => Some(Target::Postman),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::OpenApi => "openapi",
            Target::Postman => "postman",
        }
    }
}

/// Options for rendering a descriptor.
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    pub target: Target,
    /// Include target-specific hints (style, xml, content type, ...).
    pub hints: bool,
    /// Nesting depth past which items, properties and alternatives are dropped.
    pub max_depth: usize,
}

impl DescribeOptions {
    /// Create options for a target with hints on and the default depth limit.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            hints: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self::new(Target::default())
    }
}
