//! Fluent construction of schema trees.
//!
//! ```
//! use schema_introspect::builder::{int, object, preprocess, string};
//!
//! let params = object([
//!     ("id", string().min(1.0)),
//!     ("limit", preprocess(int().min(1.0).max(55.0).default(50).optional())),
//! ]);
//! assert_eq!(params.kind(), "object");
//! ```
//!
//! Builders only record shape; nothing here validates data.

use std::sync::Arc;

use serde_json::Value;

use crate::node::{DefaultValue, EnumEntries, SchemaDef, SchemaNode, Shape};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn string_with(format: Option<&str>) -> SchemaNode {
    SchemaNode::new(SchemaDef::String {
        format: format.map(String::from),
        min_length: None,
        max_length: None,
    })
}

fn number_with(format: Option<&str>, min: Option<f64>, max: Option<f64>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Number {
        format: format.map(String::from),
        min_value: min,
        max_value: max,
    })
}

fn bigint_with(format: Option<&str>, min: Option<f64>, max: Option<f64>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Bigint {
        format: format.map(String::from),
        min_value: min,
        max_value: max,
    })
}

pub fn string() -> SchemaNode {
    string_with(None)
}

pub fn email() -> SchemaNode {
    string_with(Some("email"))
}

pub fn url() -> SchemaNode {
    string_with(Some("url"))
}

pub fn uuid() -> SchemaNode {
    string_with(Some("uuid"))
}

pub fn guid() -> SchemaNode {
    string_with(Some("guid"))
}

pub fn number() -> SchemaNode {
    number_with(None, None, None)
}

/// Safe integer: whole numbers within ±(2^53 - 1).
pub fn int() -> SchemaNode {
    number_with(Some("safeint"), Some(-MAX_SAFE_INTEGER), Some(MAX_SAFE_INTEGER))
}

pub fn int32() -> SchemaNode {
    number_with(
        Some("int32"),
        Some(f64::from(i32::MIN)),
        Some(f64::from(i32::MAX)),
    )
}

pub fn uint32() -> SchemaNode {
    number_with(Some("uint32"), Some(0.0), Some(f64::from(u32::MAX)))
}

pub fn float32() -> SchemaNode {
    number_with(
        Some("float32"),
        Some(f64::from(f32::MIN)),
        Some(f64::from(f32::MAX)),
    )
}

pub fn float64() -> SchemaNode {
    number_with(Some("float64"), Some(f64::MIN), Some(f64::MAX))
}

pub fn bigint() -> SchemaNode {
    bigint_with(None, None, None)
}

pub fn int64() -> SchemaNode {
    bigint_with(Some("int64"), Some(i64::MIN as f64), Some(i64::MAX as f64))
}

pub fn uint64() -> SchemaNode {
    bigint_with(Some("uint64"), Some(0.0), Some(u64::MAX as f64))
}

pub fn boolean() -> SchemaNode {
    SchemaNode::new(SchemaDef::Boolean)
}

pub fn date() -> SchemaNode {
    SchemaNode::new(SchemaDef::Date)
}

pub fn file() -> SchemaNode {
    SchemaNode::new(SchemaDef::File)
}

pub fn any() -> SchemaNode {
    SchemaNode::new(SchemaDef::Any)
}

/// Enumeration over a list of choices.
pub fn enumeration<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Enum {
        entries: EnumEntries::Sequence(values.into_iter().map(Into::into).collect()),
    })
}

/// Enumeration over named choices, like a native enum object.
pub fn native_enum<K: Into<String>, V: Into<Value>>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> SchemaNode {
    SchemaNode::new(SchemaDef::Enum {
        entries: EnumEntries::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ),
    })
}

pub fn literal(value: impl Into<Value>) -> SchemaNode {
    literals([value])
}

/// A literal accepting several values.
pub fn literals<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Literal {
        values: values.into_iter().map(Into::into).collect(),
    })
}

pub fn array(element: SchemaNode) -> SchemaNode {
    SchemaNode::new(SchemaDef::Array {
        element: Arc::new(element),
        minimum: None,
        maximum: None,
    })
}

pub fn object<K: Into<String>>(
    properties: impl IntoIterator<Item = (K, SchemaNode)>,
) -> SchemaNode {
    SchemaNode::new(SchemaDef::Object {
        shape: properties.into_iter().collect::<Shape>(),
    })
}

pub fn record(key: SchemaNode, value: SchemaNode) -> SchemaNode {
    SchemaNode::new(SchemaDef::Record {
        key_type: Arc::new(key),
        value_type: Arc::new(value),
    })
}

pub fn union(options: impl IntoIterator<Item = SchemaNode>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Union {
        options: options.into_iter().map(Arc::new).collect(),
    })
}

pub fn tuple(items: impl IntoIterator<Item = SchemaNode>) -> SchemaNode {
    SchemaNode::new(SchemaDef::Tuple {
        items: items.into_iter().map(Arc::new).collect(),
    })
}

pub fn transform() -> SchemaNode {
    SchemaNode::new(SchemaDef::Transform)
}

pub fn pipe(input: SchemaNode, output: SchemaNode) -> SchemaNode {
    SchemaNode::new(SchemaDef::Pipe {
        input: Arc::new(input),
        output: Arc::new(output),
    })
}

/// Run a coercion step before `schema`: `pipe(transform, schema)`.
pub fn preprocess(schema: SchemaNode) -> SchemaNode {
    pipe(transform(), schema)
}

impl SchemaNode {
    /// Lower bound: length for strings, value for numbers, element count for arrays.
    /// Other kinds are returned unchanged.
    pub fn min(mut self, bound: f64) -> Self {
        match &mut self.def {
            SchemaDef::String { min_length, .. } => *min_length = Some(bound),
            SchemaDef::Number { min_value, .. } | SchemaDef::Bigint { min_value, .. } => {
                *min_value = Some(bound)
            }
            SchemaDef::Array { minimum, .. } => *minimum = Some(bound),
            _ => {}
        }
        self
    }

    /// Upper bound, see [`SchemaNode::min`].
    pub fn max(mut self, bound: f64) -> Self {
        match &mut self.def {
            SchemaDef::String { max_length, .. } => *max_length = Some(bound),
            SchemaDef::Number { max_value, .. } | SchemaDef::Bigint { max_value, .. } => {
                *max_value = Some(bound)
            }
            SchemaDef::Array { maximum, .. } => *maximum = Some(bound),
            _ => {}
        }
        self
    }

    /// Set the format hint of a string, number or bigint node.
    pub fn format(mut self, hint: impl Into<String>) -> Self {
        match &mut self.def {
            SchemaDef::String { format, .. }
            | SchemaDef::Number { format, .. }
            | SchemaDef::Bigint { format, .. } => *format = Some(hint.into()),
            _ => {}
        }
        self
    }

    pub fn optional(self) -> Self {
        Self::new(SchemaDef::Optional {
            inner_type: Arc::new(self),
        })
    }

    pub fn nullable(self) -> Self {
        Self::new(SchemaDef::Nullable {
            inner_type: Arc::new(self),
        })
    }

    pub fn readonly(self) -> Self {
        Self::new(SchemaDef::Readonly {
            inner_type: Arc::new(self),
        })
    }

    pub fn default(self, value: impl Into<Value>) -> Self {
        Self::new(SchemaDef::Default {
            inner_type: Arc::new(self),
            default_value: DefaultValue::Value(value.into()),
        })
    }

    /// Default computed on every read.
    pub fn default_with(self, produce: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::new(SchemaDef::Default {
            inner_type: Arc::new(self),
            default_value: DefaultValue::Producer(Arc::new(produce)),
        })
    }

    /// Merge the entries of `tags` (a JSON object) into this node's tag bag.
    /// Non-object values are ignored.
    pub fn meta(mut self, tags: Value) -> Self {
        if let Value::Object(tags) = tags {
            self.meta.extend(tags);
        }
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.meta
            .insert("description".into(), Value::String(description.into()));
        self
    }

    /// Post-process the parsed value: `pipe(self, transform)`.
    pub fn transform(self) -> Self {
        pipe(self, transform())
    }

    pub fn pipe(self, output: SchemaNode) -> Self {
        pipe(self, output)
    }
}
