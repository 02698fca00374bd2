//! Schema node model.
//!
//! A [`SchemaNode`] is one node of a validation-schema tree. Each kind is a
//! variant of [`SchemaDef`] carrying only the fields that kind has, so
//! introspection is a pattern match instead of probing for fields.
//!
//! Nodes serialize to a JSON "schema document":
//!
//! ```json
//! {
//!   "type": "optional",
//!   "innerType": { "type": "string", "format": "email", "minLength": 3 },
//!   "meta": { "description": "contact address" }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One node of a schema tree plus its semantic tag bag.
///
/// Deserializing requires a string `"type"` tag naming a known kind, at
/// every level of the tree.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaNode {
    #[serde(flatten)]
    pub def: SchemaDef,
    /// Free-form documentation tags (description, examples, unit, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl SchemaNode {
    pub fn new(def: SchemaDef) -> Self {
        Self {
            def,
            meta: Map::new(),
        }
    }

    /// The discriminant string of this node (`"string"`, `"optional"`, ...).
    pub fn kind(&self) -> &'static str {
        self.def.kind()
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind() == kind
    }
}

#[derive(Deserialize)]
struct TaggedNode {
    #[serde(flatten)]
    def: SchemaDef,
    #[serde(default)]
    meta: Map<String, Value>,
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        // A buffered internal tag would accept an integer as a variant index.
        if !value.get("type").is_some_and(Value::is_string) {
            return Err(D::Error::custom("schema node needs a string \"type\" tag"));
        }
        let TaggedNode { def, meta } = serde_json::from_value(value).map_err(D::Error::custom)?;
        Ok(Self { def, meta })
    }
}

impl From<SchemaDef> for SchemaNode {
    fn from(def: SchemaDef) -> Self {
        Self::new(def)
    }
}

/// Kind-specific content of a [`SchemaNode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SchemaDef {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<f64>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
    },
    Bigint {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
    },
    Boolean,
    Date,
    Null,
    Undefined,
    Void,
    Any,
    Unknown,
    Never,
    Symbol,
    Nan,
    File,
    Custom,
    TemplateLiteral,
    /// A data transform step; opaque to introspection.
    Transform,
    Enum {
        entries: EnumEntries,
    },
    Literal {
        values: Vec<Value>,
    },
    Array {
        element: Arc<SchemaNode>,
        /// Element-count statistics recorded by the builder.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<f64>,
    },
    Object {
        shape: Shape,
    },
    Record {
        key_type: Arc<SchemaNode>,
        value_type: Arc<SchemaNode>,
    },
    Tuple {
        items: Vec<Arc<SchemaNode>>,
    },
    Union {
        options: Vec<Arc<SchemaNode>>,
    },
    Intersection {
        left: Arc<SchemaNode>,
        right: Arc<SchemaNode>,
    },
    Map {
        key_type: Arc<SchemaNode>,
        value_type: Arc<SchemaNode>,
    },
    Set {
        value_type: Arc<SchemaNode>,
    },
    Optional {
        inner_type: Arc<SchemaNode>,
    },
    Nullable {
        inner_type: Arc<SchemaNode>,
    },
    Readonly {
        inner_type: Arc<SchemaNode>,
    },
    Nonoptional {
        inner_type: Arc<SchemaNode>,
    },
    Catch {
        inner_type: Arc<SchemaNode>,
    },
    Prefault {
        inner_type: Arc<SchemaNode>,
    },
    Default {
        inner_type: Arc<SchemaNode>,
        default_value: DefaultValue,
    },
    /// Input schema piped into an output schema.
    Pipe {
        #[serde(rename = "in")]
        input: Arc<SchemaNode>,
        #[serde(rename = "out")]
        output: Arc<SchemaNode>,
    },
}

impl SchemaDef {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Number { .. } => "number",
            Self::Bigint { .. } => "bigint",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Symbol => "symbol",
            Self::Nan => "nan",
            Self::File => "file",
            Self::Custom => "custom",
            Self::TemplateLiteral => "template_literal",
            Self::Transform => "transform",
            Self::Enum { .. } => "enum",
            Self::Literal { .. } => "literal",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
            Self::Record { .. } => "record",
            Self::Tuple { .. } => "tuple",
            Self::Union { .. } => "union",
            Self::Intersection { .. } => "intersection",
            Self::Map { .. } => "map",
            Self::Set { .. } => "set",
            Self::Optional { .. } => "optional",
            Self::Nullable { .. } => "nullable",
            Self::Readonly { .. } => "readonly",
            Self::Nonoptional { .. } => "nonoptional",
            Self::Catch { .. } => "catch",
            Self::Prefault { .. } => "prefault",
            Self::Default { .. } => "default",
            Self::Pipe { .. } => "pipe",
        }
    }

    /// The wrapped node of a single-inner modifier layer.
    pub fn inner_type(&self) -> Option<&Arc<SchemaNode>> {
        match self {
            Self::Optional { inner_type }
            | Self::Nullable { inner_type }
            | Self::Readonly { inner_type }
            | Self::Nonoptional { inner_type }
            | Self::Catch { inner_type }
            | Self::Prefault { inner_type }
            | Self::Default { inner_type, .. } => Some(inner_type),
            _ => None,
        }
    }
}

/// Choices of an enumerated node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumEntries {
    /// Plain list of choices, in declaration order.
    Sequence(Vec<Value>),
    /// Named choices; values are reported in key order.
    Mapping(Map<String, Value>),
}

impl EnumEntries {
    pub fn values(&self) -> Vec<Value> {
        match self {
            Self::Sequence(values) => values.clone(),
            Self::Mapping(map) => map.values().cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Sequence(values) => values.is_empty(),
            Self::Mapping(map) => map.is_empty(),
        }
    }

    pub fn first(&self) -> Option<&Value> {
        match self {
            Self::Sequence(values) => values.first(),
            Self::Mapping(map) => map.values().next(),
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::Sequence(values) => values.contains(value),
            Self::Mapping(map) => map.values().any(|v| v == value),
        }
    }
}

type Producer = Arc<dyn Fn() -> Value + Send + Sync>;

/// Stored default of a `default` layer: a concrete value or a producer
/// invoked on every read.
#[derive(Clone)]
pub enum DefaultValue {
    Value(Value),
    Producer(Producer),
}

impl DefaultValue {
    pub fn get(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(DefaultValue::Value)
    }
}

/// Properties of an object node, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Shape(Vec<(String, Arc<SchemaNode>)>);

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Arc<SchemaNode>>) {
        let name = name.into();
        let node = node.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = node,
            None => self.0.push((name, node)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<SchemaNode>> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<SchemaNode>)> {
        self.0.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaNode)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, SchemaNode)>>(iter: I) -> Self {
        let mut shape = Shape::new();
        for (name, node) in iter {
            shape.insert(name, node);
        }
        shape
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, node) in &self.0 {
            map.serialize_entry(name, node.as_ref())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = Shape;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property names to schema nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Shape, A::Error> {
                let mut shape = Shape::new();
                while let Some((name, node)) = access.next_entry::<String, SchemaNode>()? {
                    shape.insert(name, node);
                }
                Ok(shape)
            }
        }

        deserializer.deserialize_map(ShapeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_matches_serialized_tag() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "template_literal"
        }))
        .unwrap();
        assert_eq!(node.kind(), "template_literal");

        let node: SchemaNode = serde_json::from_value(json!({
            "type": "nonoptional",
            "innerType": { "type": "string" }
        }))
        .unwrap();
        assert_eq!(node.kind(), "nonoptional");
    }

    #[test]
    fn parses_nested_document() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "optional",
            "innerType": {
                "type": "string",
                "format": "email",
                "minLength": 3,
                "meta": { "description": "contact" }
            }
        }))
        .unwrap();

        let inner = node.def.inner_type().unwrap();
        assert_eq!(inner.kind(), "string");
        assert_eq!(inner.meta["description"], "contact");
        match &inner.def {
            SchemaDef::String {
                format, min_length, ..
            } => {
                assert_eq!(format.as_deref(), Some("email"));
                assert_eq!(*min_length, Some(3.0));
            }
            other => panic!("expected string, got {:?}", other),
        }
    }

    #[test]
    fn object_shape_keeps_declaration_order() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "object",
            "shape": {
                "zeta": { "type": "string" },
                "alpha": { "type": "number" },
                "mid": { "type": "boolean" }
            }
        }))
        .unwrap();

        let SchemaDef::Object { shape } = &node.def else {
            panic!("expected object");
        };
        let names: Vec<&str> = shape.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn pipe_uses_in_and_out_keys() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "pipe",
            "in": { "type": "transform" },
            "out": { "type": "number" }
        }))
        .unwrap();
        let SchemaDef::Pipe { input, output } = &node.def else {
            panic!("expected pipe");
        };
        assert_eq!(input.kind(), "transform");
        assert_eq!(output.kind(), "number");

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["in"]["type"], "transform");
        assert_eq!(back["out"]["type"], "number");
    }

    #[test]
    fn enum_mapping_values_follow_key_order() {
        let entries: EnumEntries =
            serde_json::from_value(json!({ "one": 1, "two": 2, "three": 3 })).unwrap();
        assert_eq!(entries.values(), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(entries.first(), Some(&json!(1)));
    }

    #[test]
    fn default_producer_serializes_produced_value() {
        let def = DefaultValue::Producer(Arc::new(|| json!("generated")));
        assert_eq!(serde_json::to_value(&def).unwrap(), json!("generated"));
        assert_eq!(format!("{:?}", def), "Producer(..)");
    }

    #[test]
    fn missing_type_tag_is_rejected() {
        let result = serde_json::from_value::<SchemaNode>(json!({
            "params": { "type": "object", "shape": {} }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn numeric_type_tag_is_rejected() {
        for tag in [json!(0), json!(5), json!(true), json!(null)] {
            let result = serde_json::from_value::<SchemaNode>(json!({ "type": tag }));
            assert!(result.is_err(), "accepted type tag {}", tag);
        }
    }

    #[test]
    fn nested_numeric_type_tag_is_rejected() {
        let result = serde_json::from_value::<SchemaNode>(json!({
            "type": "optional",
            "innerType": { "type": 3 }
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<SchemaNode>(json!({
            "type": "object",
            "shape": { "id": { "type": 0 } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn meta_survives_custom_deserialize() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "number",
            "maxValue": 4,
            "meta": { "unit": "ms" }
        }))
        .unwrap();
        assert_eq!(node.meta["unit"], "ms");
        assert!(matches!(node.def, SchemaDef::Number { max_value: Some(m), .. } if m == 4.0));
    }

    #[test]
    fn enum_entries_emptiness() {
        assert!(EnumEntries::Sequence(Vec::new()).is_empty());
        assert!(EnumEntries::Mapping(Map::new()).is_empty());
        assert!(!EnumEntries::Sequence(vec![json!("a")]).is_empty());
    }

    #[test]
    fn shape_insert_replaces_existing_property() {
        let mut shape = Shape::new();
        shape.insert("id", SchemaNode::new(SchemaDef::String {
            format: None,
            min_length: None,
            max_length: None,
        }));
        shape.insert("id", SchemaNode::new(SchemaDef::Boolean));
        assert_eq!(shape.len(), 1);
        assert_eq!(shape.get("id").unwrap().kind(), "boolean");
    }
}
