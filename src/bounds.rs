//! Minimum / maximum extraction.
//!
//! What a bound measures depends on the most-inner node:
//!
//! | node             | source                                        |
//! |------------------|-----------------------------------------------|
//! | object, record   | `minProperties` / `maxProperties` tags        |
//! | array            | element-count statistics on the node          |
//! | string           | `minLength` / `maxLength`                     |
//! | number, bigint   | `minValue` / `maxValue`                       |
//!
//! Only finite numbers count; everything else is absent.

use serde_json::Value;

use crate::handle::SchemaHandle;
use crate::node::{SchemaDef, SchemaNode};

/// Lower and upper bound of a schema, each optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    fn finite(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|v| v.is_finite()),
            max: max.filter(|v| v.is_finite()),
        }
    }
}

fn tag_number(node: &SchemaNode, name: &str) -> Option<f64> {
    node.meta.get(name).and_then(Value::as_f64)
}

/// Bounds of a (most-inner) node.
pub fn bounds_of(node: &SchemaNode) -> Bounds {
    match &node.def {
        SchemaDef::Object { .. } | SchemaDef::Record { .. } => Bounds::finite(
            tag_number(node, "minProperties"),
            tag_number(node, "maxProperties"),
        ),
        SchemaDef::Array {
            minimum, maximum, ..
        } => Bounds::finite(*minimum, *maximum),
        SchemaDef::String {
            min_length,
            max_length,
            ..
        } => Bounds::finite(*min_length, *max_length),
        SchemaDef::Number {
            min_value,
            max_value,
            ..
        }
        | SchemaDef::Bigint {
            min_value,
            max_value,
            ..
        } => Bounds::finite(*min_value, *max_value),
        _ => Bounds::default(),
    }
}

impl SchemaHandle {
    pub fn bounds(&self) -> Bounds {
        self.most_inner().map(bounds_of).unwrap_or_default()
    }

    pub fn has_min(&self) -> bool {
        self.min().is_some()
    }

    pub fn min(&self) -> Option<f64> {
        self.bounds().min
    }

    pub fn has_max(&self) -> bool {
        self.max().is_some()
    }

    pub fn max(&self) -> Option<f64> {
        self.bounds().max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::*;
    use serde_json::json;

    #[test]
    fn number_with_only_max() {
        let handle = SchemaHandle::new(number().max(5.0));
        assert_eq!(handle.schema_type(), "number");
        assert!(!handle.has_min());
        assert!(handle.has_max());
        assert_eq!(handle.max(), Some(5.0));
    }

    #[test]
    fn string_length_bounds() {
        let handle = SchemaHandle::new(string().min(1.0).max(10.0).optional());
        assert_eq!(
            handle.bounds(),
            Bounds {
                min: Some(1.0),
                max: Some(10.0)
            }
        );
    }

    #[test]
    fn infinite_bounds_are_absent() {
        let handle = SchemaHandle::new(number().min(f64::NEG_INFINITY).max(f64::INFINITY));
        assert!(!handle.has_min());
        assert!(!handle.has_max());

        let handle = SchemaHandle::new(number().min(f64::NAN));
        assert!(!handle.has_min());
    }

    #[test]
    fn array_element_counts() {
        let handle = SchemaHandle::new(array(string()).min(1.0).max(3.0));
        assert_eq!(handle.min(), Some(1.0));
        assert_eq!(handle.max(), Some(3.0));
    }

    #[test]
    fn object_property_counts_from_tags() {
        let handle = SchemaHandle::new(
            object([("a", string())]).meta(json!({ "minProperties": 1, "maxProperties": 4 })),
        );
        assert_eq!(handle.min(), Some(1.0));
        assert_eq!(handle.max(), Some(4.0));

        let handle = SchemaHandle::new(
            record(string(), number()).meta(json!({ "minProperties": "1" })),
        );
        assert!(!handle.has_min());
    }

    #[test]
    fn unsupported_kinds_have_no_bounds() {
        let handle = SchemaHandle::new(boolean().meta(json!({ "minProperties": 1 })));
        assert_eq!(handle.bounds(), Bounds::default());
        assert_eq!(SchemaHandle::default().bounds(), Bounds::default());
    }

    #[test]
    fn preprocessed_integer_keeps_declared_bounds() {
        let handle =
            SchemaHandle::new(preprocess(int().min(1.0).max(55.0).default(50).optional()));
        assert_eq!(handle.schema_type(), "integer");
        assert_eq!(handle.min(), Some(1.0));
        assert_eq!(handle.max(), Some(55.0));
    }
}
