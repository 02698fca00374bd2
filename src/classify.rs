//! Canonical type classification.
//!
//! | kind   | format hint                     | canonical type        |
//! |--------|---------------------------------|-----------------------|
//! | enum   | -                               | JSON type of 1st value|
//! | bigint | `int64` / `uint64`              | `int64`               |
//! | bigint | other / none                    | `integer`             |
//! | string | email, url, uri, uuid, guid     | the format name       |
//! | number | `safeint`                       | `integer`             |
//! | number | `int32` / `uint32`              | `int32`               |
//! | number | `int64` / `uint64`              | `int64`               |
//! | number | `float32` / `float64`           | `float`               |
//! | record | -                               | `object`              |
//! | file   | -                               | `binary`              |
//!
//! Any other node reports its raw kind.

use crate::handle::SchemaHandle;
use crate::node::{SchemaDef, SchemaNode};
use crate::types::json_type_name;

const STRING_FORMATS: &[&str] = &["email", "url", "uri", "uuid", "guid"];

/// Canonical documentation type of a (most-inner) node.
pub fn classify(node: &SchemaNode) -> String {
    let canonical = match &node.def {
        SchemaDef::Enum { entries } => entries.first().map(json_type_name),
        SchemaDef::Bigint { format, .. } => match format.as_deref() {
            Some("int64" | "uint64") => Some("int64"),
            _ => Some("integer"),
        },
        SchemaDef::String {
            format: Some(format),
            ..
        } if STRING_FORMATS.contains(&format.as_str()) => return format.clone(),
        SchemaDef::Number {
            format: Some(format),
            ..
        } => number_format(format),
        SchemaDef::Record { .. } => Some("object"),
        SchemaDef::File => Some("binary"),
        _ => None,
    };
    canonical.unwrap_or_else(|| node.kind()).to_string()
}

fn number_format(format: &str) -> Option<&'static str> {
    match format {
        "safeint" => Some("integer"),
        "int32" | "uint32" => Some("int32"),
        "int64" | "uint64" => Some("int64"),
        "float32" | "float64" => Some("float"),
        _ => None,
    }
}

impl SchemaHandle {
    /// Canonical type of the most-inner node, or `""` for an invalid handle.
    pub fn schema_type(&self) -> String {
        self.most_inner().map(classify).unwrap_or_default()
    }
}
