//! Schema Introspect
//!
//! Documentation-oriented introspection of composable validation schemas.
//!
//! A schema is a tree of [`SchemaNode`]s: primitive types wrapped by
//! modifiers such as `optional`, `default` and `pipe`. This library sees
//! through those layers and reports what a documentation generator needs:
//! canonical type, bounds, enum values, required/optional status, default
//! and example values, and free-form semantic tags.
//!
//! # Example
//!
//! ```
//! use schema_introspect::builder::{int, preprocess};
//! use schema_introspect::{DocHelper, OpenApiHelper};
//!
//! let limit = preprocess(int().min(1.0).max(55.0).default(50).optional());
//! let helper = OpenApiHelper::new(limit);
//!
//! assert_eq!(helper.schema_type(), "integer");
//! assert_eq!(helper.min(), Some(1.0));
//! assert_eq!(helper.max(), Some(55.0));
//! assert!(!helper.is_required());
//! assert_eq!(helper.default_value(), Some(serde_json::json!(50)));
//! ```
//!
//! # Unwrapping
//!
//! | Layer | Step |
//! |-------|------|
//! | `optional`, `nullable`, `default`, `readonly`, ... | inner type |
//! | `pipe` whose output is a transform | pipe input |
//! | any other `pipe` | pipe output |
//! | anything else | end of chain |
//!
//! Type, bounds, items and properties are read from the end of the chain.
//! "Required" and "default" are decided by the presence of an `optional` or
//! `default` layer on the way there.
//!
//! # Invalid input
//!
//! A helper built from a value that is not a schema node is invalid, and
//! every accessor on it reports "absent" (`false`, `""`, `None`, empty).

pub mod builder;
mod bounds;
mod classify;
mod definitions;
mod describe;
mod enums;
mod error;
mod handle;
mod helper;
mod loader;
mod meta;
mod node;
mod openapi;
mod postman;
mod types;
mod unwrap;
mod validator;

pub use bounds::{bounds_of, Bounds};
pub use classify::classify;
pub use definitions::{
    AdditionalProperties, DiscriminatorObject, EncodingMap, EncodingObject, ExampleObject,
    XmlObject,
};
pub use describe::{describe, describe_input, Descriptor};
pub use error::{CheckError, DocumentError, LoadError};
pub use handle::{HelperInput, InputValue, SchemaHandle};
pub use helper::DocHelper;
pub use loader::{is_url, load_document, load_document_auto, load_document_str, parse_document};
pub use node::{DefaultValue, EnumEntries, SchemaDef, SchemaNode, Shape};
pub use openapi::OpenApiHelper;
pub use postman::PostmanHelper;
pub use types::{json_type_name, DescribeOptions, Target, DEFAULT_MAX_DEPTH};
pub use unwrap::{layers, next_layer};
pub use validator::{check_document, NODE_META_SCHEMA};

#[cfg(feature = "remote")]
pub use loader::load_document_url;
