//! Schema document checking against the bundled node meta-schema.

use serde_json::Value;

use crate::error::{CheckError, DocumentError};

/// Meta-schema describing the JSON form of a schema node tree.
pub const NODE_META_SCHEMA: &str = include_str!("../schemas/node.schema.json");

/// Check a schema document against the node meta-schema.
///
/// Collects every violation rather than stopping at the first.
///
/// # Errors
///
/// Returns `CheckError::Invalid` listing each violation, or
/// `CheckError::MetaSchema` if the bundled meta-schema cannot be compiled.
pub fn check_document(document: &Value) -> Result<(), CheckError> {
    let meta_schema: Value =
        serde_json::from_str(NODE_META_SCHEMA).map_err(|e| CheckError::MetaSchema {
            message: e.to_string(),
        })?;
    let validator = jsonschema::validator_for(&meta_schema).map_err(|e| {
        CheckError::MetaSchema {
            message: e.to_string(),
        }
    })?;

    let errors: Vec<DocumentError> = validator
        .iter_errors(document)
        .map(|e| DocumentError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "schema document failed checks");
        Err(CheckError::Invalid { errors })
    }
}
