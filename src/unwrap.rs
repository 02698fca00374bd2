//! Modifier unwrapping.
//!
//! A schema may be wrapped by any number of modifier layers (`optional`,
//! `default`, `nullable`, ...) and pipelines. Both operations here walk the
//! same chain:
//!
//! - a modifier layer steps to its inner type;
//! - a pipe steps to its output, unless the output is a transform step, in
//!   which case it steps to its input (the declared, pre-transform type);
//! - anything else ends the chain.
//!
//! Schema trees are finite and acyclic, so a walk takes at most as many steps
//! as there are layers.

use std::iter;

use crate::handle::SchemaHandle;
use crate::node::{SchemaDef, SchemaNode};

/// The layer directly under `node`, if `node` is a modifier or pipe.
pub fn next_layer(node: &SchemaNode) -> Option<&SchemaNode> {
    if let Some(inner) = node.def.inner_type() {
        return Some(inner.as_ref());
    }
    match &node.def {
        SchemaDef::Pipe { input, output } if output.is_kind("transform") => Some(input.as_ref()),
        SchemaDef::Pipe { output, .. } => Some(output.as_ref()),
        _ => None,
    }
}

/// Every layer from `node` down to the most-inner type, outermost first.
pub fn layers(node: &SchemaNode) -> impl Iterator<Item = &SchemaNode> {
    iter::successors(Some(node), |current| next_layer(*current))
}

impl SchemaHandle {
    /// The semantically innermost node, past all modifiers and pipelines.
    pub fn most_inner(&self) -> Option<&SchemaNode> {
        layers(self.node()?).last()
    }

    /// The first layer of the given kind, returned as-is (not unwrapped).
    pub fn find_layer(&self, kind: &str) -> Option<&SchemaNode> {
        layers(self.node()?).find(|layer| layer.is_kind(kind))
    }

    pub fn optional_layer(&self) -> Option<&SchemaNode> {
        self.find_layer("optional")
    }

    pub fn default_layer(&self) -> Option<&SchemaNode> {
        self.find_layer("default")
    }
}
