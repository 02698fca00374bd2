//! Descriptor rendering.
//!
//! Collects every accessor of a [`DocHelper`] into a serializable
//! [`Descriptor`], recursing into items, properties and alternatives.

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::handle::HelperInput;
use crate::helper::DocHelper;
use crate::openapi::OpenApiHelper;
use crate::postman::PostmanHelper;
use crate::types::{DescribeOptions, Target};

/// Documentation-oriented description of one schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub unique: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Descriptor>>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_properties"
    )]
    pub properties: Vec<(String, Descriptor)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Descriptor>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub hints: Map<String, Value>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn serialize_properties<S: Serializer>(
    properties: &[(String, Descriptor)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(properties.iter().map(|(name, d)| (name, d)))
}

impl Descriptor {
    pub fn property(&self, name: &str) -> Option<&Descriptor> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, d)| d)
    }
}

/// Render a helper into a descriptor.
///
/// An invalid helper renders as an empty descriptor.
pub fn describe<H: DocHelper>(helper: &H, options: &DescribeOptions) -> Descriptor {
    describe_at(helper, options, 0)
}

/// Build the helper for `options.target` over `input` and render it.
pub fn describe_input(input: impl Into<HelperInput>, options: &DescribeOptions) -> Descriptor {
    match options.target {
        Target::OpenApi => describe(&OpenApiHelper::new(input), options),
        Target::Postman => describe(&PostmanHelper::new(input), options),
    }
}

fn describe_at<H: DocHelper>(helper: &H, options: &DescribeOptions, depth: usize) -> Descriptor {
    if !helper.is_valid() {
        return Descriptor::default();
    }

    let mut descriptor = Descriptor {
        schema_type: helper.schema_type(),
        description: helper.description(),
        required: helper.is_required(),
        unique: helper.is_unique(),
        deprecated: helper.is_deprecated(),
        allow_empty_value: helper.allows_empty_value(),
        default: helper.default_value(),
        example: helper.example_value(),
        enum_values: helper.enum_values(),
        min: helper.min(),
        max: helper.max(),
        unit: helper.unit(),
        hints: if options.hints {
            helper.hints()
        } else {
            Map::new()
        },
        ..Descriptor::default()
    };

    if depth >= options.max_depth {
        tracing::trace!(depth, "descriptor depth limit reached");
        return descriptor;
    }

    let next = depth + 1;
    descriptor.items = helper
        .first_item()
        .map(|item| Box::new(describe_at(&item, options, next)));
    descriptor.properties = helper
        .children()
        .iter()
        .map(|(name, child)| (name.clone(), describe_at(child, options, next)))
        .collect();
    descriptor.alternatives = helper
        .alternatives()
        .iter()
        .map(|alternative| describe_at(alternative, options, next))
        .collect();
    descriptor
}
