//! Capability contract shared by the documentation format adapters.
//!
//! Adapters are thin newtypes over [`SchemaHandle`]; they implement
//! [`DocHelper::from_handle`] and [`DocHelper::handle`] and inherit every
//! other accessor. Child helpers (items, properties, alternatives) are
//! built as the same adapter type.

use serde_json::{Map, Value};

use crate::handle::{HelperInput, SchemaHandle};

pub trait DocHelper: Sized {
    fn from_handle(handle: SchemaHandle) -> Self;

    fn handle(&self) -> &SchemaHandle;

    /// Build a helper from a schema node or an arbitrary JSON value.
    fn new(input: impl Into<HelperInput>) -> Self {
        Self::from_handle(SchemaHandle::new(input))
    }

    fn is_valid(&self) -> bool {
        self.handle().is_valid()
    }

    fn schema_type(&self) -> String {
        self.handle().schema_type()
    }

    fn description(&self) -> String {
        self.handle().description()
    }

    fn is_required(&self) -> bool {
        self.handle().is_required()
    }

    fn is_unique(&self) -> bool {
        self.handle().is_unique()
    }

    fn is_deprecated(&self) -> bool {
        self.handle().is_deprecated()
    }

    fn has_default_value(&self) -> bool {
        self.handle().has_default_value()
    }

    fn default_value(&self) -> Option<Value> {
        self.handle().default_value()
    }

    fn has_example_value(&self) -> bool {
        self.handle().has_example_value()
    }

    fn example_value(&self) -> Option<Value> {
        self.handle().example_value()
    }

    fn allows_empty_value(&self) -> bool {
        self.handle().allows_empty_value()
    }

    fn enum_values(&self) -> Vec<Value> {
        self.handle().enum_values()
    }

    fn has_min(&self) -> bool {
        self.handle().has_min()
    }

    fn min(&self) -> Option<f64> {
        self.handle().min()
    }

    fn has_max(&self) -> bool {
        self.handle().has_max()
    }

    fn max(&self) -> Option<f64> {
        self.handle().max()
    }

    fn unit(&self) -> String {
        self.handle().unit()
    }

    fn first_item(&self) -> Option<Self> {
        self.handle().first_item().map(Self::from_handle)
    }

    fn children(&self) -> Vec<(String, Self)> {
        self.handle()
            .children()
            .into_iter()
            .map(|(name, child)| (name, Self::from_handle(child)))
            .collect()
    }

    fn alternatives(&self) -> Vec<Self> {
        self.handle()
            .alternatives()
            .into_iter()
            .map(Self::from_handle)
            .collect()
    }

    /// Target-specific extras as JSON, keyed by their documentation field name.
    fn hints(&self) -> Map<String, Value> {
        Map::new()
    }
}
