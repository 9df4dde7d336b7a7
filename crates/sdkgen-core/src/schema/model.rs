use super::{Name, Property, Relation};

use indexmap::IndexMap;

/// A named entity type in the source application's data layer.
///
/// Property and relation maps preserve registry insertion order; that order
/// is the emission order, so generated diffs track schema-edit order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    /// Name of the model
    pub name: Name,

    /// Plural spelling declared by the schema, if any.
    pub plural: Option<String>,

    /// True for models backing the application's user accounts. Credential
    /// fields on these models are never emitted.
    pub is_user: bool,

    /// Fields contained by the model
    pub properties: IndexMap<String, Property>,

    /// References to other models
    pub relations: IndexMap<String, Relation>,
}

impl Model {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            plural: None,
            is_user: false,
            properties: IndexMap::new(),
            relations: IndexMap::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }
}
