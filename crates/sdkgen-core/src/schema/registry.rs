use super::Model;

use indexmap::IndexMap;

/// A read-only snapshot of the host application's model registry, built once
/// per generation run. Models iterate in insertion order.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registry {
    pub models: IndexMap<String, Model>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model to the snapshot, keyed by its declared name.
    pub fn insert(&mut self, model: Model) {
        self.models.insert(model.name.as_str().to_string(), model);
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by name
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
