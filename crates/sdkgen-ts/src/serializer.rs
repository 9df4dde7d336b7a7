// Fragment serializers
mod imports;
mod properties;
mod relation;
mod ty;
mod value;

use sdkgen_core::{DefaultValueMode, Registry};

/// Serializes model descriptors to TypeScript source fragments.
///
/// The serializer holds no mutable state: every method is a pure function of
/// the registry snapshot and the configured default-value mode.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Registry snapshot against which models are serialized
    registry: &'a Registry,

    /// When default-value expressions are emitted for concrete declarations
    default_values: DefaultValueMode,
}

impl<'a> Serializer<'a> {
    pub fn new(registry: &'a Registry, default_values: DefaultValueMode) -> Self {
        Self {
            registry,
            default_values,
        }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn default_values(&self) -> DefaultValueMode {
        self.default_values
    }
}
