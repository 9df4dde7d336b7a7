use super::Name;

/// A named reference from one model to another.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    pub kind: RelationKind,

    /// Target model name, if the registry could resolve one. `None` is a
    /// broken registry invariant and fails the owning model's generation.
    pub target: Option<Name>,
}

/// Relation kinds understood by the host data layer. Only `BelongsTo` and
/// `HasOne` reference a single record; every other kind references a
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
    EmbedsOne,
    EmbedsMany,
    ReferencesMany,
}

impl Relation {
    pub fn new(kind: RelationKind, target: impl Into<Name>) -> Self {
        Self {
            kind,
            target: Some(target.into()),
        }
    }

    /// A relation whose target model could not be resolved.
    pub fn unresolved(kind: RelationKind) -> Self {
        Self { kind, target: None }
    }
}

impl RelationKind {
    pub fn is_singular(self) -> bool {
        matches!(self, Self::BelongsTo | Self::HasOne)
    }
}
