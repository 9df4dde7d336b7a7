use std::fmt;

/// An error that can occur while generating client types from a registry
/// snapshot.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Clone)]
enum ErrorKind {
    /// A relation's target model could not be resolved to a name. A
    /// malformed relation type would be silently accepted by the target
    /// type checker as `any`, so this aborts the owning model's generation
    /// instead of degrading.
    UnresolvedRelation { model: String, relation: String },
}

impl Error {
    pub fn unresolved_relation(model: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnresolvedRelation {
                model: model.into(),
                relation: relation.into(),
            },
        }
    }

    /// Name of the model whose generation failed.
    pub fn model(&self) -> &str {
        match &self.kind {
            ErrorKind::UnresolvedRelation { model, .. } => model,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnresolvedRelation { model, relation } => write!(
                f,
                "relation `{relation}` on model `{model}` has no resolvable target model"
            ),
        }
    }
}

impl std::error::Error for Error {}
