use super::Serializer;

use sdkgen_core::{
    schema::{Model, Relation},
    Error, Result,
};

impl Serializer<'_> {
    /// Resolves a relation to its TypeScript reference type.
    ///
    /// Singular kinds reference one record; every other kind references an
    /// array of the target type. A relation without a resolvable target
    /// fails the owning model's generation: degrading to `any` here would
    /// be silently accepted by the target type checker.
    pub fn relation_ty(&self, model: &Model, name: &str, relation: &Relation) -> Result<String> {
        let target = relation
            .target
            .as_ref()
            .filter(|target| !target.as_str().is_empty())
            .ok_or_else(|| Error::unresolved_relation(model.name.as_str(), name))?;

        let base = target.upper_camel_case();
        Ok(if relation.kind.is_singular() {
            base
        } else {
            format!("{base}[]")
        })
    }
}
