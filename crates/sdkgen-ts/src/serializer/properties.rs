use super::Serializer;

use sdkgen_core::{
    schema::{Model, Property},
    DefaultValueMode, Result,
};

impl Serializer<'_> {
    /// Emits the declaration lines for a model, properties first and then
    /// relations, both in registry insertion order.
    ///
    /// Interface context marks non-required fields optional and never emits
    /// defaults; concrete context emits defaults according to the
    /// configured mode. Credential fields on user models are suppressed.
    pub fn model_properties(&self, model: &Model, interface: bool) -> Result<String> {
        let mut lines = vec![];

        for (name, property) in &model.properties {
            if model.is_user && name == "credentials" {
                continue;
            }
            let optional = if interface && !property.required {
                "?"
            } else {
                ""
            };
            let ty = self.property_ty(name, property);
            let default = if !interface && self.emits_default(property) {
                format!(" = {}", self.default_value(property))
            } else {
                String::new()
            };
            lines.push(format!("  {name}{optional}: {ty}{default};"));
        }

        for (name, relation) in &model.relations {
            let ty = self.relation_ty(model, name, relation)?;
            let optional = if interface { "?" } else { "" };
            // Relation defaults are only gated on `Enabled`: relations have
            // no natural explicit default for `Strict` to inspect.
            let default = if !interface && self.default_values() == DefaultValueMode::Enabled {
                if ty.ends_with("[]") {
                    " = []"
                } else {
                    " = null"
                }
            } else {
                ""
            };
            lines.push(format!("  {name}{optional}: {ty}{default};"));
        }

        Ok(lines.join("\n"))
    }

    fn emits_default(&self, property: &Property) -> bool {
        match self.default_values() {
            DefaultValueMode::Disabled => false,
            DefaultValueMode::Enabled => true,
            DefaultValueMode::Strict => property.has_default(),
        }
    }
}
