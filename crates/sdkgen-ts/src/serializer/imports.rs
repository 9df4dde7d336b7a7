use super::Serializer;

use indexmap::IndexSet;
use sdkgen_core::schema::Model;

impl Serializer<'_> {
    /// Builds the grouped import statement for a model's external
    /// references.
    ///
    /// Names are collected in first-seen order and deduplicated: relation
    /// targets first (self-references excluded), then `GeoPoint` if any
    /// property's mapped type mentions it. Returns an empty string when the
    /// model imports nothing.
    ///
    /// Relations with unresolvable targets are skipped here; they fail the
    /// model when its declarations are emitted.
    pub fn model_imports(&self, model: &Model) -> String {
        let mut names = IndexSet::new();

        for relation in model.relations.values() {
            let Some(target) = &relation.target else {
                continue;
            };
            if target.as_str().is_empty() || target.as_str() == model.name.as_str() {
                continue;
            }
            names.insert(target.upper_camel_case());
        }

        for (name, property) in &model.properties {
            if self.property_ty(name, property).contains("GeoPoint") {
                names.insert("GeoPoint".to_string());
            }
        }

        if names.is_empty() {
            return String::new();
        }

        let mut out = String::from("import {\n");
        for name in &names {
            out.push_str("  ");
            out.push_str(name);
            out.push_str(",\n");
        }
        out.push_str("} from './index';\n");
        out
    }
}
