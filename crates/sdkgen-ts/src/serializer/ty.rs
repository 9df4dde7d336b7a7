use super::Serializer;

use sdkgen_core::schema::{Property, PropertyTy};

impl Serializer<'_> {
    /// Maps a property's declared type to a TypeScript type expression.
    ///
    /// A property with no resolvable type degrades to `any` with a warning;
    /// generation continues for the model.
    pub fn property_ty(&self, name: &str, property: &Property) -> String {
        match &property.ty {
            Some(ty) => ty_expr(ty),
            None => {
                tracing::warn!(
                    property = name,
                    "property has no resolvable type, emitting `any`"
                );
                "any".to_string()
            }
        }
    }
}

fn ty_expr(ty: &PropertyTy) -> String {
    match ty {
        PropertyTy::String => "string".to_string(),
        PropertyTy::Number => "number".to_string(),
        PropertyTy::Boolean => "boolean".to_string(),
        PropertyTy::Date => "Date".to_string(),
        PropertyTy::GeoPoint => "GeoPoint".to_string(),
        PropertyTy::Array(element) => format!("{}[]", ty_expr(element)),
        PropertyTy::Object => "object".to_string(),
        PropertyTy::Unknown => "any".to_string(),
    }
}
