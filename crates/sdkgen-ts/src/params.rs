use crate::Serializer;

use sdkgen_core::{schema::Model, Error, Result};

/// Rendering parameters for one model, handed to the template renderer.
/// The renderer owns file naming, directory layout, and template syntax;
/// this bundle prescribes only content.
#[derive(Debug, Clone)]
pub struct ModelParams {
    pub model_name: String,

    /// Plural spelling: the schema's declared override, falling back to
    /// dictionary pluralization of the model name.
    pub plural_name: String,

    /// Grouped import statement, empty when the model imports nothing.
    pub imports: String,

    /// Declarations for the interface (shape) artifact.
    pub interface_properties: String,

    /// Declarations for the concrete class artifact.
    pub class_properties: String,
}

/// Outcome of a generation run over the full registry.
#[derive(Debug, Default)]
pub struct Generation {
    /// Parameters for each successfully generated model, in registry order.
    pub models: Vec<ModelParams>,

    /// Per-model failures. A failure aborts only the model it names; the
    /// rest of the run completes.
    pub errors: Vec<Error>,

    /// True when the registry does not expose a public `AccessToken` model,
    /// in which case the shared base declarations must supply their own.
    pub load_access_token: bool,
}

impl Serializer<'_> {
    /// Computes the full render-parameter bundle for one model.
    pub fn model_params(&self, model: &Model) -> Result<ModelParams> {
        Ok(ModelParams {
            model_name: model.name.as_str().to_string(),
            plural_name: plural_name(model),
            imports: self.model_imports(model),
            interface_properties: self.model_properties(model, true)?,
            class_properties: self.model_properties(model, false)?,
        })
    }

    /// Generates render parameters for every model in the registry.
    ///
    /// A model with a broken relation invariant is reported and skipped;
    /// the remaining models still generate.
    pub fn generate(&self) -> Generation {
        let mut generation = Generation {
            load_access_token: self.registry().model("AccessToken").is_none(),
            ..Generation::default()
        };

        for model in self.registry().models() {
            match self.model_params(model) {
                Ok(params) => generation.models.push(params),
                Err(err) => {
                    tracing::error!(
                        model = model.name.as_str(),
                        error = %err,
                        "model generation failed"
                    );
                    generation.errors.push(err);
                }
            }
        }

        tracing::info!(
            generated = generation.models.len(),
            failed = generation.errors.len(),
            "processed {} models",
            self.registry().len()
        );

        generation
    }
}

fn plural_name(model: &Model) -> String {
    match &model.plural {
        Some(plural) => plural.clone(),
        None => pluralizer::pluralize(model.name.as_str(), 2, false),
    }
}
