use pretty_assertions::assert_eq;
use sdkgen_core::{
    schema::{Model, Property, PropertyTy, Relation, RelationKind},
    DefaultValueMode, Registry,
};
use sdkgen_ts::Serializer;

fn person_company_registry() -> Registry {
    let mut person = Model::new("Person");
    person
        .properties
        .insert("name".into(), Property::new(PropertyTy::String));
    person.relations.insert(
        "company".into(),
        Relation::new(RelationKind::BelongsTo, "Company"),
    );

    let mut company = Model::new("Company");
    company
        .properties
        .insert("name".into(), Property::new(PropertyTy::String).required());

    let mut registry = Registry::new();
    registry.insert(person);
    registry.insert(company);
    registry
}

#[test]
fn person_company_end_to_end() {
    let registry = person_company_registry();
    let serializer = Serializer::new(&registry, DefaultValueMode::Enabled);
    let generation = serializer.generate();

    assert!(generation.errors.is_empty());
    assert_eq!(generation.models.len(), 2);

    let person = &generation.models[0];
    assert_eq!(person.model_name, "Person");
    assert_eq!(person.plural_name, "People");
    assert_eq!(person.imports, "import {\n  Company,\n} from './index';\n");
    assert_eq!(
        person.interface_properties,
        "  name?: string;\n  company?: Company;"
    );
    assert_eq!(
        person.class_properties,
        "  name: string = '';\n  company: Company = null;"
    );

    let company = &generation.models[1];
    assert_eq!(company.model_name, "Company");
    assert_eq!(company.imports, "");
    assert_eq!(company.interface_properties, "  name: string;");
    assert_eq!(company.class_properties, "  name: string = '';");
}

#[test]
fn access_token_flag_tracks_registry_visibility() {
    let registry = person_company_registry();
    let serializer = Serializer::new(&registry, DefaultValueMode::Disabled);
    assert!(serializer.generate().load_access_token);

    let mut registry = person_company_registry();
    registry.insert(Model::new("AccessToken"));
    let serializer = Serializer::new(&registry, DefaultValueMode::Disabled);
    assert!(!serializer.generate().load_access_token);
}

#[test]
fn declared_plural_overrides_pluralization() {
    let mut model = Model::new("Sheep");
    model.plural = Some("SheepHerd".to_string());
    let mut registry = Registry::new();
    registry.insert(model);

    let serializer = Serializer::new(&registry, DefaultValueMode::Disabled);
    let generation = serializer.generate();
    assert_eq!(generation.models[0].plural_name, "SheepHerd");
}

#[test]
fn a_broken_model_does_not_abort_the_run() {
    let mut registry = person_company_registry();

    let mut broken = Model::new("Orphan");
    broken
        .relations
        .insert("parent".into(), Relation::unresolved(RelationKind::BelongsTo));
    registry.insert(broken);

    let serializer = Serializer::new(&registry, DefaultValueMode::Disabled);
    let generation = serializer.generate();

    assert_eq!(generation.models.len(), 2);
    assert_eq!(generation.errors.len(), 1);
    assert_eq!(generation.errors[0].model(), "Orphan");
    assert!(generation.errors[0].to_string().contains("parent"));
}

#[test]
fn models_generate_in_registry_order() {
    let registry = person_company_registry();
    let serializer = Serializer::new(&registry, DefaultValueMode::Disabled);
    let generation = serializer.generate();

    let names: Vec<&str> = generation
        .models
        .iter()
        .map(|params| params.model_name.as_str())
        .collect();
    assert_eq!(names, ["Person", "Company"]);
}
