use swapi_catalog_client::records::clean::{FetchResource, FieldAction, clean_entity};
use swapi_catalog_client::records::filter::{assign_crew, combine_records, filter_record};
use swapi_catalog_client::records::keys::PLANET_KEYS;
use swapi_catalog_client::records::scalar::{coerce_float, coerce_int, is_unknown, split_list};
use swapi_catalog_client::records::value::{Record, Value};

fn record(fields: &[(&str, Value)]) -> Record {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

struct StubCatalog {
    responses: Vec<(String, Record)>,
}

impl StubCatalog {
    fn empty() -> Self {
        Self { responses: vec![] }
    }

    fn with(responses: &[(&str, Record)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, response)| ((*url).to_string(), response.clone()))
                .collect(),
        }
    }
}

impl FetchResource for StubCatalog {
    async fn fetch_record(&self, url: &str) -> Result<Record, String> {
        self.responses
            .iter()
            .find(|(known, _)| known == url)
            .map(|(_, response)| response.clone())
            .ok_or_else(|| format!("Unexpected resource URL: {url}"))
    }
}

#[test]
fn unknown_detector_matches_sentinels() {
    assert!(is_unknown("unknown"));
    assert!(is_unknown("UNKNOWN"));
    assert!(is_unknown("  UnKnOwN\t"));
    assert!(is_unknown("n/a"));
    assert!(is_unknown(" N/A "));

    assert!(!is_unknown("known"));
    assert!(!is_unknown("unknowns"));
    assert!(!is_unknown("na"));
    assert!(!is_unknown(""));
}

#[test]
fn float_coercion_is_idempotent_and_silent() {
    assert_eq!(
        coerce_float(&Value::String("1.5".to_string())),
        Value::Float(1.5)
    );
    assert_eq!(coerce_float(&Value::Float(1.5)), Value::Float(1.5));
    assert_eq!(coerce_float(&Value::Int(2)), Value::Float(2.0));
    assert_eq!(
        coerce_float(&Value::String("several".to_string())),
        Value::String("several".to_string())
    );
    assert_eq!(coerce_float(&Value::Null), Value::Null);
}

#[test]
fn int_coercion_is_idempotent_and_silent() {
    assert_eq!(coerce_int(&Value::String("4".to_string())), Value::Int(4));
    assert_eq!(coerce_int(&Value::Int(4)), Value::Int(4));
    assert_eq!(
        coerce_int(&Value::String("several".to_string())),
        Value::String("several".to_string())
    );
    assert_eq!(
        coerce_int(&Value::String("1.5".to_string())),
        Value::String("1.5".to_string())
    );
}

#[test]
fn list_splitter_keeps_elements_untrimmed() {
    assert_eq!(
        split_list("brown, grey", ", "),
        Value::List(vec![
            Value::String("brown".to_string()),
            Value::String("grey".to_string()),
        ])
    );
    assert_eq!(
        split_list("a , b", ","),
        Value::List(vec![
            Value::String("a ".to_string()),
            Value::String(" b".to_string()),
        ])
    );
}

#[test]
fn key_filter_orders_output_and_omits_missing() {
    let planet = record(&[
        ("population", Value::String("1000".to_string())),
        ("residents", Value::List(vec![])),
        ("name", Value::String("Dagobah".to_string())),
        ("url", Value::String("https://example.test/planets/5/".to_string())),
    ]);

    let filtered = filter_record(&planet, PLANET_KEYS);

    let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["url", "name", "population"]);
    assert!(!filtered.contains_key("residents"));

    // The input is untouched.
    assert_eq!(planet.keys().next().map(String::as_str), Some("population"));
}

#[test]
fn record_merger_prefers_overrides_and_keeps_both_sides() {
    let defaults = record(&[
        ("name", Value::String("placeholder".to_string())),
        ("num_available", Value::Int(17)),
    ]);
    let overrides = record(&[
        ("name", Value::String("GR-75 medium transport".to_string())),
        ("crew", Value::String("6".to_string())),
    ]);

    let combined = combine_records(&defaults, &overrides);

    assert_eq!(
        combined.get("name"),
        Some(&Value::String("GR-75 medium transport".to_string()))
    );
    assert_eq!(combined.get("num_available"), Some(&Value::Int(17)));
    assert_eq!(combined.get("crew"), Some(&Value::String("6".to_string())));
    assert_eq!(combined.len(), 3);

    // Neither input is modified.
    assert_eq!(
        defaults.get("name"),
        Some(&Value::String("placeholder".to_string()))
    );
    assert_eq!(overrides.len(), 2);
}

#[test]
fn crew_assigner_mutates_craft_in_place() {
    let mut x_wing = record(&[
        ("name", Value::String("X-wing".to_string())),
        ("crew", Value::Int(1)),
    ]);
    let crew = record(&[
        ("pilot", Value::Record(record(&[]))),
        ("astromech_droid", Value::Record(record(&[]))),
    ]);

    assign_crew(&mut x_wing, crew);

    assert_eq!(x_wing.len(), 4);
    assert!(x_wing.contains_key("name"));
    assert!(x_wing.contains_key("crew"));
    assert!(x_wing.contains_key("pilot"));
    assert!(x_wing.contains_key("astromech_droid"));
}

#[test]
fn field_actions_come_from_one_table() {
    assert_eq!(FieldAction::for_field("gravity"), FieldAction::Float);
    assert_eq!(FieldAction::for_field("hyperdrive_rating"), FieldAction::Float);
    assert_eq!(FieldAction::for_field("MGLT"), FieldAction::Int);
    assert_eq!(FieldAction::for_field("cargo_capacity"), FieldAction::Int);
    assert_eq!(FieldAction::for_field("eye_colors"), FieldAction::List);
    assert_eq!(FieldAction::for_field("homeworld"), FieldAction::PlanetRef);
    assert_eq!(FieldAction::for_field("species"), FieldAction::SpeciesRef);
    assert_eq!(FieldAction::for_field("name"), FieldAction::Passthrough);
    // Only the plural color fields are lists; a person's eye_color passes through.
    assert_eq!(FieldAction::for_field("eye_color"), FieldAction::Passthrough);
    assert_eq!(FieldAction::for_field("skin_color"), FieldAction::List);
}

#[tokio::test]
async fn cleaning_nullifies_unknown_values() -> Result<(), String> {
    let entity = record(&[("population", Value::String("unknown".to_string()))]);

    let cleaned = clean_entity(&entity, &StubCatalog::empty()).await?;

    assert_eq!(cleaned.get("population"), Some(&Value::Null));
    Ok(())
}

#[tokio::test]
async fn cleaning_strips_gravity_unit_before_coercion() -> Result<(), String> {
    let entity = record(&[("gravity", Value::String("1.5 standard".to_string()))]);

    let cleaned = clean_entity(&entity, &StubCatalog::empty()).await?;

    assert_eq!(cleaned.get("gravity"), Some(&Value::Float(1.5)));
    Ok(())
}

#[tokio::test]
async fn cleaning_keeps_unparseable_values_unchanged() -> Result<(), String> {
    let entity = record(&[
        ("crew", Value::String("4".to_string())),
        ("passengers", Value::String("several".to_string())),
    ]);

    let cleaned = clean_entity(&entity, &StubCatalog::empty()).await?;

    assert_eq!(cleaned.get("crew"), Some(&Value::Int(4)));
    assert_eq!(
        cleaned.get("passengers"),
        Some(&Value::String("several".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn cleaning_splits_list_fields_after_trimming() -> Result<(), String> {
    let entity = record(&[("hair_color", Value::String(" brown, grey ".to_string()))]);

    let cleaned = clean_entity(&entity, &StubCatalog::empty()).await?;

    assert_eq!(
        cleaned.get("hair_color"),
        Some(&Value::List(vec![
            Value::String("brown".to_string()),
            Value::String("grey".to_string()),
        ]))
    );
    Ok(())
}

#[tokio::test]
async fn cleaning_is_idempotent_on_cleaned_records() -> Result<(), String> {
    let entity = record(&[
        ("gravity", Value::String("1 standard".to_string())),
        ("crew", Value::String("6".to_string())),
        ("climate", Value::String("frozen".to_string())),
        ("population", Value::String("unknown".to_string())),
    ]);

    let catalog = StubCatalog::empty();
    let cleaned = clean_entity(&entity, &catalog).await?;
    let recleaned = clean_entity(&cleaned, &catalog).await?;

    assert_eq!(cleaned, recleaned);
    Ok(())
}

#[tokio::test]
async fn cleaning_resolves_homeworld_reference() -> Result<(), String> {
    let homeworld_url = "https://example.test/planets/22/";
    let raw_planet = record(&[
        ("url", Value::String(homeworld_url.to_string())),
        ("name", Value::String("Corellia".to_string())),
        ("gravity", Value::String("1 standard".to_string())),
        ("population", Value::String("unknown".to_string())),
        ("residents", Value::List(vec![])),
    ]);
    let catalog = StubCatalog::with(&[(homeworld_url, raw_planet)]);

    let person = record(&[
        ("name", Value::String("Han Solo".to_string())),
        ("homeworld", Value::String(homeworld_url.to_string())),
    ]);

    let cleaned = clean_entity(&person, &catalog).await?;

    let homeworld = cleaned
        .get("homeworld")
        .and_then(Value::as_record)
        .ok_or_else(|| "homeworld was not resolved into a record".to_string())?;
    assert_eq!(
        homeworld.get("name"),
        Some(&Value::String("Corellia".to_string()))
    );
    assert_eq!(homeworld.get("gravity"), Some(&Value::Float(1.0)));
    assert_eq!(homeworld.get("population"), Some(&Value::Null));
    assert!(!homeworld.contains_key("residents"));
    Ok(())
}

#[tokio::test]
async fn cleaning_resolves_only_the_first_species() -> Result<(), String> {
    let first_url = "https://example.test/species/3/";
    let second_url = "https://example.test/species/4/";
    let wookiee = record(&[
        ("name", Value::String("Wookiee".to_string())),
        ("average_height", Value::String("210".to_string())),
        ("hair_colors", Value::String("black, brown".to_string())),
        ("people", Value::List(vec![])),
    ]);
    let catalog = StubCatalog::with(&[(first_url, wookiee)]);

    let person = record(&[(
        "species",
        Value::List(vec![
            Value::String(first_url.to_string()),
            Value::String(second_url.to_string()),
        ]),
    )]);

    let cleaned = clean_entity(&person, &catalog).await?;

    let species = cleaned
        .get("species")
        .and_then(Value::as_list)
        .ok_or_else(|| "species was not resolved into a list".to_string())?;
    assert_eq!(species.len(), 1);

    let resolved = species[0]
        .as_record()
        .ok_or_else(|| "species entry is not a record".to_string())?;
    assert_eq!(
        resolved.get("name"),
        Some(&Value::String("Wookiee".to_string()))
    );
    assert_eq!(resolved.get("average_height"), Some(&Value::Int(210)));
    assert!(!resolved.contains_key("people"));
    Ok(())
}

#[tokio::test]
async fn cleaning_propagates_transport_failures() -> Result<(), String> {
    let person = record(&[(
        "homeworld",
        Value::String("https://example.test/planets/99/".to_string()),
    )]);

    let result = clean_entity(&person, &StubCatalog::empty()).await;

    assert!(result.is_err());
    Ok(())
}
