use swapi_catalog_client::catalog::resource::CatalogClient;
use swapi_catalog_client::document::{read_document, write_document};
use swapi_catalog_client::records::clean::clean_entity;
use swapi_catalog_client::records::filter::filter_record;
use swapi_catalog_client::records::keys::PLANET_KEYS;
use swapi_catalog_client::records::scalar::is_unknown;
use swapi_catalog_client::records::value::Value;

use crate::config::Settings;

pub async fn run(client: &CatalogClient, settings: &Settings) -> Result<(), String> {
    let catalog = read_document(&settings.planets_input)?;
    let Value::List(planets) = catalog else {
        return Err("Planet catalog must be a JSON array".to_string());
    };

    let mut uninhabited = Vec::new();

    for planet in &planets {
        let record = planet
            .as_record()
            .ok_or_else(|| "Planet catalog entries must be records".to_string())?;

        let population = record.get("population").and_then(Value::as_str);
        if !population.is_some_and(is_unknown) {
            continue;
        }

        let filtered = filter_record(record, PLANET_KEYS);
        uninhabited.push(Value::Record(clean_entity(&filtered, client).await?));
    }

    write_document(&settings.uninhabited_output, &Value::List(uninhabited))
}
