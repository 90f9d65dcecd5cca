use swapi_catalog_client::catalog::resource::CatalogClient;
use swapi_catalog_client::document::{read_document, write_document};
use swapi_catalog_client::records::clean::clean_entity;
use swapi_catalog_client::records::filter::{assign_crew, combine_records, filter_record};
use swapi_catalog_client::records::keys::{
    PEOPLE_KEYS, PLANET_HOTH_KEYS, STARSHIP_KEYS, VEHICLE_KEYS,
};
use swapi_catalog_client::records::value::{Record, Value};

use crate::config::Settings;

pub async fn run(client: &CatalogClient, settings: &Settings) -> Result<(), String> {
    let document = read_document(&settings.echo_base_input)?;
    let Value::Record(mut echo_base) = document else {
        return Err("Echo Base document must be a JSON object".to_string());
    };

    // Hoth: the base's survey fragment merged under the catalog record.
    let base_planet = nested_record(&echo_base, &["location", "planet"])?.clone();
    let hoth =
        merge_with_catalog(client, "planets", "hoth", &base_planet, PLANET_HOTH_KEYS).await?;
    nested_record_mut(&mut echo_base, &["location"])?
        .insert("planet".to_string(), Value::Record(hoth));

    let commander = nested_record(&echo_base, &["garrison", "commander"])?.clone();
    let commander = clean_entity(&commander, client).await?;
    nested_record_mut(&mut echo_base, &["garrison"])?
        .insert("commander".to_string(), Value::Record(commander));

    let visiting = nested_record(&echo_base, &["visiting_starships"])?;
    let pilot = list_entry(visiting, "freighters", 1)?
        .get("pilot")
        .and_then(Value::as_record)
        .cloned()
        .ok_or_else(|| "Echo Base document is missing 'freighters[1].pilot'".to_string())?;
    let pilot = clean_entity(&pilot, client).await?;
    let visiting = nested_record_mut(&mut echo_base, &["visiting_starships"])?;
    list_entry_mut(visiting, "freighters", 1)?.insert("pilot".to_string(), Value::Record(pilot));

    let base_type = asset_type(&echo_base, "vehicle_assets", "snowspeeders", 0)?;
    let snowspeeder =
        merge_with_catalog(client, "vehicles", "snowspeeder", &base_type, VEHICLE_KEYS).await?;
    set_asset_type(
        &mut echo_base,
        "vehicle_assets",
        "snowspeeders",
        0,
        snowspeeder,
    )?;

    let base_type = asset_type(&echo_base, "starship_assets", "starfighters", 0)?;
    let t_65 =
        merge_with_catalog(client, "starships", "t-65 x-wing", &base_type, STARSHIP_KEYS).await?;
    set_asset_type(
        &mut echo_base,
        "starship_assets",
        "starfighters",
        0,
        t_65.clone(),
    )?;

    let base_type = asset_type(&echo_base, "starship_assets", "transports", 0)?;
    let gr_75 = merge_with_catalog(
        client,
        "starships",
        "gr-75 medium transport",
        &base_type,
        STARSHIP_KEYS,
    )
    .await?;
    set_asset_type(
        &mut echo_base,
        "starship_assets",
        "transports",
        0,
        gr_75.clone(),
    )?;

    // The Falcon entry is a full starship record, not an asset type wrapper.
    let visiting = nested_record(&echo_base, &["visiting_starships"])?;
    let base_falcon = list_entry(visiting, "freighters", 0)?.clone();
    let mut falcon = merge_with_catalog(
        client,
        "starships",
        "millennium falcon",
        &base_falcon,
        STARSHIP_KEYS,
    )
    .await?;

    let han = fetch_person(client, "han solo").await?;
    let chewbacca = fetch_person(client, "chewbacca").await?;
    let mut crew = Record::new();
    crew.insert("pilot".to_string(), Value::Record(han));
    crew.insert("copilot".to_string(), Value::Record(chewbacca));
    assign_crew(&mut falcon, crew);

    let visiting = nested_record_mut(&mut echo_base, &["visiting_starships"])?;
    *list_entry_mut(visiting, "freighters", 0)? = falcon;

    let personnel = nested_record(&echo_base, &["garrison", "personnel"])?;
    let mut max_base_personnel = 0;
    for (role, count) in personnel {
        max_base_personnel += count
            .as_i64()
            .ok_or_else(|| format!("Garrison personnel count '{role}' is not an integer"))?;
    }

    let transports = list_entry(nested_record(&echo_base, &["starship_assets"])?, "transports", 0)?;
    let max_available_transports = transports
        .get("num_available")
        .and_then(Value::as_i64)
        .ok_or_else(|| "Echo Base document is missing 'transports[0].num_available'".to_string())?;

    let overload_multiplier = nested_record(&echo_base, &["evacuation_plan"])?
        .get("passenger_overload_multiplier")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            "Evacuation plan is missing 'passenger_overload_multiplier'".to_string()
        })?;

    let carrying_capacity = gr_75
        .get("passengers")
        .and_then(Value::as_i64)
        .ok_or_else(|| "Transport record is missing 'passengers'".to_string())?;

    let mut evac_transport = gr_75.clone();
    evac_transport.insert("name".to_string(), Value::String("Bright Hope".to_string()));

    let leia = fetch_person(client, "leia organa").await?;
    let c3po = fetch_person(client, "C-3PO").await?;
    evac_transport.insert(
        "passenger_manifest".to_string(),
        Value::List(vec![Value::Record(leia), Value::Record(c3po)]),
    );

    let mut escorts = Vec::new();
    for (pilot_name, droid_name) in [("luke skywalker", "r2-d2"), ("wedge antilles", "r5-d4")] {
        let mut x_wing = t_65.clone();
        let pilot = fetch_person(client, pilot_name).await?;
        let droid = fetch_person(client, droid_name).await?;
        let mut crew = Record::new();
        crew.insert("pilot".to_string(), Value::Record(pilot));
        crew.insert("astromech_droid".to_string(), Value::Record(droid));
        assign_crew(&mut x_wing, crew);
        escorts.push(Value::Record(x_wing));
    }
    evac_transport.insert("escorts".to_string(), Value::List(escorts));

    let evac_plan = nested_record_mut(&mut echo_base, &["evacuation_plan"])?;
    evac_plan.insert(
        "max_base_personnel".to_string(),
        Value::Int(max_base_personnel),
    );
    evac_plan.insert(
        "max_available_transports".to_string(),
        Value::Int(max_available_transports),
    );
    evac_plan.insert(
        "max_passenger_overload_capacity".to_string(),
        Value::Int(max_available_transports * overload_multiplier * carrying_capacity),
    );
    evac_plan.insert(
        "transport_assignments".to_string(),
        Value::List(vec![Value::Record(evac_transport)]),
    );

    write_document(&settings.echo_base_output, &Value::Record(echo_base))
}

async fn merge_with_catalog(
    client: &CatalogClient,
    collection: &str,
    term: &str,
    defaults: &Record,
    keys: &[&str],
) -> Result<Record, String> {
    let resource = client.search_one(collection, term).await?;
    let merged = combine_records(defaults, &resource);
    clean_entity(&filter_record(&merged, keys), client).await
}

async fn fetch_person(client: &CatalogClient, name: &str) -> Result<Record, String> {
    let person = client.search_one("people", name).await?;
    clean_entity(&filter_record(&person, PEOPLE_KEYS), client).await
}

fn nested_record<'a>(record: &'a Record, path: &[&str]) -> Result<&'a Record, String> {
    let mut current = record;
    for name in path {
        current = current
            .get(*name)
            .and_then(Value::as_record)
            .ok_or_else(|| format!("Echo Base document is missing '{name}'"))?;
    }
    Ok(current)
}

fn nested_record_mut<'a>(record: &'a mut Record, path: &[&str]) -> Result<&'a mut Record, String> {
    let mut current = record;
    for name in path {
        current = current
            .get_mut(*name)
            .and_then(Value::as_record_mut)
            .ok_or_else(|| format!("Echo Base document is missing '{name}'"))?;
    }
    Ok(current)
}

fn list_entry<'a>(record: &'a Record, name: &str, index: usize) -> Result<&'a Record, String> {
    record
        .get(name)
        .and_then(Value::as_list)
        .and_then(|entries| entries.get(index))
        .and_then(Value::as_record)
        .ok_or_else(|| format!("Echo Base document is missing '{name}[{index}]'"))
}

fn list_entry_mut<'a>(
    record: &'a mut Record,
    name: &str,
    index: usize,
) -> Result<&'a mut Record, String> {
    record
        .get_mut(name)
        .and_then(Value::as_list_mut)
        .and_then(|entries| entries.get_mut(index))
        .and_then(Value::as_record_mut)
        .ok_or_else(|| format!("Echo Base document is missing '{name}[{index}]'"))
}

fn asset_type(record: &Record, group: &str, name: &str, index: usize) -> Result<Record, String> {
    list_entry(nested_record(record, &[group])?, name, index)?
        .get("type")
        .and_then(Value::as_record)
        .cloned()
        .ok_or_else(|| format!("Echo Base document is missing '{name}[{index}].type'"))
}

fn set_asset_type(
    record: &mut Record,
    group: &str,
    name: &str,
    index: usize,
    value: Record,
) -> Result<(), String> {
    list_entry_mut(nested_record_mut(record, &[group])?, name, index)?
        .insert("type".to_string(), Value::Record(value));
    Ok(())
}
