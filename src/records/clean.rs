use crate::records::filter::filter_record;
use crate::records::keys::{PLANET_KEYS, SPECIES_KEYS};
use crate::records::scalar::{coerce_float, coerce_int, is_unknown, split_list};
use crate::records::value::{Record, Value};

const GRAVITY_FIELD: &str = "gravity";
const GRAVITY_UNIT: &str = "standard";
const LIST_DELIMITER: &str = ", ";

/// Transform applied to a field during cleaning, selected by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Coerce to float.
    Float,
    /// Coerce to integer.
    Int,
    /// Trim, then split on comma-space.
    List,
    /// Dereference a planet URL and nest the cleaned planet.
    PlanetRef,
    /// Dereference the first species URL and nest the cleaned species.
    SpeciesRef,
    /// Keep the value as-is.
    Passthrough,
}

impl FieldAction {
    /// Look up the transform for a field name.
    pub fn for_field(name: &str) -> FieldAction {
        match name {
            "gravity" | "length" | "hyperdrive_rating" => FieldAction::Float,
            "rotation_period" | "orbital_period" | "diameter" | "surface_water" | "population"
            | "height" | "mass" | "average_height" | "average_lifespan"
            | "max_atmosphering_speed" | "MGLT" | "crew" | "passengers" | "cargo_capacity" => {
                FieldAction::Int
            }
            "hair_color" | "skin_color" | "climate" | "terrain" | "hair_colors" | "skin_colors"
            | "eye_colors" => FieldAction::List,
            "homeworld" => FieldAction::PlanetRef,
            "species" => FieldAction::SpeciesRef,
            _ => FieldAction::Passthrough,
        }
    }
}

/// Capability to fetch a catalog record by URL.
///
/// [`clean_entity`] dereferences nested resource URLs through this trait, so
/// the network edge can be replaced with a deterministic stub in tests.
#[allow(async_fn_in_trait)]
pub trait FetchResource {
    /// Fetch the record behind a resource URL.
    async fn fetch_record(&self, url: &str) -> Result<Record, String>;
}

/// Normalize an entity record, field by field.
///
/// String values matching the absent-value sentinels become null regardless of
/// field name; every other field is coerced, split, dereferenced, or passed
/// through per [`FieldAction::for_field`]. Reference fields fetch through
/// `catalog` each time they are cleaned (no caching); everything else is pure.
/// Transport failures propagate unchanged.
pub async fn clean_entity<F: FetchResource>(
    entity: &Record,
    catalog: &F,
) -> Result<Record, String> {
    let mut cleaned = Record::new();

    for (key, value) in entity {
        if let Value::String(raw) = value {
            if is_unknown(raw) {
                cleaned.insert(key.clone(), Value::Null);
                continue;
            }
        }

        let normalized = match FieldAction::for_field(key) {
            FieldAction::Float => {
                if key == GRAVITY_FIELD {
                    coerce_float(&strip_gravity_unit(value))
                } else {
                    coerce_float(value)
                }
            }
            FieldAction::Int => coerce_int(value),
            FieldAction::List => match value {
                Value::String(raw) => split_list(raw.trim(), LIST_DELIMITER),
                other => other.clone(),
            },
            FieldAction::PlanetRef => match value.as_str() {
                Some(url) => {
                    let planet = catalog.fetch_record(url).await?;
                    let filtered = filter_record(&planet, PLANET_KEYS);
                    Value::Record(Box::pin(clean_entity(&filtered, catalog)).await?)
                }
                None => value.clone(),
            },
            FieldAction::SpeciesRef => match first_url(value) {
                Some(url) => {
                    let species = catalog.fetch_record(url).await?;
                    let filtered = filter_record(&species, SPECIES_KEYS);
                    let nested = Box::pin(clean_entity(&filtered, catalog)).await?;
                    Value::List(vec![Value::Record(nested)])
                }
                None => value.clone(),
            },
            FieldAction::Passthrough => value.clone(),
        };

        cleaned.insert(key.clone(), normalized);
    }

    Ok(cleaned)
}

fn strip_gravity_unit(value: &Value) -> Value {
    match value {
        Value::String(raw) => Value::String(raw.replace(GRAVITY_UNIT, "").trim().to_string()),
        other => other.clone(),
    }
}

/// Only the first URL of a multi-valued reference is ever resolved.
fn first_url(value: &Value) -> Option<&str> {
    value.as_list()?.first()?.as_str()
}
