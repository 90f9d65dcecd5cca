/// Ordered fields retained when filtering a person record.
pub const PEOPLE_KEYS: &[&str] = &[
    "url",
    "name",
    "height",
    "mass",
    "hair_color",
    "skin_color",
    "eye_color",
    "birth_year",
    "gender",
    "homeworld",
    "species",
];

/// Ordered fields retained when filtering a planet record.
pub const PLANET_KEYS: &[&str] = &[
    "url",
    "name",
    "rotation_period",
    "orbital_period",
    "diameter",
    "climate",
    "gravity",
    "terrain",
    "surface_water",
    "population",
];

/// Planet fields extended with the orbital and survey data tracked for Hoth.
pub const PLANET_HOTH_KEYS: &[&str] = &[
    "url",
    "name",
    "system_position",
    "natural_satellites",
    "rotation_period",
    "orbital_period",
    "diameter",
    "climate",
    "gravity",
    "terrain",
    "surface_water",
    "population",
    "indigenous_life_forms",
];

/// Ordered fields retained when filtering a starship record.
pub const STARSHIP_KEYS: &[&str] = &[
    "url",
    "starship_class",
    "name",
    "model",
    "manufacturer",
    "length",
    "width",
    "max_atmosphering_speed",
    "hyperdrive_rating",
    "MGLT",
    "crew",
    "passengers",
    "cargo_capacity",
    "consumables",
    "armament",
];

/// Ordered fields retained when filtering a species record.
pub const SPECIES_KEYS: &[&str] = &[
    "url",
    "name",
    "classification",
    "designation",
    "average_height",
    "skin_colors",
    "hair_colors",
    "eye_colors",
    "average_lifespan",
    "language",
];

/// Ordered fields retained when filtering a vehicle record.
pub const VEHICLE_KEYS: &[&str] = &[
    "url",
    "vehicle_class",
    "name",
    "model",
    "manufacturer",
    "length",
    "max_atmosphering_speed",
    "crew",
    "passengers",
    "cargo_capacity",
    "consumables",
    "armament",
];
