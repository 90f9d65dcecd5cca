use crate::records::value::{Record, Value};

/// Project a record down to the allowed fields, in allow-list order.
///
/// Fields absent from the input are omitted rather than nulled. The input is
/// not modified.
pub fn filter_record(record: &Record, keys: &[&str]) -> Record {
    let mut filtered = Record::new();
    for key in keys {
        if let Some(value) = record.get(*key) {
            filtered.insert((*key).to_string(), value.clone());
        }
    }
    filtered
}

/// Layer an override record over a default record.
///
/// Returns a new record: every default field, with override values winning on
/// key collision and override-only fields appended. Neither input is modified.
pub fn combine_records(defaults: &Record, overrides: &Record) -> Record {
    let mut combined = defaults.clone();
    for (key, value) in overrides {
        combined.insert(key.clone(), value.clone());
    }
    combined
}

/// Insert crew members into a craft record, keyed by role name.
///
/// Unlike [`combine_records`] this mutates the craft in place; callers that
/// need the pre-assignment record must clone it first.
pub fn assign_crew(craft: &mut Record, crew: Record) {
    for (role, member) in crew {
        craft.insert(role, member);
    }
}
