use crate::records::value::{Record, Value};

/// Pull the first record out of a search response's `results` array.
///
/// Search endpoints wrap matches in an envelope; the core transforms only ever
/// see the unwrapped record.
pub fn first_result(mut envelope: Record) -> Result<Record, String> {
    let results = envelope
        .shift_remove("results")
        .ok_or_else(|| "Invalid response from catalog".to_string())?;

    let Value::List(matches) = results else {
        return Err("Invalid response from catalog".to_string());
    };

    match matches.into_iter().next() {
        Some(Value::Record(record)) => Ok(record),
        Some(_) => Err("Invalid response from catalog".to_string()),
        None => Err("No records matched the search".to_string()),
    }
}
