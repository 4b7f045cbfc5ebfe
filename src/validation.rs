//! Request validation for `/order`.

use crate::error::{OrderInputError, Result};

/// Form field carrying one requested quantity. Repeat it for a batch.
pub const ITEMS_FIELD: &str = "items";

/// Values of every `items` field, in submission order.
pub fn items_from_form(fields: &[(String, String)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(key, _)| key == ITEMS_FIELD)
        .map(|(_, value)| value.clone())
        .collect()
}

/// Parses and checks each raw quantity. Stops at the first bad value.
pub fn validate_items(raw: &[String]) -> Result<Vec<u64>> {
    if raw.is_empty() {
        return Err(OrderInputError::MissingItems);
    }

    raw.iter().map(|value| validate_quantity(value)).collect()
}

fn validate_quantity(raw: &str) -> Result<u64> {
    let value: i64 = raw.parse().map_err(|_| OrderInputError::MalformedItems {
        value: raw.to_string(),
    })?;

    match value {
        0 => Err(OrderInputError::ZeroItems),
        v if v < 0 => Err(OrderInputError::NegativeItems { value: v }),
        v => Ok(v.unsigned_abs()),
    }
}
