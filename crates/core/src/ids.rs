//! Identifier and null-tolerant field helpers shared by the data model.
//!
//! The CMS emits numeric primary keys as JSON numbers in some payloads and as
//! strings in others (GraphQL `ID` scalars are strings, rich-text attributes are
//! whatever the editor stored). Ids are normalised to strings so lookups compare
//! like with like.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalise a JSON id to a string. Returns `None` for anything that is not a
/// non-empty string or a number.
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deserialize an id given either as a string or a number.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected string or number id, got {value}")))
}

/// Deserialize an id leniently: anything that is not a usable id becomes an
/// empty string. Empty ids never match a reference.
pub fn deserialize_id_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(&value).unwrap_or_default())
}

/// Deserialize a free-form tag: a string is trimmed, anything else becomes an
/// empty string.
pub fn deserialize_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::trim).unwrap_or_default().to_string())
}

/// Deserialize a field that may be `null`, falling back to the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
