use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

const GIPHY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BLANK_GIPHY_TIME: &str = "0000-00-00 00:00:00";

/// Giphy sends most numbers as strings (`"width": "200"`). Accepts strings, plain numbers, `null`
/// and empty strings, the latter two become the default of `T`.
pub(crate) fn deserialize_string_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::String(string) if string.trim().is_empty() => Ok(T::default()),
        Value::String(string) => T::from_str(string.trim())
            .map_err(|_| D::Error::custom(format!("could not convert '{}' to number", string))),
        value @ Value::Number(_) => T::deserialize(value).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected number, got '{}'", other))),
    }
}

/// Timestamps look like `2015-08-22 15:23:22` which isn't rfc3339. An empty string or
/// `0000-00-00 00:00:00` means there is no timestamp.
pub(crate) fn deserialize_giphy_time<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() || value == BLANK_GIPHY_TIME {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(value, GIPHY_TIME_FORMAT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", value, e)))
}

/// Some response values are `null` even though they shouldn't be. Replaces them with the
/// [`Default`] implementation of the corresponding type.
pub(crate) fn deserialize_maybe_null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Like [`deserialize_maybe_null_to_default`] for a map, additionally entries whose value is
/// `null` are dropped.
pub(crate) fn deserialize_skip_null_values<'de, D, T>(
    deserializer: D,
) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map: Option<HashMap<String, Option<T>>> = Deserialize::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}
