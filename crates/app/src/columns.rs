//! Column conversions shared by the repositories.

use jiff::Timestamp;
use serde_json::Value;
use sqlx::Error;

/// Current time as stored in timestamp columns.
pub(crate) fn now() -> Timestamp {
    Timestamp::now()
}

/// Encodes a timestamp as unix milliseconds.
pub(crate) fn to_millis(timestamp: Timestamp) -> i64 {
    timestamp.as_millisecond()
}

/// Decodes a unix-millisecond column.
pub(crate) fn from_millis(column: &str, millis: i64) -> Result<Timestamp, Error> {
    Timestamp::from_millisecond(millis).map_err(|source| Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    })
}

/// Decodes a non-negative integer column.
pub(crate) fn to_u64(column: &str, value: i64) -> Result<u64, Error> {
    u64::try_from(value).map_err(|source| Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    })
}

/// Parses a stored JSON blob.
///
/// Empty blobs read as `{}`; anything that is not valid JSON is returned as a
/// plain string so old rows still load.
pub(crate) fn decode_json_blob(raw: Option<String>) -> Value {
    match raw {
        None => Value::Object(serde_json::Map::new()),
        Some(raw) if raw.trim().is_empty() => Value::Object(serde_json::Map::new()),
        Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
    }
}

/// Serializes a JSON blob for storage.
pub(crate) fn encode_json_blob(value: &Value) -> String {
    value.to_string()
}
