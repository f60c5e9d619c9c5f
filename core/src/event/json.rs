// JSON boundary for serialized event streams

use thiserror::Error;

use super::Event;

/// Failure to decode serialized events. Covers syntactically invalid
/// JSON, an absent or unknown `type` discriminant, and missing mandatory
/// fields. Decoding never partially succeeds.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed event input: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize one event to its JSON form.
pub fn to_json(event: &Event) -> serde_json::Result<String> {
    serde_json::to_string(event)
}

/// Decode one event from its JSON form.
pub fn from_json(input: &str) -> Result<Event, DecodeError> {
    Ok(serde_json::from_str(input)?)
}

/// Serialize a whole stream as a JSON array.
pub fn events_to_json(events: &[Event]) -> serde_json::Result<String> {
    serde_json::to_string(events)
}

/// Decode a whole stream from a JSON array.
pub fn events_from_json(input: &str) -> Result<Vec<Event>, DecodeError> {
    Ok(serde_json::from_str(input)?)
}
