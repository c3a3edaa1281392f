use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Raw response body, `{ "data": T, ... }`.
///
/// `data` is trusted to have the declared shape; other top-level members are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub data: T,
}

pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    let envelope: ResponseEnvelope<T> = serde_json::from_str(json)?;
    Ok(envelope.data)
}
