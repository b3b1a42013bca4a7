use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Version written into every stored collection.
pub(crate) const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DecodeError {
    #[error("stored data is not valid: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored data is neither a list nor a versioned record")]
    UnexpectedShape,

    #[error("stored data has schema version {0}, newer than supported version {max}", max = SCHEMA_VERSION)]
    UnsupportedVersion(u32),
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
struct Envelope<T> {
    version: u32,
    items: Vec<T>,
}

pub(crate) fn encode<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        items,
    })
}

/// Decodes a stored collection. A bare JSON array is the unversioned
/// layout (version 0) and is read as-is.
pub(crate) fn decode<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => {
            let envelope: Envelope<T> = serde_json::from_value(value)?;
            if envelope.version > SCHEMA_VERSION {
                return Err(DecodeError::UnsupportedVersion(envelope.version));
            }
            Ok(envelope.items)
        }
        _ => Err(DecodeError::UnexpectedShape),
    }
}
