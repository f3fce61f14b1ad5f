//! Success envelope for write responses.
//!
//! The backend answers writes with `{message, data, success}`, but older
//! endpoints return the bare entity. Both decode into [`Envelope`]; a bare
//! entity becomes `message = None, data = Some(entity)` and an empty body
//! (`null`) becomes an envelope with neither field.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keys that mark a body as an envelope rather than a bare entity.
const ENVELOPE_KEYS: [&str; 3] = ["message", "data", "success"];

/// Write response: a human-readable message plus the affected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Envelope for operations whose payload carries no entity (deletes).
pub type Ack = Envelope<serde_json::Value>;

impl<T> Envelope<T> {
    /// Wrap an entity without a message.
    pub fn bare(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    /// Message from the server, or `fallback` when none was sent.
    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        self.message.clone().unwrap_or_else(|| fallback.into())
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapped<T> {
            message: Option<String>,
            data: Option<T>,
        }

        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self {
                message: None,
                data: None,
            });
        }

        let wrapped = value
            .as_object()
            .is_some_and(|fields| ENVELOPE_KEYS.iter().any(|key| fields.contains_key(*key)));
        if !wrapped {
            return T::deserialize(value).map(Self::bare).map_err(D::Error::custom);
        }

        let Wrapped { message, data } = Wrapped::<T>::deserialize(value).map_err(D::Error::custom)?;
        Ok(Self { message, data })
    }
}
