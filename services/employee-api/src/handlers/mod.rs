use serde::de::DeserializeOwned;

use crate::error::ServiceError;

pub mod employees;
pub mod health;

/// Decodes a JSON request body regardless of its `Content-Type`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(body)
        .map_err(|e| ServiceError::InvalidInput(format!("invalid request body: {}", e)))
}
