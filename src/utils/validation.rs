//! Request body parsing and validation
//!
//! Create/update payloads arrive as raw JSON and are decoded here so that a
//! missing required field or a wrong-shaped value maps to a 400, not a framework
//! rejection. Unknown extra fields are ignored by serde.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::{AppError, AppResult};

/// Decode a JSON body into a payload type, then run its field validators.
///
/// Both failure modes surface as [`AppError::Validation`] (400).
pub fn parse_body<T>(value: serde_json::Value) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(payload)
}
