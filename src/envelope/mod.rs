//! Response envelope interpretation.
//!
//! Every SendClean endpoint answers with a JSON object carrying `status`,
//! `message` and, on failure, a `type` tag. A `status` of `"error"` is turned
//! into [`SendCleanError::Api`]; anything else is handed back untouched for
//! the operation to reshape.

use crate::errors::{ApiError, ResponseError, SendCleanError, SendCleanResult};
use crate::types::STATUS_ERROR;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope field holding the outcome
pub const STATUS_FIELD: &str = "status";
/// Envelope field holding the human-readable detail
pub const MESSAGE_FIELD: &str = "message";
/// Envelope field holding the error tag
pub const TYPE_FIELD: &str = "type";

/// Return the envelope as the success payload, or fail with the provider error
pub fn interpret(envelope: Value) -> SendCleanResult<Value> {
    if !is_error(&envelope) {
        return Ok(envelope);
    }

    let error_type = envelope.get(TYPE_FIELD).and_then(Value::as_str);
    let message = envelope.get(MESSAGE_FIELD).and_then(Value::as_str);
    Err(SendCleanError::Api(ApiError::from_envelope(error_type, message)))
}

/// [`interpret`], then deserialize the payload into `T`
pub fn interpret_as<T: DeserializeOwned>(envelope: Value) -> SendCleanResult<T> {
    let payload = interpret(envelope)?;
    serde_json::from_value(payload).map_err(|e| ResponseError::from(e).into())
}

/// Pull `field` out of a success payload and deserialize it into `T`
pub fn extract<T: DeserializeOwned>(payload: &mut Value, field: &str) -> SendCleanResult<T> {
    let value = payload
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ResponseError::UnexpectedShape {
            message: format!("missing field '{field}'"),
        })?;

    serde_json::from_value(value).map_err(|e| {
        ResponseError::UnexpectedShape {
            message: format!("field '{field}': {e}"),
        }
        .into()
    })
}

fn is_error(envelope: &Value) -> bool {
    envelope.get(STATUS_FIELD).and_then(Value::as_str) == Some(STATUS_ERROR)
}
