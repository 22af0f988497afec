//! Centralized helpers for error payloads sent back by request/response callers.
//!
//! Every payload carries a code, a message and a context (usually the game id).

use serde_json::{json, Value};

use crate::game::error::GameError;

/// Builds `{"error":{"code":..,"message":..,"context":..}}` for `err`.
pub fn error_body(err: &GameError, context: Option<&str>) -> Value {
    json!({
        "error": {
            "code": err.code(),
            "message": err.to_string(),
            "context": context.unwrap_or(""),
        }
    })
}

/// Status code and JSON text, ready for a response.
pub fn error_response(err: &GameError, context: Option<&str>) -> (u16, String) {
    (err.status_code(), error_body(err, context).to_string())
}
