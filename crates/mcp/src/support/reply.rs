#![forbid(unsafe_code)]

use serde_json::{Value, json};

/// Normal outcome. Also used for reported conditions such as "no todo item
/// found with ID n" — those are answers, not failed calls.
pub(crate) fn reply_ok(message: impl Into<String>) -> Value {
    let message: String = message.into();
    json!({
        "success": true,
        "message": message,
        "error": null
    })
}

pub(crate) fn reply_error(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "message": message.trim(),
        "error": { "code": code }
    })
}
