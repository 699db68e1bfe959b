#![forbid(unsafe_code)]

use super::reply::reply_error;
use serde_json::{Map, Value};
use td_core::model::TodoText;

pub(crate) fn require_string(args: &Map<String, Value>, key: &str) -> Result<String, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Err(reply_error(
            "INVALID_INPUT",
            &format!("{key} is required"),
        )),
        Some(Value::String(v)) => Ok(v.to_string()),
        Some(_) => Err(reply_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

pub(crate) fn require_i64(args: &Map<String, Value>, key: &str) -> Result<i64, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Err(reply_error(
            "INVALID_INPUT",
            &format!("{key} is required"),
        )),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            reply_error("INVALID_INPUT", &format!("{key} must be an integer"))
        }),
        Some(_) => Err(reply_error(
            "INVALID_INPUT",
            &format!("{key} must be an integer"),
        )),
    }
}

pub(crate) fn require_text(args: &Map<String, Value>, key: &str) -> Result<TodoText, Value> {
    let raw = require_string(args, key)?;
    TodoText::try_new(raw)
        .map_err(|_| reply_error("INVALID_INPUT", &format!("{key} must not be empty")))
}
