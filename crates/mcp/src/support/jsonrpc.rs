#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcRequest {
    #[serde(default)]
    #[serde(rename = "jsonrpc")]
    pub(crate) _jsonrpc: Option<String>,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) id: Option<Value>,
    #[serde(default)]
    pub(crate) params: Option<Value>,
}

pub(crate) fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

pub(crate) fn json_rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

/// Renders a tool payload as MCP text content. Callers get the human-readable
/// message; the envelope stays server-side.
pub(crate) fn tool_text_content(payload: &Value) -> Value {
    let text = match payload.get("message").and_then(|v| v.as_str()) {
        Some(message) => message.to_string(),
        None => serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string()),
    };
    json!({ "type": "text", "text": text })
}
