#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};
use td_storage::{SqliteStore, StoreError};

impl McpServer {
    pub(crate) fn new(store: SqliteStore, session_log: crate::SessionLog) -> Self {
        Self {
            initialized: false,
            store,
            session_log,
        }
    }

    pub(crate) fn handle(&mut self, request: crate::JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        self.session_log.note_method(method);

        if method == "initialize" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": crate::MCP_VERSION,
                    "serverInfo": { "name": crate::SERVER_NAME, "version": crate::SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            ));
        }

        if !self.initialized && method != "notifications/initialized" {
            return Some(crate::json_rpc_error(
                request.id,
                -32002,
                "Server not initialized",
            ));
        }

        if method == "notifications/initialized" {
            self.initialized = true;
            return None;
        }

        if method == "ping" {
            return Some(crate::json_rpc_response(request.id, json!({})));
        }

        // Some clients probe optional resources methods by default. Keep the
        // surface deterministic by advertising an empty resource set.
        if method == "resources/list" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({ "resources": [] }),
            ));
        }
        if method == "resources/read" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({ "contents": [] }),
            ));
        }

        if method == "tools/list" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({ "tools": crate::tools::tool_definitions() }),
            ));
        }

        if method == "tools/call" {
            let Some(params) = request.params else {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32602,
                    "params must be an object",
                ));
            };
            let Some(params_obj) = params.as_object() else {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32602,
                    "params must be an object",
                ));
            };

            let tool_name = params_obj
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let args = params_obj
                .get("arguments")
                .cloned()
                .unwrap_or_else(|| json!({}));
            let payload = self.call_tool(tool_name, args);

            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "content": [crate::tool_text_content(&payload)],
                    "isError": !payload.get("success").and_then(|v| v.as_bool()).unwrap_or(false)
                }),
            ));
        }

        Some(crate::json_rpc_error(
            request.id,
            -32601,
            &format!("Method not found: {method}"),
        ))
    }

    pub(crate) fn call_tool(&mut self, name: &str, args: Value) -> Value {
        match crate::tools::dispatch_tool(self, name, args) {
            Some(resp) => resp,
            None => crate::reply_error("UNKNOWN_TOOL", &format!("Unknown tool: {name}")),
        }
    }

    /// Converts a storage failure into the generic per-action message. The
    /// error detail only reaches the session log, never the caller.
    pub(crate) fn store_failure(&mut self, caller_message: &str, err: StoreError) -> Value {
        self.session_log.note_error(&format!("store: {err}"));
        crate::reply_error("STORE_ERROR", caller_message)
    }
}
