#![forbid(unsafe_code)]

use crate::*;
use serde_json::Value;

impl McpServer {
    pub(crate) fn tool_add_todo(&mut self, args: Value) -> Value {
        let Some(args_obj) = args.as_object() else {
            return reply_error("INVALID_INPUT", "arguments must be an object");
        };

        let text = match require_text(args_obj, "text") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.create(&text) {
            Ok(todo) => reply_ok(format!("Todo added: {} with ID {}.", todo.text, todo.id)),
            Err(err) => self.store_failure("Failed to add todo. Please try again later.", err),
        }
    }
}
