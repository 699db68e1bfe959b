#![forbid(unsafe_code)]

use crate::*;
use serde_json::Value;

impl McpServer {
    pub(crate) fn tool_edit_todo(&mut self, args: Value) -> Value {
        let Some(args_obj) = args.as_object() else {
            return reply_error("INVALID_INPUT", "arguments must be an object");
        };

        let id = match require_i64(args_obj, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let new_text = match require_text(args_obj, "newText") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.update(id, &new_text) {
            Ok(true) => reply_ok(format!("Todo {id} updated to: {}.", new_text.as_str())),
            Ok(false) => reply_ok(format!("Error: No todo item found with ID {id} to update.")),
            Err(err) => self.store_failure("Failed to update todo. Please try again later.", err),
        }
    }
}
