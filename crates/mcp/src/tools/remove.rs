#![forbid(unsafe_code)]

use crate::*;
use serde_json::Value;

impl McpServer {
    pub(crate) fn tool_remove_todo(&mut self, args: Value) -> Value {
        let Some(args_obj) = args.as_object() else {
            return reply_error("INVALID_INPUT", "arguments must be an object");
        };

        let id = match require_i64(args_obj, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.delete(id) {
            Ok(true) => reply_ok(format!("Todo {id} removed.")),
            // A missing id is a reported outcome, not a failed call.
            Ok(false) => reply_ok(format!("Error: No todo item found with ID {id}.")),
            Err(err) => self.store_failure("Failed to remove todo. Please try again later.", err),
        }
    }
}
