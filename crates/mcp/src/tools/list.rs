#![forbid(unsafe_code)]

use crate::*;
use serde_json::Value;

impl McpServer {
    pub(crate) fn tool_get_todo(&mut self, _args: Value) -> Value {
        let todos = match self.store.list() {
            Ok(v) => v,
            Err(err) => {
                return self
                    .store_failure("Failed to retrieve todos. Please try again later.", err);
            }
        };

        if todos.is_empty() {
            return reply_ok("You have no todo items yet.");
        }

        let listing = todos
            .iter()
            .map(|todo| format!("{}: {}", todo.id, todo.text))
            .collect::<Vec<_>>()
            .join("\n");
        reply_ok(format!("You have {} todo items:\n{listing}", todos.len()))
    }
}
