#![forbid(unsafe_code)]

use serde_json::{Value, json};

pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "add-todo",
            "description": "Add a new todo item to the list.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Task text" }
                },
                "required": ["text"]
            },
        }),
        json!({
            "name": "get-todo",
            "description": "List all todo items, newest first.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            },
        }),
        json!({
            "name": "remove-todo",
            "description": "Remove a todo item by its ID.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "ID of the todo item" }
                },
                "required": ["id"]
            },
        }),
        json!({
            "name": "edit-todo",
            "description": "Replace the text of an existing todo item.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "ID of the todo item" },
                    "newText": { "type": "string", "description": "Replacement task text" }
                },
                "required": ["id", "newText"]
            },
        }),
    ]
}
