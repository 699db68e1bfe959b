#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::Value;

pub(crate) fn dispatch_tool(server: &mut McpServer, name: &str, args: Value) -> Option<Value> {
    let resp = match name {
        "add-todo" => server.tool_add_todo(args),
        "get-todo" => server.tool_get_todo(args),
        "remove-todo" => server.tool_remove_todo(args),
        "edit-todo" => server.tool_edit_todo(args),
        _ => return None,
    };
    Some(resp)
}
