#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn add_then_list_round_trip() {
    let mut server = Server::start_initialized("add_list");

    let added = server.call_tool(10, "add-todo", json!({ "text": "Buy milk" }));
    assert!(!tool_is_error(&added));
    assert_eq!(extract_tool_text(&added), "Todo added: Buy milk with ID 1.");

    let listed = server.call_tool(11, "get-todo", json!({}));
    assert!(!tool_is_error(&listed));
    assert_eq!(
        extract_tool_text(&listed),
        "You have 1 todo items:\n1: Buy milk"
    );
}

#[test]
fn get_todo_on_empty_store_reports_fixed_message() {
    let mut server = Server::start_initialized("empty_list");

    let listed = server.call_tool(10, "get-todo", json!({}));
    assert!(!tool_is_error(&listed));
    assert_eq!(extract_tool_text(&listed), "You have no todo items yet.");
}

#[test]
fn listing_is_newest_first() {
    let mut server = Server::start_initialized("list_order");

    server.call_tool(10, "add-todo", json!({ "text": "A" }));
    server.call_tool(11, "add-todo", json!({ "text": "B" }));

    let listed = server.call_tool(12, "get-todo", json!({}));
    assert_eq!(
        extract_tool_text(&listed),
        "You have 2 todo items:\n2: B\n1: A"
    );
}

#[test]
fn remove_missing_id_is_reported_not_thrown() {
    let mut server = Server::start_initialized("remove_missing");

    let removed = server.call_tool(10, "remove-todo", json!({ "id": 999 }));
    assert!(
        !tool_is_error(&removed),
        "a missing id is a reported outcome, not a failed call"
    );
    assert!(extract_tool_text(&removed).contains("No todo item found with ID 999"));
}

#[test]
fn remove_succeeds_once_then_reports_not_found() {
    let mut server = Server::start_initialized("remove_once");

    server.call_tool(10, "add-todo", json!({ "text": "Buy milk" }));

    let removed = server.call_tool(11, "remove-todo", json!({ "id": 1 }));
    assert_eq!(extract_tool_text(&removed), "Todo 1 removed.");

    let again = server.call_tool(12, "remove-todo", json!({ "id": 1 }));
    assert!(extract_tool_text(&again).contains("No todo item found with ID 1"));

    let listed = server.call_tool(13, "get-todo", json!({}));
    assert_eq!(extract_tool_text(&listed), "You have no todo items yet.");
}

#[test]
fn edit_replaces_text_and_reports_missing_ids() {
    let mut server = Server::start_initialized("edit");

    server.call_tool(10, "add-todo", json!({ "text": "Buy milk" }));

    let edited = server.call_tool(11, "edit-todo", json!({ "id": 1, "newText": "Buy oat milk" }));
    assert!(!tool_is_error(&edited));
    assert_eq!(extract_tool_text(&edited), "Todo 1 updated to: Buy oat milk.");

    let listed = server.call_tool(12, "get-todo", json!({}));
    assert_eq!(
        extract_tool_text(&listed),
        "You have 1 todo items:\n1: Buy oat milk"
    );

    let missing = server.call_tool(13, "edit-todo", json!({ "id": 999, "newText": "nope" }));
    assert!(!tool_is_error(&missing));
    assert_eq!(
        extract_tool_text(&missing),
        "Error: No todo item found with ID 999 to update."
    );
}

#[test]
fn argument_shape_mismatches_fail_before_storage() {
    let mut server = Server::start_initialized("validation");

    let missing_text = server.call_tool(10, "add-todo", json!({}));
    assert!(tool_is_error(&missing_text));
    assert!(extract_tool_text(&missing_text).contains("text is required"));

    let blank_text = server.call_tool(11, "add-todo", json!({ "text": "   " }));
    assert!(tool_is_error(&blank_text));
    assert!(extract_tool_text(&blank_text).contains("text must not be empty"));

    let string_id = server.call_tool(12, "remove-todo", json!({ "id": "1" }));
    assert!(tool_is_error(&string_id));
    assert!(extract_tool_text(&string_id).contains("id must be an integer"));

    let missing_new_text = server.call_tool(13, "edit-todo", json!({ "id": 1 }));
    assert!(tool_is_error(&missing_new_text));
    assert!(extract_tool_text(&missing_new_text).contains("newText is required"));

    let non_object = server.call_tool(14, "add-todo", json!([1, 2]));
    assert!(tool_is_error(&non_object));
    assert!(extract_tool_text(&non_object).contains("arguments must be an object"));

    // Nothing above may have written a row.
    let listed = server.call_tool(15, "get-todo", json!({}));
    assert_eq!(extract_tool_text(&listed), "You have no todo items yet.");
}

#[test]
fn rows_survive_a_server_restart() {
    let storage_dir = temp_dir("restart_persistence");

    {
        let mut server = Server::start_with_storage_dir(storage_dir.clone(), false);
        server.initialize_default();
        server.call_tool(10, "add-todo", json!({ "text": "Buy milk" }));
    }

    let mut server = Server::start_with_storage_dir(storage_dir, true);
    server.initialize_default();

    let listed = server.call_tool(11, "get-todo", json!({}));
    assert_eq!(
        extract_tool_text(&listed),
        "You have 1 todo items:\n1: Buy milk"
    );
}
