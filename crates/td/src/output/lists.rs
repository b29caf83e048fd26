//! List output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use todo_core::TodoList;
use todo_store::Store;

use super::helpers::{format_saved_at, push_header, truncate_id, truncate_str};

/// JSON output structure for a list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub items: usize,
    pub done: usize,
    pub current: bool,
}

/// Formats all lists as JSON.
pub fn format_lists_json(store: &Store, current: &str) -> Result<String, serde_json::Error> {
    let lists: Vec<ListOutput> = store
        .lists
        .iter()
        .map(|list| {
            let (items, done) = store.counts(&list.id);
            ListOutput {
                id: &list.id,
                name: &list.name,
                items,
                done,
                current: list.id == current,
            }
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "lists": lists,
        "savedAt": store.saved_at,
    }))
}

/// Formats all lists as a table. The current list is marked with `*`.
pub fn format_lists_table(store: &Store, current: &str, use_colors: bool) -> String {
    let mut output = String::new();
    push_header(
        &mut output,
        &format!("{:<2}{:<8} {:<6} {:<6} {}", "", "ID", "Items", "Done", "Name"),
        use_colors,
    );

    for list in &store.lists {
        let (items, done) = store.counts(&list.id);
        let marker = if list.id == current { "*" } else { "" };
        let name = truncate_str(&list.name, 25);
        let name = if use_colors && list.id == current {
            name.bold().to_string()
        } else {
            name
        };

        output.push_str(&format!(
            "{:<2}{:<8} {:<6} {:<6} {}\n",
            marker,
            truncate_id(&list.id),
            items,
            done,
            name
        ));
    }

    output.push_str(&format!(
        "\nLast saved: {}\n",
        format_saved_at(store.saved_at.as_ref())
    ));
    output
}

/// Formats a single list as JSON.
pub fn format_list_json(list: &TodoList, removed_items: Option<usize>) -> Result<String, serde_json::Error> {
    let mut value = serde_json::json!({
        "id": list.id,
        "name": list.name,
    });
    if let Some(removed) = removed_items {
        value["removedItems"] = removed.into();
    }
    serde_json::to_string_pretty(&value)
}
