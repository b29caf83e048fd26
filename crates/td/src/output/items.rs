//! Item output formatting.

use serde::Serialize;
use todo_core::{Item, Placement};

use super::helpers::{format_status, format_summary, push_header, truncate_id};

/// JSON output structure for the list command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOutput<'a> {
    pub list_id: &'a str,
    pub list_name: &'a str,
    pub search: &'a str,
    pub items: Vec<ItemOutput<'a>>,
}

/// JSON output structure for a single item.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput<'a> {
    pub index: usize,
    pub id: &'a str,
    pub summary: &'a str,
    pub is_complete: bool,
    pub precedence: i64,
}

impl<'a> ItemOutput<'a> {
    fn new(index: usize, item: &'a Item) -> Self {
        Self {
            index,
            id: &item.id,
            summary: &item.summary,
            is_complete: item.is_complete,
            precedence: item.precedence,
        }
    }
}

/// JSON output structure for a moved item.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovedItemOutput<'a> {
    pub id: &'a str,
    pub summary: &'a str,
    pub index: usize,
    pub precedence: i64,
    pub changed: bool,
    pub renumbered: bool,
}

/// Formats a view as JSON.
pub fn format_view_json(
    list_id: &str,
    list_name: &str,
    search: &str,
    view: &[&Item],
) -> Result<String, serde_json::Error> {
    let output = ViewOutput {
        list_id,
        list_name,
        search,
        items: view
            .iter()
            .enumerate()
            .map(|(index, item)| ItemOutput::new(index, item))
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a view as a table.
pub fn format_view_table(view: &[&Item], use_colors: bool) -> String {
    if view.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut output = String::new();
    push_header(
        &mut output,
        &format!("{:<4} {:<8} {:<4} {}", "#", "ID", "Done", "Summary"),
        use_colors,
    );

    for (index, item) in view.iter().enumerate() {
        let line = format!(
            "{:<4} {:<8} {:<4} {}",
            index,
            truncate_id(&item.id),
            format_status(item.is_complete, use_colors),
            format_summary(&item.summary, item.is_complete, use_colors)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a single item as JSON, with its position in the view.
pub fn format_item_json(index: Option<usize>, item: &Item) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Output<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        id: &'a str,
        list_id: &'a str,
        summary: &'a str,
        is_complete: bool,
        precedence: i64,
    }

    serde_json::to_string_pretty(&Output {
        index,
        id: &item.id,
        list_id: &item.list_id,
        summary: &item.summary,
        is_complete: item.is_complete,
        precedence: item.precedence,
    })
}

/// Formats the result of a move as JSON.
pub fn format_moved_item_json(
    item: &Item,
    index: usize,
    placement: Placement,
) -> Result<String, serde_json::Error> {
    let output = MovedItemOutput {
        id: &item.id,
        summary: &item.summary,
        index,
        precedence: item.precedence,
        changed: placement != Placement::Unchanged,
        renumbered: placement.renumbered(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a batch of `(id, summary)` results as JSON under `key`.
pub fn format_batch_json(key: &str, items: &[(String, String)]) -> Result<String, serde_json::Error> {
    let entries: Vec<serde_json::Value> = items
        .iter()
        .map(|(id, summary)| serde_json::json!({ "id": id, "summary": summary }))
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        key: entries,
        "total": items.len(),
    }))
}
