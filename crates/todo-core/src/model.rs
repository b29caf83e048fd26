//! Data model for todo items and the lists they belong to.

use serde::{Deserialize, Serialize};

/// Identifier of the list every store starts with.
pub const INBOX_LIST_ID: &str = "inbox";

/// A single todo item.
///
/// Items are owned by the storage layer. Searching reads `list_id`, `summary`
/// and `is_complete`; reordering reads and writes `precedence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique, stable identifier.
    pub id: String,

    /// The list this item belongs to.
    pub list_id: String,

    /// The text shown for the item.
    #[serde(default)]
    pub summary: String,

    /// Whether the item has been completed.
    #[serde(default)]
    pub is_complete: bool,

    /// Sort key within the list. Lower sorts first.
    #[serde(default)]
    pub precedence: i64,
}

impl Item {
    /// Creates an incomplete item with precedence `0`.
    pub fn new(
        id: impl Into<String>,
        list_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            summary: summary.into(),
            is_complete: false,
            precedence: 0,
        }
    }

    /// Sets the precedence, builder style.
    pub fn with_precedence(mut self, precedence: i64) -> Self {
        self.precedence = precedence;
        self
    }

    /// Sets the completion flag, builder style.
    pub fn completed(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }
}

/// A named collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl TodoList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The default list.
    pub fn inbox() -> Self {
        Self::new(INBOX_LIST_ID, "Inbox")
    }
}
