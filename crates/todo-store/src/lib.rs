//! Local storage for todo lists and their items.
//!
//! [`Store`] holds every list and item in memory and exposes the actions the
//! command line needs. [`StoreFile`] persists it as JSON at an XDG data path.
//!
//! ```
//! use todo_core::{Selection, INBOX_LIST_ID};
//! use todo_store::Store;
//!
//! let mut store = Store::new();
//! let milk = store
//!     .add_item(INBOX_LIST_ID, "Buy milk", Selection::new())
//!     .unwrap()
//!     .id
//!     .clone();
//! store.add_item(INBOX_LIST_ID, "Clean house", Selection::new()).unwrap();
//!
//! store.move_item(INBOX_LIST_ID, "", &milk, 1).unwrap();
//!
//! let view = store.view(INBOX_LIST_ID, "");
//! assert_eq!(view[1].summary, "Buy milk");
//! ```

mod actions;
pub mod error;
pub mod file;
mod lookups;

pub use error::{StoreError, StoreResult, MAX_LIST_NAME_LEN};
pub use file::{StoreFile, StoreFileError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_core::{Item, ReorderConfig, TodoList, INBOX_LIST_ID};

/// Every list and item known to `td`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// UTC timestamp of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    /// All lists, in creation order.
    #[serde(default)]
    pub lists: Vec<TodoList>,

    /// All items of all lists, in creation order.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Spacing used when items are placed or moved.
    #[serde(skip)]
    ordering: ReorderConfig,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a store holding only the inbox.
    pub fn new() -> Self {
        Self {
            saved_at: None,
            lists: vec![TodoList::inbox()],
            items: Vec::new(),
            ordering: ReorderConfig::default(),
        }
    }

    /// Replaces the spacing used for placing and moving items.
    pub fn with_ordering(mut self, ordering: ReorderConfig) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn ordering(&self) -> ReorderConfig {
        self.ordering
    }

    /// Adds the inbox list if it is missing. Returns true if it was added.
    pub fn ensure_inbox(&mut self) -> bool {
        if self.lists.iter().any(|l| l.id == INBOX_LIST_ID) {
            return false;
        }
        self.lists.insert(0, TodoList::inbox());
        true
    }

    /// Returns true if the store has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in `list_id`, and how many of them are complete.
    pub fn counts(&self, list_id: &str) -> (usize, usize) {
        self.items
            .iter()
            .filter(|i| i.list_id == list_id)
            .fold((0, 0), |(total, done), i| {
                (total + 1, done + usize::from(i.is_complete))
            })
    }

    /// Stamps the store with the current time. Called before each save.
    pub fn touch(&mut self) {
        self.saved_at = Some(Utc::now());
    }
}
