//! Output formatting utilities for the td CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`items`] - Item output formatting (list, add, move, done, edit, delete)
//! - [`lists`] - List output formatting (lists, add, rename, delete)
//! - [`helpers`] - Common formatting utilities (truncation, status, timestamps)

pub mod helpers;
mod items;
mod lists;

// Items
pub use items::{
    format_batch_json, format_item_json, format_moved_item_json, format_view_json,
    format_view_table,
};

// Lists
pub use lists::{format_list_json, format_lists_json, format_lists_table};
