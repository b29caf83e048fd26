//! Search and ordering core for todo lists.
//!
//! # Quick Start
//!
//! ```
//! use todo_core::{filter_and_sort, Item};
//!
//! let items = vec![
//!     Item::new("a", "inbox", "Buy milk").with_precedence(64),
//!     Item::new("b", "inbox", "Buy bread").with_precedence(32),
//!     Item::new("c", "inbox", "Clean house").with_precedence(96),
//! ];
//!
//! let view = filter_and_sort(&items, "buy", "inbox");
//! let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["b", "a"]);
//! ```
//!
//! The crate has three parts:
//!
//! - [`search`] - the query grammar, its parser and the evaluator
//! - [`ordering`] - the precedence comparator and the reorder engine
//! - [`view`] - recompute functions producing the live, ordered view

pub mod model;
pub mod ordering;
pub mod search;
pub mod selection;
pub mod view;

pub use model::{Item, TodoList, INBOX_LIST_ID};
pub use ordering::{compare, insert_at, reorder, sort_view, Placement, Ranked, ReorderConfig};
pub use search::{SearchEvaluator, SearchQuery};
pub use selection::Selection;
pub use view::{filter_and_sort, filter_and_sort_mut};
