//! Precedence ordering and drag-and-drop reordering.
//!
//! Items are shown sorted by [`compare`]: ascending precedence, ties broken
//! by id. Moving an item assigns it the integer midpoint between its new
//! neighbours; the rest of the view is only renumbered when no integer gap
//! is left between them.
//!
//! # Example
//!
//! ```
//! use todo_core::ordering::{compare, reorder};
//! use todo_core::Item;
//!
//! let mut view = vec![
//!     Item::new("a", "inbox", "A").with_precedence(32),
//!     Item::new("b", "inbox", "B").with_precedence(64),
//!     Item::new("c", "inbox", "C").with_precedence(96),
//! ];
//!
//! reorder(&mut view, "c", 0);
//! view.sort_by(compare);
//!
//! let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["c", "a", "b"]);
//! ```

mod reorder;

use std::cmp::Ordering;

use crate::model::Item;

pub use reorder::{insert_at, reorder, Placement, ReorderConfig};

/// Distance between consecutive precedences after a renumber pass.
pub const PRECEDENCE_STEP: i64 = 32;

/// Smallest neighbour gap that still leaves room for a midpoint.
pub const MIN_GAP: i64 = 2;

/// Largest accepted step, so a renumbered view stays far from `i64::MAX`.
pub const MAX_STEP: i64 = 1 << 32;

/// Anything that can be placed in an ordered view.
pub trait Ranked {
    fn id(&self) -> &str;
    fn precedence(&self) -> i64;
    fn set_precedence(&mut self, precedence: i64);
}

impl Ranked for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn precedence(&self) -> i64 {
        self.precedence
    }

    fn set_precedence(&mut self, precedence: i64) {
        self.precedence = precedence;
    }
}

impl<T: Ranked + ?Sized> Ranked for &mut T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn precedence(&self) -> i64 {
        (**self).precedence()
    }

    fn set_precedence(&mut self, precedence: i64) {
        (**self).set_precedence(precedence);
    }
}

/// Orders by precedence, then by id.
///
/// Ids are unique, so this is a strict total order over distinct items.
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: Ranked + ?Sized,
    B: Ranked + ?Sized,
{
    a.precedence()
        .cmp(&b.precedence())
        .then_with(|| a.id().cmp(b.id()))
}

/// Sorts a view in display order.
pub fn sort_view<T: Ranked>(view: &mut [T]) {
    view.sort_by(|a, b| compare(a, b));
}
