//! Recomputing the live view of a list.
//!
//! Callers re-run these whenever the search string, the selected list, or
//! any item's summary, completion, list or precedence changes.

use crate::model::Item;
use crate::ordering::compare;
use crate::search::{SearchEvaluator, SearchQuery};

/// Returns the items of `list_id` matching `query`, in display order.
pub fn filter_and_sort<'a>(items: &'a [Item], query: &str, list_id: &str) -> Vec<&'a Item> {
    let query = SearchQuery::parse(query);
    let evaluator = SearchEvaluator::new(&query, list_id);

    let mut view = evaluator.filter_items(items);
    view.sort_by(|a, b| compare(*a, *b));
    view
}

/// Like [`filter_and_sort`], but hands out mutable references so the view
/// can be passed straight to [`reorder`](crate::ordering::reorder).
pub fn filter_and_sort_mut<'a>(
    items: &'a mut [Item],
    query: &str,
    list_id: &str,
) -> Vec<&'a mut Item> {
    let query = SearchQuery::parse(query);
    let evaluator = SearchEvaluator::new(&query, list_id);

    let mut view: Vec<&mut Item> = items
        .iter_mut()
        .filter(|item| evaluator.matches(item))
        .collect();
    view.sort_by(|a, b| compare(&**a, &**b));
    view
}
