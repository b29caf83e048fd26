//! Evaluation of compiled search queries against items.

use crate::model::Item;

use super::ast::{Condition, Operand};
use super::SearchQuery;

/// Decides which items of a list match a search query.
///
/// Items outside the selected list never match, whatever the query says.
#[derive(Debug)]
pub struct SearchEvaluator<'a> {
    query: &'a SearchQuery,
    list_id: &'a str,
}

impl<'a> SearchEvaluator<'a> {
    pub fn new(query: &'a SearchQuery, list_id: &'a str) -> Self {
        Self { query, list_id }
    }

    /// Returns true if the item is in the selected list and matches every
    /// condition of the query.
    pub fn matches(&self, item: &Item) -> bool {
        if item.list_id != self.list_id {
            return false;
        }

        let summary = item.summary.to_lowercase();
        self.query
            .conditions()
            .iter()
            .all(|condition| evaluate_condition(condition, &summary, item.is_complete))
    }

    /// Filters a slice of items, returning only those that match.
    pub fn filter_items<'b>(&self, items: &'b [Item]) -> Vec<&'b Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Evaluates one condition. `summary` must already be lower-cased.
fn evaluate_condition(condition: &Condition, summary: &str, is_complete: bool) -> bool {
    match condition {
        Condition::AnyOf(operands) => operands.iter().any(|operand| match operand {
            Operand::Term(term) => summary.contains(term.as_str()),
            Operand::Status(state) => state.matches(is_complete),
        }),
        Condition::AllTerms(terms) => terms.iter().all(|term| summary.contains(term.as_str())),
        Condition::Status(state) => state.matches(is_complete),
        Condition::Unconstrained => true,
    }
}
