//! Resolving user-supplied list names and item IDs.
//!
//! Lists resolve by ID or case-insensitive name, with a fuzzy "did you mean"
//! suggestion on failure. Items resolve by full ID or unique ID prefix.

use strsim::levenshtein;
use todo_core::{Item, TodoList};

use crate::error::{StoreError, StoreResult};
use crate::Store;

/// Maximum Levenshtein distance for a name to count as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the closest candidate to `query` by Levenshtein distance.
///
/// Returns `None` for exact matches and for anything further away than
/// [`MAX_SUGGESTION_DISTANCE`].
pub(crate) fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

impl Store {
    /// Resolves a list by exact ID or case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListNotFound`, carrying the closest list name
    /// when one is within a few edits.
    pub fn resolve_list(&self, name_or_id: &str) -> StoreResult<&TodoList> {
        let query = name_or_id.trim();
        let name_lower = query.to_lowercase();

        self.lists
            .iter()
            .find(|l| l.id == query)
            .or_else(|| self.lists.iter().find(|l| l.name.to_lowercase() == name_lower))
            .ok_or_else(|| StoreError::ListNotFound {
                name: query.to_string(),
                suggestion: find_similar_name(query, self.lists.iter().map(|l| l.name.as_str())),
            })
    }

    /// Resolves an item by full ID or a prefix of one.
    ///
    /// An exact ID match always wins. Otherwise the prefix must match exactly
    /// one item.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ItemNotFound` if nothing matches.
    /// - Returns `StoreError::AmbiguousItem` if the prefix matches several items.
    pub fn resolve_item(&self, prefix: &str) -> StoreResult<&Item> {
        let prefix = prefix.trim();
        if let Some(item) = self.items.iter().find(|i| i.id == prefix) {
            return Ok(item);
        }

        let not_found = || StoreError::ItemNotFound {
            id: prefix.to_string(),
        };
        if prefix.is_empty() {
            return Err(not_found());
        }

        let mut matches = self.items.iter().filter(|i| i.id.starts_with(prefix));
        let first = matches.next().ok_or_else(not_found)?;
        let rest = matches.count();
        if rest > 0 {
            return Err(StoreError::AmbiguousItem {
                prefix: prefix.to_string(),
                count: rest + 1,
            });
        }
        Ok(first)
    }
}
