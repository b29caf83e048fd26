//! Errors raised by store actions and lookups.

use thiserror::Error;

/// Longest allowed list name, in characters.
pub const MAX_LIST_NAME_LEN: usize = 25;

/// Errors that can occur while resolving or mutating lists and items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No list matches the given name or ID.
    #[error("{}", format_not_found_error("list", name, suggestion.as_deref()))]
    ListNotFound {
        /// The name or ID that was searched for.
        name: String,
        /// A similar list name, if one is close enough.
        suggestion: Option<String>,
    },

    /// No item has the given ID or ID prefix.
    #[error("{}", format_not_found_error("item", id, None))]
    ItemNotFound {
        /// The ID or prefix that was searched for.
        id: String,
    },

    /// The item exists but is hidden by the current search.
    #[error("item '{id}' is not in the current view")]
    NotInView {
        /// The item ID.
        id: String,
    },

    /// More than one item ID starts with the given prefix.
    #[error("ambiguous item ID '{prefix}' matches {count} items. Use more characters.")]
    AmbiguousItem {
        /// The prefix that was searched for.
        prefix: String,
        /// How many items matched.
        count: usize,
    },

    /// A list name was empty or too long.
    #[error("invalid list name '{name}': {reason}")]
    InvalidListName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// The list cannot be removed.
    #[error("list '{name}' is the default list and cannot be deleted")]
    ProtectedList {
        /// The list name.
        name: String,
    },
}

/// Result type for store actions.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Formats the "not found" message, optionally with a suggestion.
pub(crate) fn format_not_found_error(
    resource_type: &str,
    identifier: &str,
    suggestion: Option<&str>,
) -> String {
    let base = format!("{} '{}' not found.", resource_type, identifier);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Checks a list name: required, at most [`MAX_LIST_NAME_LEN`] characters.
///
/// Returns the trimmed name.
pub(crate) fn validate_list_name(name: &str) -> StoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidListName {
            name: name.to_string(),
            reason: "name is required",
        });
    }
    if trimmed.chars().count() > MAX_LIST_NAME_LEN {
        return Err(StoreError::InvalidListName {
            name: name.to_string(),
            reason: "name must be 25 characters or fewer",
        });
    }
    Ok(trimmed.to_string())
}
