//! Search expression parser and evaluator.
//!
//! # Supported Syntax
//!
//! - `milk bread` - every whitespace-separated term must appear in the summary
//! - `is:done`, `is:notdone` - restrict by completion state
//! - `milk OR bread` - at least one operand must match; operands are single
//!   terms or status predicates, and a group may chain several `OR`s
//!
//! Matching is case-insensitive and by substring. Parsing never fails:
//! anything that is not a keyword is searched for literally.
//!
//! # Example
//!
//! ```
//! use todo_core::search::{SearchEvaluator, SearchQuery};
//! use todo_core::Item;
//!
//! let query = SearchQuery::parse("milk OR bread is:notdone");
//! let evaluator = SearchEvaluator::new(&query, "inbox");
//!
//! assert!(evaluator.matches(&Item::new("1", "inbox", "Buy bread")));
//! assert!(!evaluator.matches(&Item::new("2", "inbox", "Buy milk").completed(true)));
//! assert!(!evaluator.matches(&Item::new("3", "work", "Buy milk")));
//! ```

mod ast;
mod evaluator;
mod parser;
mod token;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub use ast::{Condition, DoneState, Operand};
pub use evaluator::SearchEvaluator;
pub use parser::{parse_all, parse_next, Chunk};
pub use token::{Token, TokenKind};

/// A search string compiled into one condition per chunk.
///
/// Chunks combine by AND. Whitespace-only chunks are dropped, and only the
/// first standalone status predicate is kept, so `is:done is:notdone`
/// behaves like `is:done`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    conditions: Vec<Condition>,
}

impl SearchQuery {
    /// Parses a search string.
    ///
    /// Status predicates do not stack. The first standalone `is:` chunk
    /// sets the status filter and later ones are dropped, so
    /// `is:done is:notdone` returns the completed items instead of nothing.
    /// Status predicates inside an `OR` sequence are kept as operands.
    pub fn parse(input: &str) -> Self {
        let mut conditions = Vec::new();
        let mut has_status = false;

        for chunk in parse_all(input) {
            match Condition::from_tokens(&chunk.normalized()) {
                Condition::Unconstrained => {}
                Condition::Status(_) if has_status => {}
                condition => {
                    has_status |= matches!(condition, Condition::Status(_));
                    conditions.push(condition);
                }
            }
        }

        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns true if the query matches every item.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromStr for SearchQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod evaluator_tests;
