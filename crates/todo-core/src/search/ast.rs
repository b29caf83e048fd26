//! Typed conditions compiled from parsed chunks.

use std::fmt;

use super::token::{Token, TokenKind};

/// Completion state named by an `is:` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoneState {
    /// `is:done`
    Done,
    /// `is:notdone`
    NotDone,
}

impl DoneState {
    /// Looks up a lower-cased status value.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "done" => Some(DoneState::Done),
            "notdone" => Some(DoneState::NotDone),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            DoneState::Done => "done",
            DoneState::NotDone => "notdone",
        }
    }

    /// Returns true if an item with the given completion flag is in this state.
    pub fn matches(self, is_complete: bool) -> bool {
        match self {
            DoneState::Done => is_complete,
            DoneState::NotDone => !is_complete,
        }
    }
}

/// One alternative of an OR group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Substring of the summary.
    Term(String),
    /// Completion state.
    Status(DoneState),
}

/// The constraint imposed by a single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// At least one operand must match.
    AnyOf(Vec<Operand>),

    /// Every term must be a substring of the summary.
    AllTerms(Vec<String>),

    /// The item must be in the given completion state.
    Status(DoneState),

    /// Leftover whitespace; matches everything.
    Unconstrained,
}

impl Condition {
    /// Builds the condition for one chunk from its normalized tokens.
    ///
    /// An `or` token makes the chunk an OR group; otherwise terms take
    /// priority over a status value, and only the first status value counts.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        if tokens.iter().any(|t| t.kind == TokenKind::Or) {
            let operands = tokens
                .iter()
                .filter_map(|t| match t.kind {
                    TokenKind::OrTerm | TokenKind::AndTerm => Some(Operand::Term(t.text.clone())),
                    TokenKind::DoneValue => DoneState::from_keyword(&t.text).map(Operand::Status),
                    _ => None,
                })
                .collect();
            return Condition::AnyOf(operands);
        }

        let terms: Vec<String> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::AndTerm)
            .map(|t| t.text.clone())
            .collect();
        if !terms.is_empty() {
            return Condition::AllTerms(terms);
        }

        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::DoneValue)
            .find_map(|t| DoneState::from_keyword(&t.text))
            .map_or(Condition::Unconstrained, Condition::Status)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Term(term) => f.write_str(term),
            Operand::Status(state) => write!(f, "is:{}", state.keyword()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AnyOf(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" OR ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
            Condition::AllTerms(terms) => f.write_str(&terms.join(" ")),
            Condition::Status(state) => write!(f, "is:{}", state.keyword()),
            Condition::Unconstrained => Ok(()),
        }
    }
}
