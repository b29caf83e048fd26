//! Tokens produced by the search parser.

use std::fmt;

/// The kind of fragment a [`Token`] was matched as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A plain search term outside of an OR group.
    AndTerm,

    /// The `OR` keyword joining two operands.
    Or,

    /// A search term inside an OR group.
    OrTerm,

    /// A run of whitespace.
    Whitespace,

    /// The `is:` prefix of a status predicate.
    DonePrefix,

    /// The `done` / `notdone` value of a status predicate.
    DoneValue,
}

impl TokenKind {
    /// Returns true for tokens that carry no meaning for evaluation.
    pub fn is_noise(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::DonePrefix)
    }

    /// Returns the snake_case name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::AndTerm => "and_term",
            TokenKind::Or => "or",
            TokenKind::OrTerm => "or_term",
            TokenKind::Whitespace => "whitespace",
            TokenKind::DonePrefix => "done_prefix",
            TokenKind::DoneValue => "done_value",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched fragment of a search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
