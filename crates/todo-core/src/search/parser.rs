//! Chunked parser for search strings.
//!
//! Each call to [`parse_next`] performs exactly one top-level match at the
//! start of its input and hands back the unconsumed suffix. The grammar:
//!
//! ```text
//! chunk    ::= or_seq | and_alt          (longest wins, or_seq on ties)
//! or_seq   ::= (operand ws "OR" ws)+ operand
//! and_alt  ::= status | term | ws        (first match wins)
//! operand  ::= status | term | ws        (first match wins)
//! status   ::= "is:" ws? ("done" | "notdone")
//! term     ::= non-whitespace run
//! ws       ::= whitespace run
//! ```
//!
//! `OR`, `is:` and the status values are matched case-insensitively. There is
//! no reject state: input that fits nothing else is consumed as a term.

use super::token::{Token, TokenKind};

/// Prefix of a status predicate.
const DONE_PREFIX: &str = "is:";

/// Keyword joining the operands of an OR group.
const OR_KEYWORD: &str = "or";

/// Status values, in the order they are tried.
const DONE_VALUES: [&str; 2] = ["done", "notdone"];

/// The result of one parser invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Tokens consumed by this invocation, left to right.
    pub tokens: Vec<Token>,
    /// The part of the input still to be parsed.
    pub rest: &'a str,
}

impl Chunk<'_> {
    /// Drops whitespace and `is:` tokens and lower-cases the remaining text.
    pub fn normalized(&self) -> Vec<Token> {
        self.tokens
            .iter()
            .filter(|token| !token.kind.is_noise())
            .map(|token| Token::new(token.kind, token.text.to_lowercase()))
            .collect()
    }
}

/// A successful match: the tokens and the number of bytes they cover.
#[derive(Debug, Default)]
struct Match {
    tokens: Vec<Token>,
    len: usize,
}

impl Match {
    fn single(kind: TokenKind, text: &str) -> Self {
        Self {
            tokens: vec![Token::new(kind, text)],
            len: text.len(),
        }
    }

    fn extend(&mut self, other: Match) {
        self.len += other.len;
        self.tokens.extend(other.tokens);
    }
}

/// Parses one chunk from the start of `input`.
///
/// Returns an empty chunk when `input` is empty; otherwise at least one
/// byte is always consumed.
pub fn parse_next(input: &str) -> Chunk<'_> {
    let or_seq = or_sequence(input);
    let and_alt = and_alternative(input);

    let best = match (or_seq, and_alt) {
        (Some(or), Some(and)) if and.len > or.len => and,
        (Some(or), _) => or,
        (None, Some(and)) => and,
        (None, None) => Match::default(),
    };

    Chunk {
        tokens: best.tokens,
        rest: &input[best.len..],
    }
}

/// Splits `input` into every chunk, in order.
pub fn parse_all(input: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let chunk = parse_next(rest);
        rest = chunk.rest;
        chunks.push(chunk);
    }
    chunks
}

fn and_alternative(input: &str) -> Option<Match> {
    operand(input, TokenKind::AndTerm)
}

fn operand(input: &str, term_kind: TokenKind) -> Option<Match> {
    status(input)
        .or_else(|| term(input, term_kind))
        .or_else(|| whitespace(input))
}

fn or_sequence(input: &str) -> Option<Match> {
    let mut matched = Match::default();
    let mut links = 0;
    while let Some(link) = or_link(&input[matched.len..]) {
        matched.extend(link);
        links += 1;
    }
    if links == 0 {
        return None;
    }

    let last = operand(&input[matched.len..], TokenKind::OrTerm)?;
    matched.extend(last);
    Some(matched)
}

/// `operand ws "OR" ws`, all or nothing.
fn or_link(input: &str) -> Option<Match> {
    let mut matched = operand(input, TokenKind::OrTerm)?;
    matched.extend(whitespace(&input[matched.len..])?);
    matched.extend(keyword(&input[matched.len..], OR_KEYWORD, TokenKind::Or)?);
    matched.extend(whitespace(&input[matched.len..])?);
    Some(matched)
}

fn status(input: &str) -> Option<Match> {
    let mut matched = keyword(input, DONE_PREFIX, TokenKind::DonePrefix)?;
    if let Some(ws) = whitespace(&input[matched.len..]) {
        matched.extend(ws);
    }

    let rest = &input[matched.len..];
    let value = DONE_VALUES
        .iter()
        .find_map(|value| keyword(rest, value, TokenKind::DoneValue))?;
    matched.extend(value);
    Some(matched)
}

fn term(input: &str, kind: TokenKind) -> Option<Match> {
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    (end > 0).then(|| Match::single(kind, &input[..end]))
}

fn whitespace(input: &str) -> Option<Match> {
    let end = input.len() - input.trim_start().len();
    (end > 0).then(|| Match::single(TokenKind::Whitespace, &input[..end]))
}

/// Matches `word` at the start of `input`, ignoring ASCII case.
fn keyword(input: &str, word: &str, kind: TokenKind) -> Option<Match> {
    let head = input.get(..word.len())?;
    head.eq_ignore_ascii_case(word)
        .then(|| Match::single(kind, head))
}
