//! Tests for the search parser and query compilation.

use super::*;

fn kinds(chunk: &Chunk<'_>) -> Vec<TokenKind> {
    chunk.tokens.iter().map(|t| t.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

// ==================== parse_next ====================

#[test]
fn test_parse_next_empty_input() {
    let chunk = parse_next("");
    assert!(chunk.tokens.is_empty());
    assert_eq!(chunk.rest, "");
}

#[test]
fn test_parse_next_single_term() {
    let chunk = parse_next("milk bread");
    assert_eq!(kinds(&chunk), [TokenKind::AndTerm]);
    assert_eq!(texts(&chunk.tokens), ["milk"]);
    assert_eq!(chunk.rest, " bread");
}

#[test]
fn test_parse_next_whitespace_run() {
    let chunk = parse_next(" \t bread");
    assert_eq!(kinds(&chunk), [TokenKind::Whitespace]);
    assert_eq!(chunk.rest, "bread");
}

#[test]
fn test_parse_next_status_is_one_unit() {
    let chunk = parse_next("is:done milk");
    assert_eq!(kinds(&chunk), [TokenKind::DonePrefix, TokenKind::DoneValue]);
    assert_eq!(texts(&chunk.tokens), ["is:", "done"]);
    assert_eq!(chunk.rest, " milk");
}

#[test]
fn test_parse_next_status_allows_space_after_prefix() {
    let chunk = parse_next("is: notdone");
    assert_eq!(
        kinds(&chunk),
        [
            TokenKind::DonePrefix,
            TokenKind::Whitespace,
            TokenKind::DoneValue
        ]
    );
    assert_eq!(chunk.rest, "");
}

#[test]
fn test_parse_next_status_case_insensitive() {
    let chunk = parse_next("IS:NotDone");
    assert_eq!(kinds(&chunk), [TokenKind::DonePrefix, TokenKind::DoneValue]);
    assert_eq!(texts(&chunk.tokens), ["IS:", "NotDone"]);
}

#[test]
fn test_parse_next_status_prefix_without_value_is_a_term() {
    let chunk = parse_next("is:open");
    assert_eq!(kinds(&chunk), [TokenKind::AndTerm]);
    assert_eq!(texts(&chunk.tokens), ["is:open"]);
}

#[test]
fn test_parse_next_status_value_matched_by_prefix() {
    let chunk = parse_next("is:doneish");
    assert_eq!(texts(&chunk.tokens), ["is:", "done"]);
    assert_eq!(chunk.rest, "ish");
}

#[test]
fn test_parse_next_or_sequence() {
    let chunk = parse_next("milk OR bread eggs");
    assert_eq!(
        kinds(&chunk),
        [
            TokenKind::OrTerm,
            TokenKind::Whitespace,
            TokenKind::Or,
            TokenKind::Whitespace,
            TokenKind::OrTerm
        ]
    );
    assert_eq!(chunk.rest, " eggs");
}

#[test]
fn test_parse_next_or_keyword_case_insensitive() {
    for query in ["milk or bread", "milk Or bread", "milk oR bread"] {
        let chunk = parse_next(query);
        assert!(
            chunk.tokens.iter().any(|t| t.kind == TokenKind::Or),
            "expected an OR group for {query:?}"
        );
        assert_eq!(chunk.rest, "");
    }
}

#[test]
fn test_parse_next_or_chain() {
    let chunk = parse_next("a OR b OR c");
    let operands: Vec<&str> = chunk
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::OrTerm)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(operands, ["a", "b", "c"]);
    assert_eq!(chunk.rest, "");
}

#[test]
fn test_parse_next_or_with_status_operand() {
    let chunk = parse_next("milk OR is:done");
    let normalized = chunk.normalized();
    assert_eq!(
        normalized.iter().map(|t| t.kind).collect::<Vec<_>>(),
        [TokenKind::OrTerm, TokenKind::Or, TokenKind::DoneValue]
    );
}

#[test]
fn test_parse_next_word_starting_with_or_is_not_keyword() {
    let chunk = parse_next("milk orange");
    assert_eq!(kinds(&chunk), [TokenKind::AndTerm]);
    assert_eq!(chunk.rest, " orange");
}

#[test]
fn test_parse_next_dangling_or_is_a_term() {
    let chunks = parse_all("milk OR");
    let terms: Vec<Vec<Token>> = chunks.iter().map(|c| c.normalized()).collect();
    assert_eq!(texts(&terms[0]), ["milk"]);
    assert_eq!(texts(&terms[2]), ["or"]);
}

#[test]
fn test_parse_next_trailing_space_after_or_group() {
    let chunk = parse_next("a OR b ");
    assert_eq!(chunk.rest, " ");
}

#[test]
fn test_parse_next_unicode_terms() {
    let chunk = parse_next("café  crème");
    assert_eq!(texts(&chunk.tokens), ["café"]);
    assert_eq!(chunk.rest, "  crème");
}

#[test]
fn test_parse_all_consumes_everything() {
    let input = "  Buy milk OR bread   is:done ";
    let consumed: String = parse_all(input)
        .iter()
        .flat_map(|c| c.tokens.iter().map(|t| t.text.as_str()))
        .collect();
    assert_eq!(consumed, input);
}

#[test]
fn test_normalized_drops_noise_and_lowercases() {
    let chunk = parse_next("Milk OR IS:Done");
    let normalized = chunk.normalized();
    assert_eq!(texts(&normalized), ["milk", "or", "done"]);
}

// ==================== Condition ====================

#[test]
fn test_condition_from_and_term() {
    let tokens = parse_next("Milk").normalized();
    assert_eq!(
        Condition::from_tokens(&tokens),
        Condition::AllTerms(vec!["milk".to_string()])
    );
}

#[test]
fn test_condition_from_status() {
    let tokens = parse_next("is:notdone").normalized();
    assert_eq!(
        Condition::from_tokens(&tokens),
        Condition::Status(DoneState::NotDone)
    );
}

#[test]
fn test_condition_from_or_group() {
    let tokens = parse_next("milk OR is:done").normalized();
    assert_eq!(
        Condition::from_tokens(&tokens),
        Condition::AnyOf(vec![
            Operand::Term("milk".to_string()),
            Operand::Status(DoneState::Done)
        ])
    );
}

#[test]
fn test_condition_first_status_wins_within_chunk() {
    let tokens = vec![
        Token::new(TokenKind::DoneValue, "notdone"),
        Token::new(TokenKind::DoneValue, "done"),
    ];
    assert_eq!(
        Condition::from_tokens(&tokens),
        Condition::Status(DoneState::NotDone)
    );
}

#[test]
fn test_condition_terms_take_priority_over_status() {
    let tokens = vec![
        Token::new(TokenKind::DoneValue, "done"),
        Token::new(TokenKind::AndTerm, "milk"),
    ];
    assert_eq!(
        Condition::from_tokens(&tokens),
        Condition::AllTerms(vec!["milk".to_string()])
    );
}

#[test]
fn test_condition_whitespace_is_unconstrained() {
    let tokens = parse_next("   ").normalized();
    assert_eq!(Condition::from_tokens(&tokens), Condition::Unconstrained);
}

// ==================== SearchQuery ====================

#[test]
fn test_query_empty() {
    assert!(SearchQuery::parse("").is_empty());
    assert!(SearchQuery::parse("   \t ").is_empty());
}

#[test]
fn test_query_terms_become_separate_conditions() {
    let query = SearchQuery::parse("milk bread");
    assert_eq!(
        query.conditions(),
        [
            Condition::AllTerms(vec!["milk".to_string()]),
            Condition::AllTerms(vec!["bread".to_string()])
        ]
    );
}

#[test]
fn test_query_keeps_first_status_only() {
    let query = SearchQuery::parse("is:done milk is:notdone");
    assert_eq!(
        query.conditions(),
        [
            Condition::Status(DoneState::Done),
            Condition::AllTerms(vec!["milk".to_string()])
        ]
    );
}

#[test]
fn test_query_status_inside_or_group_is_kept() {
    let query = SearchQuery::parse("is:done milk OR is:notdone");
    assert_eq!(query.conditions().len(), 2);
}

#[test]
fn test_query_from_str() {
    let query: SearchQuery = "milk".parse().unwrap();
    assert_eq!(query, SearchQuery::parse("milk"));
}

#[test]
fn test_query_display_normalizes() {
    let query = SearchQuery::parse("  Milk   or BREAD  IS: Done ");
    assert_eq!(query.to_string(), "milk OR bread is:done");
}
