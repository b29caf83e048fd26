//! Tests for search evaluation.

use super::*;
use crate::model::Item;

// ==================== Test Helpers ====================

const LIST: &str = "inbox";

fn make_item(id: &str, summary: &str) -> Item {
    Item::new(id, LIST, summary)
}

fn matches(query: &str, item: &Item) -> bool {
    let query = SearchQuery::parse(query);
    SearchEvaluator::new(&query, LIST).matches(item)
}

// ==================== Terms ====================

#[test]
fn test_single_term_matches_substring() {
    assert!(matches("milk", &make_item("1", "Buy milk")));
    assert!(!matches("milk", &make_item("2", "Clean house")));
}

#[test]
fn test_term_is_case_insensitive() {
    assert!(matches("MILK", &make_item("1", "Buy milk")));
    assert!(matches("milk", &make_item("1", "BUY MILK")));
}

#[test]
fn test_term_matches_inside_words() {
    assert!(matches("ilk", &make_item("1", "Buy milk")));
}

#[test]
fn test_all_terms_must_match() {
    let item = make_item("1", "Buy milk");
    assert!(!matches("milk bread", &item));
    assert!(matches("milk bread", &make_item("2", "Buy milk and bread")));
}

#[test]
fn test_terms_match_in_any_order() {
    assert!(matches("bread milk", &make_item("1", "milk and bread")));
}

#[test]
fn test_empty_query_matches_everything() {
    assert!(matches("", &make_item("1", "anything")));
    assert!(matches("   ", &make_item("1", "anything")));
}

#[test]
fn test_unknown_syntax_is_searched_literally() {
    assert!(matches("(milk", &make_item("1", "call (milk) man")));
    assert!(!matches("(milk", &make_item("2", "milk")));
}

// ==================== Status ====================

#[test]
fn test_is_done_matches_only_complete() {
    let done = make_item("1", "Buy milk").completed(true);
    let open = make_item("2", "Buy milk");

    assert!(matches("is:done", &done));
    assert!(!matches("is:done", &open));
}

#[test]
fn test_is_notdone_matches_only_incomplete() {
    let done = make_item("1", "Buy milk").completed(true);
    let open = make_item("2", "Buy milk");

    assert!(!matches("is:notdone", &done));
    assert!(matches("is:notdone", &open));
}

#[test]
fn test_status_is_case_insensitive() {
    let done = make_item("1", "Buy milk").completed(true);
    assert!(matches("IS:DONE", &done));
    assert!(!matches("Is:NotDone", &done));
}

#[test]
fn test_status_combined_with_terms() {
    let done = make_item("1", "Buy milk").completed(true);
    assert!(matches("milk is:done", &done));
    assert!(matches("is:done milk", &done));
    assert!(!matches("bread is:done", &done));
    assert!(!matches("milk is:notdone", &done));
}

#[test]
fn test_second_status_is_ignored() {
    let done = make_item("1", "Buy milk").completed(true);
    let open = make_item("2", "Buy milk");

    assert!(matches("is:done is:notdone", &done));
    assert!(!matches("is:done is:notdone", &open));
}

// ==================== OR groups ====================

#[test]
fn test_or_matches_either_operand() {
    assert!(matches("milk OR bread", &make_item("1", "Buy bread")));
    assert!(matches("milk OR bread", &make_item("2", "Buy milk")));
    assert!(!matches("milk OR bread", &make_item("3", "Clean house")));
}

#[test]
fn test_or_chain() {
    let query = "milk OR bread OR eggs";
    assert!(matches(query, &make_item("1", "Eggs")));
    assert!(!matches(query, &make_item("2", "Ham")));
}

#[test]
fn test_or_with_status_operand() {
    let query = "milk OR is:done";
    assert!(matches(query, &make_item("1", "Buy milk")));
    assert!(matches(query, &make_item("2", "Clean house").completed(true)));
    assert!(!matches(query, &make_item("3", "Clean house")));
}

#[test]
fn test_or_group_anded_with_other_terms() {
    let query = "buy milk OR bread";
    assert!(matches(query, &make_item("1", "Buy bread")));
    assert!(!matches(query, &make_item("2", "Bake bread")));
}

#[test]
fn test_lowercase_or_is_keyword() {
    assert!(matches("milk or bread", &make_item("1", "bread")));
}

// ==================== List scoping ====================

#[test]
fn test_other_list_never_matches() {
    let item = Item::new("1", "work", "Buy milk");
    assert!(!matches("", &item));
    assert!(!matches("milk", &item));
}

#[test]
fn test_filter_items() {
    let items = vec![
        make_item("1", "Buy milk"),
        make_item("2", "Clean house"),
        Item::new("3", "work", "Buy milk"),
        make_item("4", "milk shake").completed(true),
    ];

    let query = SearchQuery::parse("milk is:notdone");
    let evaluator = SearchEvaluator::new(&query, LIST);
    let ids: Vec<&str> = evaluator
        .filter_items(&items)
        .iter()
        .map(|i| i.id.as_str())
        .collect();

    assert_eq!(ids, ["1"]);
}
