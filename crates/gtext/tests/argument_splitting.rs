//! Integration tests for top-level argument splitting.
//!
//! The splitter is a total function: malformed input degrades to a
//! best-effort split instead of an error, and the tests at the bottom pin
//! that behavior so it cannot drift silently.

use gtext::split_arguments;

// =============================================================================
// Plain splitting
// =============================================================================

#[test]
fn test_single_argument() {
    assert_eq!(split_arguments("$name"), vec!["$name"]);
}

#[test]
fn test_splits_on_commas() {
    assert_eq!(split_arguments("'msg', $a, $b"), vec!["'msg'", "$a", "$b"]);
}

#[test]
fn test_empty_input_yields_one_empty_argument() {
    assert_eq!(split_arguments(""), vec![""]);
}

#[test]
fn test_adjacent_commas_yield_empty_arguments() {
    assert_eq!(split_arguments("a,,b"), vec!["a", "", "b"]);
}

#[test]
fn test_trims_at_most_one_space_per_side() {
    assert_eq!(split_arguments(" a ,b"), vec!["a", "b"]);
    assert_eq!(split_arguments("  a  ,b"), vec![" a ", "b"]);
}

#[test]
fn test_arguments_keep_internal_text_untouched() {
    assert_eq!(
        split_arguments("$user->name, strtoupper($x)"),
        vec!["$user->name", "strtoupper($x)"]
    );
}

// =============================================================================
// Atomic spans
// =============================================================================

#[test]
fn test_comma_inside_parentheses() {
    assert_eq!(split_arguments("a(b,c), d"), vec!["a(b,c)", "d"]);
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(split_arguments("a(b(x,y),c), d"), vec!["a(b(x,y),c)", "d"]);
}

#[test]
fn test_comma_inside_single_quotes() {
    assert_eq!(split_arguments("'a,b', c"), vec!["'a,b'", "c"]);
}

#[test]
fn test_comma_inside_double_quotes() {
    assert_eq!(split_arguments("\"a,b\", c"), vec!["\"a,b\"", "c"]);
}

#[test]
fn test_quoted_span_with_leading_text() {
    assert_eq!(split_arguments("ab'c,d', e"), vec!["ab'c,d'", "e"]);
}

#[test]
fn test_parenthesized_group_with_trailing_text() {
    assert_eq!(split_arguments("f(x) + 1, y"), vec!["f(x) + 1", "y"]);
}

#[test]
fn test_quotes_inside_parentheses_stay_atomic() {
    assert_eq!(split_arguments("f('a,b', c), d"), vec!["f('a,b', c)", "d"]);
}

#[test]
fn test_parentheses_inside_quotes_are_plain_text() {
    assert_eq!(split_arguments("'(', x"), vec!["'('", "x"]);
}

// =============================================================================
// Best-effort behavior on unbalanced input
// =============================================================================

#[test]
fn test_unclosed_quote_swallows_the_rest() {
    assert_eq!(split_arguments("'a, b"), vec!["'a, b"]);
}

#[test]
fn test_unclosed_parenthesis_swallows_the_rest() {
    assert_eq!(split_arguments("f(a, b"), vec!["f(a, b"]);
}

#[test]
fn test_stray_closing_parenthesis_is_plain_text() {
    assert_eq!(split_arguments("a), b"), vec!["a)", "b"]);
}
