//! Top-level splitting of raw macro argument text.
//!
//! Splits a comma-separated argument string into its top-level arguments.
//! Parenthesized groups, single-quoted spans, and double-quoted spans are
//! atomic, so commas inside them are not split points. The grammar is
//! total: any input produces a best-effort split, and unbalanced quotes or
//! parentheses swallow the remaining text rather than reporting an error.

use winnow::combinator::{alt, opt, repeat, separated};
use winnow::prelude::*;
use winnow::token::{none_of, take_till};

/// Split raw argument text on top-level commas.
///
/// Each argument is returned as a slice of the input with at most one
/// leading and one trailing space removed. Input without a top-level comma
/// (including the empty string) yields a single element.
///
/// # Example
///
/// ```
/// use gtext::tokenizer::split_arguments;
///
/// assert_eq!(split_arguments("a(b,c), d"), vec!["a(b,c)", "d"]);
/// assert_eq!(split_arguments("'a,b', c"), vec!["'a,b'", "c"]);
/// ```
pub fn split_arguments(raw: &str) -> Vec<&str> {
    let mut input = raw;
    match arguments(&mut input) {
        Ok(args) if input.is_empty() => args,
        // The argument grammar accepts any input; this fallback only guards
        // against future grammar edits losing totality.
        _ => vec![trim_one_space(raw)],
    }
}

/// Parse the full comma-separated argument list.
fn arguments<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(1.., argument.map(trim_one_space), ',').parse_next(input)
}

/// Parse one argument: any run of chunks up to a top-level comma.
fn argument<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(0.., chunk).take().parse_next(input)
}

/// One atomic piece of an argument. The ordering of the alternatives is the
/// tokenizer's preference order: parenthesized group, single-quoted span,
/// double-quoted span, then a bare character.
fn chunk(input: &mut &str) -> ModalResult<()> {
    alt((paren_group, single_quoted, double_quoted, bare_char)).parse_next(input)
}

/// A balanced parenthesized group. The closing parenthesis is optional so
/// that an unbalanced group extends to the end of the input.
fn paren_group(input: &mut &str) -> ModalResult<()> {
    ('(', repeat::<_, _, (), _, _>(0.., group_item), opt(')'))
        .void()
        .parse_next(input)
}

/// Content inside a parenthesized group: nested groups and quoted spans
/// stay atomic; every other character except `)` is consumed as-is.
fn group_item(input: &mut &str) -> ModalResult<()> {
    alt((paren_group, single_quoted, double_quoted, none_of([')']).void())).parse_next(input)
}

fn single_quoted(input: &mut &str) -> ModalResult<()> {
    ('\'', take_till(0.., '\''), opt('\'')).void().parse_next(input)
}

fn double_quoted(input: &mut &str) -> ModalResult<()> {
    ('"', take_till(0.., '"'), opt('"')).void().parse_next(input)
}

/// Any single character other than a top-level comma.
fn bare_char(input: &mut &str) -> ModalResult<()> {
    none_of([',']).void().parse_next(input)
}

/// Strip at most one leading and one trailing space.
fn trim_one_space(argument: &str) -> &str {
    let argument = argument.strip_prefix(' ').unwrap_or(argument);
    argument.strip_suffix(' ').unwrap_or(argument)
}
