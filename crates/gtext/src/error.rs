//! Error types for macro rewriting.

use strsim::levenshtein;
use thiserror::Error;

use crate::variant::VARIANTS;

/// A fatal error raised while rewriting one macro call site.
///
/// Both kinds abort compilation of the containing template. The library has
/// no notion of source positions; hosts are expected to attach the
/// call-site location when reporting.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// An explicit variant prefix does not name any registered variant.
    #[error("unknown translation macro prefix '{prefix}'{}", format_suggestions(suggestions))]
    UnresolvedVariant {
        prefix: String,
        /// Registered prefixes within edit distance of the unknown one.
        suggestions: Vec<String>,
    },

    /// The generic alias's leading token selects no registered variant.
    #[error("wrong macro: cannot infer a translation variant from '{args}'")]
    WrongMacro { args: String },
}

/// Compute typo suggestions for an unknown prefix using Levenshtein
/// distance: distance <= 1 for prefixes up to 3 chars, <= 2 for longer
/// ones, at most 3 suggestions sorted by distance.
pub(crate) fn suggest_prefixes(unknown: &str) -> Vec<String> {
    let max_distance = if unknown.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = VARIANTS
        .iter()
        .filter_map(|variant| {
            let dist = levenshtein(unknown, variant.prefix);
            (dist <= max_distance && dist > 0).then_some((dist, variant.prefix))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, prefix)| prefix.to_string())
        .collect()
}

/// Render the suggestion list for error display.
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean '{}'?)", suggestions.join("', '"))
    }
}
