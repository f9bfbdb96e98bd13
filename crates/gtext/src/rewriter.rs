//! Call rewriting: variant resolution, argument assembly, and emission.
//!
//! This module provides the engine that turns one macro call site into a
//! host expression string. It resolves which translation variant the call
//! site names (or infers it for the generic alias), normalizes the
//! tokenized arguments to the target function's fixed signature, and wraps
//! the emitted call in a `sprintf` interpolation when the message still
//! carries `%s` placeholders.

use std::borrow::Cow;

use bon::Builder;

use crate::error::{RewriteError, suggest_prefixes};
use crate::tokenizer::split_arguments;
use crate::variant::Variant;

/// Function wrapped around rewritten calls whose message carries positional
/// placeholders.
const INTERPOLATION_FUNCTION: &str = "sprintf";

/// Two-character marker for one value-substitution slot in a message.
const PLACEHOLDER: &str = "%s";

/// Argument slot patched by the plural-override and absolute-value scans
/// (the third argument of the assembled call).
const PLURAL_SLOT: usize = 2;

/// Resolved per-call state, threaded through the rewrite steps.
///
/// Created when the variant is resolved and dropped when the expression has
/// been emitted; it is never stored on the [`Rewriter`].
#[derive(Debug, Clone)]
struct CallState {
    /// Target function name, e.g. `ngettext`.
    function: String,
    /// Number of arguments the target call consumes.
    arity: usize,
    plural: bool,
    domain_qualified: bool,
}

/// Rewrites shorthand translation macro calls into fully qualified
/// translation function calls.
///
/// All per-call state lives in locals of [`Rewriter::rewrite`], so a single
/// instance can be shared freely between call sites and threads.
///
/// # Example
///
/// ```
/// use gtext::Rewriter;
///
/// let rewriter = Rewriter::default();
/// assert_eq!(rewriter.rewrite("g_", "'Hello'").unwrap(), "gettext('Hello')");
///
/// // Plural calls supply one combined count-and-message argument unless
/// // `one_param` is disabled at construction:
/// let rewriter = Rewriter::builder().one_param(false).build();
/// assert_eq!(
///     rewriter.rewrite("ng_", "'one', 'many', $n").unwrap(),
///     "ngettext('one', 'many', $n)"
/// );
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Rewriter {
    /// When set, plural calls supply one combined count-and-message
    /// argument that is re-expanded into the two-argument plural
    /// convention.
    #[builder(default = true)]
    one_param: bool,
}

impl Default for Rewriter {
    fn default() -> Self {
        Rewriter::builder().build()
    }
}

impl Rewriter {
    /// Rewrite one macro call site into a host expression string.
    ///
    /// `name` is the call-site macro name: an explicit variant prefix with
    /// an optional trailing `_` separator (`"ng_"`, `"dg"`), or the generic
    /// alias whose name consists only of separators (`"_"`). `raw_args` is
    /// the argument text exactly as written at the call site.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::UnresolvedVariant`] for an explicit prefix
    /// outside the registry, and [`RewriteError::WrongMacro`] when the
    /// generic alias's leading token selects no variant. Both are fatal for
    /// the containing template.
    pub fn rewrite(&self, name: &str, raw_args: &str) -> Result<String, RewriteError> {
        let prefix = name.trim_end_matches('_');
        let (state, args_text) = if prefix.is_empty() {
            self.detect_variant(raw_args)?
        } else {
            (self.resolve_variant(prefix)?, raw_args)
        };

        let tokens = split_arguments(args_text);
        let call_args = self.build_call_arguments(&state, &tokens);
        Ok(emit(&state, &call_args, &tokens))
    }

    /// Resolve an explicit variant prefix against the closed registry.
    fn resolve_variant(&self, prefix: &str) -> Result<CallState, RewriteError> {
        let variant = Variant::lookup(prefix).ok_or_else(|| RewriteError::UnresolvedVariant {
            prefix: prefix.to_string(),
            suggestions: suggest_prefixes(prefix),
        })?;
        Ok(self.call_state(variant))
    }

    /// Infer the variant for the generic alias from the run of characters
    /// before the first quote, e.g. `n'item', $n` selects the plural
    /// variant. Returns the adopted state and the argument text with the
    /// leading run removed.
    fn detect_variant<'a>(
        &self,
        raw_args: &'a str,
    ) -> Result<(CallState, &'a str), RewriteError> {
        let wrong_macro = || RewriteError::WrongMacro { args: raw_args.to_string() };
        let at = raw_args.find(['\'', '"']).ok_or_else(wrong_macro)?;
        let run = &raw_args[..at];
        // The leading run plus the plain-singular marker must name a
        // registered prefix ("n" + "g" -> "ng").
        let variant = Variant::lookup(&format!("{run}g")).ok_or_else(wrong_macro)?;
        Ok((self.call_state(variant), &raw_args[at..]))
    }

    /// Build the per-call state for a resolved variant, applying the plural
    /// arity adjustment for the combined count-and-message mode.
    fn call_state(&self, variant: Variant) -> CallState {
        let mut arity = variant.base_arity;
        if variant.is_plural() && self.one_param {
            arity -= 1;
        }
        CallState {
            function: variant.function_name(),
            arity,
            plural: variant.is_plural(),
            domain_qualified: variant.is_domain_qualified(),
        }
    }

    /// Assemble the argument list for the target call: the first `arity`
    /// tokens in source order, with the plural structural edits applied.
    fn build_call_arguments<'a>(
        &self,
        state: &CallState,
        tokens: &[&'a str],
    ) -> Vec<Cow<'a, str>> {
        let base = tokens.len().min(state.arity);
        let mut out: Vec<Cow<'a, str>> =
            tokens[..base].iter().copied().map(Cow::Borrowed).collect();
        if !state.plural {
            return out;
        }

        if self.one_param && !out.is_empty() {
            // The combined argument is read as the count; a copy of the
            // same expression fills the message slot ahead of it.
            let count = out[0].clone();
            out.insert(0, count);
        }

        // Any argument of the original list mentioning "plural" overrides
        // the plural slot, appending when the list is still shorter.
        for token in tokens {
            if contains_ignore_case(token, "plural") {
                if out.len() > PLURAL_SLOT {
                    out[PLURAL_SLOT] = Cow::Borrowed(*token);
                } else {
                    out.push(Cow::Borrowed(*token));
                }
            }
        }

        // A count expression mentioning "abs" is wrapped as an absolute
        // value.
        if let Some(slot) = out.get(PLURAL_SLOT) {
            if contains_ignore_case(slot, "abs") {
                let wrapped = format!("abs({slot})");
                out[PLURAL_SLOT] = Cow::Owned(wrapped);
            }
        }

        out
    }
}

/// Emit the final expression, wrapping it in an interpolation call when the
/// message argument carries `%s` placeholders.
fn emit(state: &CallState, call_args: &[Cow<'_, str>], tokens: &[&str]) -> String {
    let expression = format!("{}({})", state.function, call_args.join(", "));

    let message_index = usize::from(state.domain_qualified);
    let placeholders = call_args
        .get(message_index)
        .map_or(0, |message| message.matches(PLACEHOLDER).count());
    if placeholders == 0 {
        return expression;
    }

    // The trailing arguments of the original list, one per placeholder,
    // become the interpolation values.
    let values = &tokens[tokens.len().saturating_sub(placeholders)..];
    format!("{INTERPOLATION_FUNCTION}({expression}, {})", values.join(", "))
}

/// Case-insensitive substring test on raw argument text.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}
