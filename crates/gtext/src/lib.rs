//! Rewriting of shorthand translation macros into fully qualified
//! translation function calls.
//!
//! Template engines expose short aliases (`g_`, `ng_`, `dg_`, `dng_`, and
//! the generic `_`) for the gettext function family. This crate turns one
//! such call site — a macro name plus its raw, unparsed argument text —
//! into a single host expression string: the raw text is split into
//! top-level arguments, the intended variant is resolved or inferred, the
//! arguments are reordered and padded to the target signature, and calls
//! whose message carries `%s` placeholders are wrapped in a `sprintf`
//! interpolation around the trailing value arguments.
//!
//! The rewriter holds no per-call state, so one instance can serve any
//! number of call sites, concurrently if the host compiles templates in
//! parallel.
//!
//! # Example
//!
//! ```
//! use gtext::Rewriter;
//!
//! let rewriter = Rewriter::default();
//! let out = rewriter.rewrite("ng_", "'%s item', $count").unwrap();
//! assert_eq!(out, "sprintf(ngettext('%s item', '%s item', $count), $count)");
//! ```

pub mod error;
pub mod rewriter;
pub mod tokenizer;
pub mod variant;

pub use error::RewriteError;
pub use rewriter::Rewriter;
pub use tokenizer::split_arguments;
pub use variant::{FUNCTION_SUFFIX, VARIANTS, Variant};
