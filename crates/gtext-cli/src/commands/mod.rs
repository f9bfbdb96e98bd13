//! CLI command implementations.

mod rewrite;
mod variants;

pub use rewrite::{run_rewrite, RewriteArgs};
pub use variants::{run_variants, VariantsArgs};
