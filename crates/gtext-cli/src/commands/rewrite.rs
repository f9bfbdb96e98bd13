//! Implementation of the `gtext rewrite` command.

use gtext::Rewriter;
use serde::Serialize;

/// Arguments for the rewrite command.
#[derive(Debug, clap::Args)]
pub struct RewriteArgs {
    /// Call-site macro name (e.g. "ng_", "dg_", or the generic "_")
    pub name: String,

    /// Raw argument text exactly as written at the call site
    pub args: String,

    /// Pass the plural count separately instead of one combined
    /// count-and-message argument
    #[arg(long)]
    pub separate_count: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for rewrite results.
#[derive(Serialize)]
pub struct RewriteResult {
    pub expression: String,
}

/// Run the rewrite command.
pub fn run_rewrite(args: RewriteArgs) -> miette::Result<i32> {
    let rewriter = Rewriter::builder().one_param(!args.separate_count).build();

    match rewriter.rewrite(&args.name, &args.args) {
        Ok(expression) => {
            if args.json {
                let output = RewriteResult { expression };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", expression);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Rewrite error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
