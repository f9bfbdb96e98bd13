//! Implementation of the `gtext variants` command.

use gtext::VARIANTS;

use crate::output::format_variant_table;

/// Arguments for the variants command.
#[derive(Debug, clap::Args)]
pub struct VariantsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the variants command.
pub fn run_variants(args: VariantsArgs) -> miette::Result<i32> {
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&VARIANTS)
                .expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_variant_table(&VARIANTS));
    }
    Ok(exitcode::OK)
}
