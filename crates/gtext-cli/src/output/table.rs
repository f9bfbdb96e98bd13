//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use gtext::Variant;

/// Format the variant registry as an ASCII table.
pub fn format_variant_table(variants: &[Variant]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Prefix", "Function", "Arity", "Plural", "Domain"]);

    for variant in variants {
        table.add_row(vec![
            variant.prefix.to_string(),
            variant.function_name(),
            variant.base_arity.to_string(),
            yes_no(variant.is_plural()),
            yes_no(variant.is_domain_qualified()),
        ]);
    }

    table
}

/// Render a flag as "yes" or "no".
fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
