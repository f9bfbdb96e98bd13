//! The closed registry of translation-function variants.

use serde::Serialize;

/// Suffix appended to a variant prefix to form the target function name
/// (`"g"` becomes `gettext`, `"dng"` becomes `dngettext`).
pub const FUNCTION_SUFFIX: &str = "ettext";

/// Descriptor for one translation-function family.
///
/// The registry is closed: exactly four variants exist, distinguished by
/// the plural marker (`n` in the prefix) and the explicit catalog domain
/// marker (`d` at the start of the prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Short call-site alias: `g`, `ng`, `dg`, or `dng`.
    pub prefix: &'static str,
    /// Declared parameter count of the target function before plural
    /// adjustment.
    pub base_arity: usize,
}

/// The four supported variants and their declared arities.
pub const VARIANTS: [Variant; 4] = [
    Variant { prefix: "g", base_arity: 1 },
    Variant { prefix: "ng", base_arity: 3 },
    Variant { prefix: "dg", base_arity: 2 },
    Variant { prefix: "dng", base_arity: 4 },
];

impl Variant {
    /// Look up a variant by exact prefix match.
    pub fn lookup(prefix: &str) -> Option<Variant> {
        VARIANTS.iter().copied().find(|variant| variant.prefix == prefix)
    }

    /// True if this variant carries a plural form.
    pub fn is_plural(self) -> bool {
        self.prefix.contains('n')
    }

    /// True if the first parameter is an explicit catalog domain.
    pub fn is_domain_qualified(self) -> bool {
        self.prefix.starts_with('d')
    }

    /// Name of the target translation function.
    pub fn function_name(self) -> String {
        format!("{}{FUNCTION_SUFFIX}", self.prefix)
    }
}
