//! SQL identifier quoting.
//!
//! The renderer never quotes identifiers itself; it goes through a
//! [`Quoter`] so the target engine's convention can be swapped out.

/// Wraps an identifier in the target engine's quoting convention.
pub trait Quoter {
    fn quote(&self, ident: &str) -> String;
}

/// Always wrap in double quotes, doubling embedded quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysQuote;

impl Quoter for AlwaysQuote {
    fn quote(&self, ident: &str) -> String {
        quote_ident(ident)
    }
}

/// Emit plain lower-case identifiers bare and quote everything else.
///
/// An identifier stays bare when it starts with `[a-z_]`, contains only
/// `[a-z0-9_$]` and is not a reserved keyword. Anything else (upper case,
/// spaces, punctuation, keywords, the empty string) is double-quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteWhenNeeded;

impl Quoter for QuoteWhenNeeded {
    fn quote(&self, ident: &str) -> String {
        if needs_quoting(ident) {
            quote_ident(ident)
        } else {
            ident.to_string()
        }
    }
}

/// Helper: quote a SQL identifier.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Whether `ident` must be quoted to survive PostgreSQL's case folding and
/// keyword parsing.
pub fn needs_quoting(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return true,
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$') {
        return true;
    }
    is_reserved_keyword(ident)
}

/// Reserved keywords (PostgreSQL "reserved" and "reserved, can be function or
/// type" categories). Sorted for binary search.
const RESERVED_KEYWORDS: &[&str] = &[
    "all",
    "analyse",
    "analyze",
    "and",
    "any",
    "array",
    "as",
    "asc",
    "asymmetric",
    "authorization",
    "binary",
    "both",
    "case",
    "cast",
    "check",
    "collate",
    "collation",
    "column",
    "concurrently",
    "constraint",
    "create",
    "cross",
    "current_catalog",
    "current_date",
    "current_role",
    "current_schema",
    "current_time",
    "current_timestamp",
    "current_user",
    "default",
    "deferrable",
    "desc",
    "distinct",
    "do",
    "else",
    "end",
    "except",
    "false",
    "fetch",
    "for",
    "foreign",
    "freeze",
    "from",
    "full",
    "grant",
    "group",
    "having",
    "ilike",
    "in",
    "initially",
    "inner",
    "intersect",
    "into",
    "is",
    "isnull",
    "join",
    "lateral",
    "leading",
    "left",
    "like",
    "limit",
    "localtime",
    "localtimestamp",
    "natural",
    "not",
    "notnull",
    "null",
    "offset",
    "on",
    "only",
    "or",
    "order",
    "outer",
    "overlaps",
    "placing",
    "primary",
    "references",
    "returning",
    "right",
    "select",
    "session_user",
    "similar",
    "some",
    "symmetric",
    "system_user",
    "table",
    "tablesample",
    "then",
    "to",
    "trailing",
    "true",
    "union",
    "unique",
    "user",
    "using",
    "variadic",
    "verbose",
    "when",
    "where",
    "window",
    "with",
];

fn is_reserved_keyword(ident: &str) -> bool {
    RESERVED_KEYWORDS.binary_search(&ident).is_ok()
}
