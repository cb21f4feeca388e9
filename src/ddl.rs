//! DDL synthesis for views.
//!
//! Rendering is pure string construction over a fully built [`View`]. The
//! creation script is assembled as a list of statements that is joined once,
//! with one blank line between statements:
//!
//! 1. `CREATE VIEW`, with the column list only when names were declared
//! 2. one `ALTER VIEW ... SET DEFAULT` per column with a default
//! 3. `COMMENT ON VIEW` when the view has a comment
//! 4. one `COMMENT ON COLUMN` per commented column
//!
//! Defaults and comments are raw SQL text and are emitted verbatim.

use crate::error::PgViewError;
use crate::quoting::Quoter;
use crate::view::View;

/// Separator between statements of a creation script.
pub const STATEMENT_SEPARATOR: &str = "\n\n";

/// Build the `CREATE VIEW` script as an ordered list of statements.
pub fn render_create_statements<Q: Quoter + ?Sized>(
    view: &View,
    quoter: &Q,
) -> Result<Vec<String>, PgViewError> {
    if view.query().is_empty() {
        tracing::warn!(view = %view.name(), "rendering a view without a query");
        return Err(PgViewError::QueryNotSet {
            view: view.name().to_string(),
        });
    }

    let name = quoter.quote(view.name());
    let mut statements = Vec::with_capacity(2 + view.columns().len());

    let column_list = match view.declared_column_names() {
        Some(names) => format!(
            " ({})",
            names
                .iter()
                .map(|c| quoter.quote(c))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None => String::new(),
    };
    statements.push(format!(
        "CREATE VIEW {name}{column_list} AS\n\t{};",
        view.query()
    ));

    for col in view.columns() {
        if let Some(default) = col.default_value().filter(|d| !d.is_empty()) {
            statements.push(format!(
                "ALTER VIEW {name} ALTER COLUMN {} SET DEFAULT {default};",
                quoter.quote(col.name())
            ));
        }
    }

    if let Some(comment) = view.comment().filter(|c| !c.is_empty()) {
        statements.push(format!("COMMENT ON VIEW {name} IS {comment};"));
    }

    statements.extend(view.relation().column_comment_statements(quoter));

    tracing::debug!(
        view = %view.name(),
        statements = statements.len(),
        "rendered CREATE VIEW script"
    );
    Ok(statements)
}

/// Render the full `CREATE VIEW` script.
pub fn render_create<Q: Quoter + ?Sized>(view: &View, quoter: &Q) -> Result<String, PgViewError> {
    Ok(render_create_statements(view, quoter)?.join(STATEMENT_SEPARATOR))
}

/// Render `DROP VIEW`.
pub fn render_drop<Q: Quoter + ?Sized>(view: &View, quoter: &Q) -> String {
    format!("DROP VIEW {};", quoter.quote(view.name()))
}
