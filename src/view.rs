//! View model.
//!
//! A [`View`] is a [`Relation`] plus the defining query and a record of how
//! its column list came to be.
//!
//! ## Column Declaration
//!
//! Columns get into a view in one of two ways:
//!
//! 1. **Declared**: `CREATE VIEW v (a, b) AS ...`. The whole list is set once
//!    through [`View::declare_column_names`], before any per-column metadata.
//!    From then on the list is closed: defaults and comments may only target
//!    declared names.
//! 2. **Inferred**: no column list on the view. Columns appear one by one, in
//!    first-reference order, as `ALTER VIEW ... SET DEFAULT` or
//!    `COMMENT ON COLUMN` statements mention them.
//!
//! The declared flag moves from unset to set at most once and never goes
//! back. Every broken precondition is reported as an invariant-violation
//! [`PgViewError`] and leaves the view untouched.

use serde::Serialize;

use crate::column::{Column, ColumnList};
use crate::error::PgViewError;
use crate::relation::Relation;

/// A database view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    #[serde(flatten)]
    relation: Relation,
    query: String,
    /// Whether the column names were declared along with the view.
    declared_column_names: bool,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            relation: Relation::new(name),
            query: String::new(),
            declared_column_names: false,
        }
    }

    pub fn name(&self) -> &str {
        self.relation.name()
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn comment(&self) -> Option<&str> {
        self.relation.comment()
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.relation.set_comment(comment);
    }

    pub fn columns(&self) -> &ColumnList {
        self.relation.columns()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.relation.column(name)
    }

    pub fn has_declared_column_names(&self) -> bool {
        self.declared_column_names
    }

    /// Declare the view's column list.
    ///
    /// Allowed once, and only while the view has no columns. An absent or
    /// empty list is a no-op and leaves the view undeclared.
    pub fn declare_column_names<S: AsRef<str>>(
        &mut self,
        names: Option<&[S]>,
    ) -> Result<(), PgViewError> {
        if self.declared_column_names {
            tracing::warn!(view = %self.name(), "column names declared twice");
            return Err(PgViewError::ColumnsAlreadyDeclared {
                view: self.name().to_string(),
            });
        }
        if !self.columns().is_empty() {
            tracing::warn!(
                view = %self.name(),
                columns = self.columns().len(),
                "column names declared after columns were populated"
            );
            return Err(PgViewError::ColumnsAlreadyPresent {
                view: self.name().to_string(),
                count: self.columns().len(),
            });
        }

        let names = match names {
            Some(names) if !names.is_empty() => names,
            _ => return Ok(()),
        };

        let mut columns = ColumnList::new();
        for name in names {
            if !columns.push(name.as_ref()) {
                tracing::warn!(
                    view = %self.name(),
                    column = name.as_ref(),
                    "column name declared more than once"
                );
                return Err(PgViewError::DuplicateColumn {
                    view: self.name().to_string(),
                    column: name.as_ref().to_string(),
                });
            }
        }
        *self.relation.columns_mut() = columns;
        self.declared_column_names = true;

        tracing::debug!(
            view = %self.name(),
            columns = self.columns().len(),
            "declared view column names"
        );
        Ok(())
    }

    /// The declared column names in declaration order, or `None` when the
    /// view never declared them (even if columns were created since).
    pub fn declared_column_names(&self) -> Option<Vec<String>> {
        self.declared_column_names.then(|| self.columns().names())
    }

    /// Set (or with `None`, remove) the default value of a column.
    pub fn set_column_default(
        &mut self,
        column: &str,
        value: Option<&str>,
    ) -> Result<(), PgViewError> {
        self.column_for_update(column)?.set_default_value(value);
        Ok(())
    }

    /// Remove a column's default value. The column keeps its position.
    pub fn clear_column_default(&mut self, column: &str) -> Result<(), PgViewError> {
        self.set_column_default(column, None)
    }

    /// Set (or with `None`, remove) the comment of a column.
    pub fn set_column_comment(
        &mut self,
        column: &str,
        comment: Option<&str>,
    ) -> Result<(), PgViewError> {
        self.column_for_update(column)?.set_comment(comment);
        Ok(())
    }

    /// Remove a column's comment. The column keeps its position.
    pub fn clear_column_comment(&mut self, column: &str) -> Result<(), PgViewError> {
        self.set_column_comment(column, None)
    }

    /// Find a column for a metadata update, creating it if the column list
    /// is still open.
    fn column_for_update(&mut self, column: &str) -> Result<&mut Column, PgViewError> {
        if self.declared_column_names && self.columns().get(column).is_none() {
            tracing::warn!(view = %self.name(), column, "metadata for undeclared column");
            return Err(PgViewError::UndeclaredColumn {
                view: self.name().to_string(),
                column: column.to_string(),
            });
        }

        if self.columns().get(column).is_none() {
            tracing::trace!(view = %self.name(), column, "appended inferred view column");
        }
        Ok(self.relation.columns_mut().get_or_insert(column).0)
    }
}
