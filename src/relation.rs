//! State shared by every relation kind (tables and views).

use serde::Serialize;

use crate::column::{Column, ColumnList};
use crate::quoting::Quoter;

/// Name, columns and comment of a relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relation {
    name: String,
    columns: ColumnList,
    comment: Option<String>,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: ColumnList::new(),
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut ColumnList {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.comment = comment.map(str::to_string);
    }

    /// `COMMENT ON COLUMN` statements for every column carrying a non-empty
    /// comment, in column order.
    pub fn column_comment_statements<Q: Quoter + ?Sized>(&self, quoter: &Q) -> Vec<String> {
        let relation = quoter.quote(&self.name);
        self.columns
            .iter()
            .filter_map(|col| match col.comment() {
                Some(comment) if !comment.is_empty() => Some(format!(
                    "COMMENT ON COLUMN {relation}.{} IS {comment};",
                    quoter.quote(col.name())
                )),
                _ => None,
            })
            .collect()
    }
}
