//! Relation columns and the ordered, name-keyed column collection.

use serde::Serialize;

/// A column of a table or view: name plus the optional metadata the DDL
/// renderer cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    /// Raw SQL expression text, inserted verbatim into `SET DEFAULT`.
    default_value: Option<String>,
    /// Raw SQL literal text, inserted verbatim into `COMMENT ... IS`.
    comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn set_default_value(&mut self, value: Option<&str>) {
        self.default_value = value.map(str::to_string);
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.comment = comment.map(str::to_string);
    }
}

/// Ordered collection of columns with unique names.
///
/// Iteration follows insertion order. Columns are only reachable through
/// borrows of the owning collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnList {
    columns: Vec<Column>,
}

impl ColumnList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Append a new, metadata-free column. Returns `false` and leaves the
    /// list untouched if the name is already taken.
    pub fn push(&mut self, name: &str) -> bool {
        if self.position(name).is_some() {
            return false;
        }
        self.columns.push(Column::new(name));
        true
    }

    /// Return the column called `name`, appending it first if absent.
    ///
    /// The boolean is `true` when the column was created by this call.
    pub fn get_or_insert(&mut self, name: &str) -> (&mut Column, bool) {
        match self.position(name) {
            Some(idx) => (&mut self.columns[idx], false),
            None => {
                self.columns.push(Column::new(name));
                let idx = self.columns.len() - 1;
                (&mut self.columns[idx], true)
            }
        }
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
