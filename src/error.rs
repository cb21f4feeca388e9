//! Error types for pg_view_ddl.
//!
//! All errors are represented by [`PgViewError`] and propagated via
//! `Result<T, PgViewError>`.
//!
//! # Error Classification
//!
//! - **Invariant**: the caller broke a precondition of the view model
//!   (declaring columns twice, declaring after columns exist, repeating a
//!   name in a declaration, touching an undeclared column, rendering a view
//!   without a query). These are bugs in the calling diff logic, not bad
//!   input data. The offending call leaves
//!   the view unchanged and no DDL is produced.
//! - **Config**: the renderer configuration could not be loaded.

use std::fmt;

/// Primary error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PgViewError {
    // ── Invariant violations, caller bugs ───────────────────────────────
    /// Column names were already declared for this view.
    #[error("column names already declared for view {view}")]
    ColumnsAlreadyDeclared { view: String },

    /// Column names can only be declared before any column exists.
    #[error("cannot declare column names for view {view}: {count} column(s) already present")]
    ColumnsAlreadyPresent { view: String, count: usize },

    /// A declared column list names the same column twice.
    #[error("column {column} declared more than once for view {view}")]
    DuplicateColumn { view: String, column: String },

    /// The view declared its column names and this one is not among them.
    #[error("column {column} is not among the declared columns of view {view}")]
    UndeclaredColumn { view: String, column: String },

    /// The view has no query to render.
    #[error("view {view} has no query")]
    QueryNotSet { view: String },

    // ── Configuration errors ─────────────────────────────────────────────
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Classification of an error for callers deciding how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgViewErrorKind {
    Invariant,
    Config,
}

impl fmt::Display for PgViewErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgViewErrorKind::Invariant => write!(f, "INVARIANT"),
            PgViewErrorKind::Config => write!(f, "CONFIG"),
        }
    }
}

impl PgViewError {
    /// Classify the error.
    pub fn kind(&self) -> PgViewErrorKind {
        match self {
            PgViewError::ColumnsAlreadyDeclared { .. }
            | PgViewError::ColumnsAlreadyPresent { .. }
            | PgViewError::DuplicateColumn { .. }
            | PgViewError::UndeclaredColumn { .. }
            | PgViewError::QueryNotSet { .. } => PgViewErrorKind::Invariant,

            PgViewError::InvalidConfig(_) => PgViewErrorKind::Config,
        }
    }

    /// Whether this error signals a defect in the calling code.
    pub fn is_invariant_violation(&self) -> bool {
        self.kind() == PgViewErrorKind::Invariant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(
            PgViewError::ColumnsAlreadyDeclared { view: "v".into() }.kind(),
            PgViewErrorKind::Invariant
        );
        assert_eq!(
            PgViewError::ColumnsAlreadyPresent {
                view: "v".into(),
                count: 2
            }
            .kind(),
            PgViewErrorKind::Invariant
        );
        assert_eq!(
            PgViewError::UndeclaredColumn {
                view: "v".into(),
                column: "c".into()
            }
            .kind(),
            PgViewErrorKind::Invariant
        );
        assert_eq!(
            PgViewError::DuplicateColumn {
                view: "v".into(),
                column: "c".into()
            }
            .kind(),
            PgViewErrorKind::Invariant
        );
        assert_eq!(
            PgViewError::QueryNotSet { view: "v".into() }.kind(),
            PgViewErrorKind::Invariant
        );
        assert_eq!(
            PgViewError::InvalidConfig("x".into()).kind(),
            PgViewErrorKind::Config
        );
    }

    #[test]
    fn test_is_invariant_violation() {
        assert!(PgViewError::QueryNotSet { view: "v".into() }.is_invariant_violation());
        assert!(!PgViewError::InvalidConfig("x".into()).is_invariant_violation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PgViewError::ColumnsAlreadyPresent {
                view: "v1".into(),
                count: 3
            }
            .to_string(),
            "cannot declare column names for view v1: 3 column(s) already present"
        );
        assert_eq!(
            PgViewError::UndeclaredColumn {
                view: "v1".into(),
                column: "x".into()
            }
            .to_string(),
            "column x is not among the declared columns of view v1"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PgViewErrorKind::Invariant.to_string(), "INVARIANT");
        assert_eq!(PgViewErrorKind::Config.to_string(), "CONFIG");
    }
}
