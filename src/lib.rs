//! pg_view_ddl: PostgreSQL view model and DDL synthesis.
//!
//! This crate is the view slice of a schema comparison / migration tool.
//! A schema scanner builds [`View`] values (query, declared or inferred
//! columns, defaults, comments); at report time [`ddl`] turns them into the
//! exact `CREATE VIEW` / `DROP VIEW` text appended to a migration script.
//!
//! # Usage
//! ```
//! use pg_view_ddl::{AlwaysQuote, View, ddl};
//!
//! let mut view = View::new("active_users");
//! view.set_query("SELECT id, name FROM users WHERE active");
//! view.declare_column_names(Some(&["id", "name"][..]))?;
//! view.set_column_comment("name", Some("'display name'"))?;
//!
//! let sql = ddl::render_create(&view, &AlwaysQuote)?;
//! assert!(sql.starts_with("CREATE VIEW \"active_users\" (\"id\", \"name\") AS\n\t"));
//! assert_eq!(ddl::render_drop(&view, &AlwaysQuote), "DROP VIEW \"active_users\";");
//! # Ok::<(), pg_view_ddl::PgViewError>(())
//! ```
//!
//! Views carry no interior mutability; distinct views can be built and
//! rendered on separate threads.

pub mod column;
pub mod config;
pub mod ddl;
pub mod error;
pub mod quoting;
pub mod relation;
pub mod view;

pub use column::{Column, ColumnList};
pub use config::{DdlConfig, QuotingMode};
pub use error::{PgViewError, PgViewErrorKind};
pub use quoting::{AlwaysQuote, QuoteWhenNeeded, Quoter};
pub use relation::Relation;
pub use view::View;
