//! Integration tests for the public view / DDL API.
//!
//! These build views the way a schema scanner does (declare or infer
//! columns, then attach metadata) and check the exact rendered text.

use pg_view_ddl::{AlwaysQuote, DdlConfig, PgViewError, PgViewErrorKind, View, ddl};

fn view(name: &str, query: &str) -> View {
    let mut v = View::new(name);
    v.set_query(query);
    v
}

// ── Reference outputs ──────────────────────────────────────────────────────

#[test]
fn test_create_view_without_column_list() {
    let v = view("v1", "SELECT 1");
    assert_eq!(
        ddl::render_create(&v, &AlwaysQuote).unwrap(),
        "CREATE VIEW \"v1\" AS\n\tSELECT 1;"
    );
}

#[test]
fn test_create_view_with_declared_columns() {
    let mut v = view("v1", "SELECT 1,2");
    v.declare_column_names(Some(&["a", "b"][..])).unwrap();
    assert_eq!(
        ddl::render_create(&v, &AlwaysQuote).unwrap(),
        "CREATE VIEW \"v1\" (\"a\", \"b\") AS\n\tSELECT 1,2;"
    );
}

#[test]
fn test_drop_view() {
    assert_eq!(
        ddl::render_drop(&View::new("v1"), &AlwaysQuote),
        "DROP VIEW \"v1\";"
    );
}

// ── Scanner-style builds ───────────────────────────────────────────────────

#[test]
fn test_inferred_columns_full_script() {
    let mut v = view("order_totals", "SELECT o.id, sum(l.amount) AS total\n\tFROM orders o");
    v.set_column_comment("total", Some("'sum of lines'")).unwrap();
    v.set_column_default("id", Some("0")).unwrap();
    v.set_comment(Some("'per-order totals'"));

    let expected = "CREATE VIEW \"order_totals\" AS\n\tSELECT o.id, sum(l.amount) AS total\n\tFROM orders o;\n\n\
                    ALTER VIEW \"order_totals\" ALTER COLUMN \"id\" SET DEFAULT 0;\n\n\
                    COMMENT ON VIEW \"order_totals\" IS 'per-order totals';\n\n\
                    COMMENT ON COLUMN \"order_totals\".\"total\" IS 'sum of lines';";
    assert_eq!(ddl::render_create(&v, &AlwaysQuote).unwrap(), expected);

    // Columns were created in first-reference order but never declared.
    assert_eq!(v.columns().names(), vec!["total", "id"]);
    assert_eq!(v.declared_column_names(), None);
}

#[test]
fn test_metadata_can_be_replaced_repeatedly() {
    let mut v = view("v1", "SELECT 1 AS a");
    v.set_column_default("a", Some("1")).unwrap();
    v.set_column_default("a", Some("2")).unwrap();
    v.set_comment(Some("'old'"));
    v.set_comment(Some("'new'"));

    let sql = ddl::render_create(&v, &AlwaysQuote).unwrap();
    assert!(sql.contains("SET DEFAULT 2;"));
    assert!(!sql.contains("SET DEFAULT 1;"));
    assert!(sql.ends_with("COMMENT ON VIEW \"v1\" IS 'new';"));
}

#[test]
fn test_set_then_clear_default_keeps_order() {
    let mut v = view("v1", "SELECT 1, 2, 3");
    for (col, value) in [("a", "1"), ("b", "2"), ("c", "3")] {
        v.set_column_default(col, Some(value)).unwrap();
    }
    v.clear_column_default("b").unwrap();

    assert_eq!(v.columns().names(), vec!["a", "b", "c"]);
    assert_eq!(v.column("b").unwrap().default_value(), None);

    let sql = ddl::render_create(&v, &AlwaysQuote).unwrap();
    assert!(!sql.contains("\"b\" SET DEFAULT"));
    let a = sql.find("\"a\" SET DEFAULT").unwrap();
    let c = sql.find("\"c\" SET DEFAULT").unwrap();
    assert!(a < c);
}

// ── Invariant violations ───────────────────────────────────────────────────

#[test]
fn test_declare_twice_is_invariant_violation() {
    let mut v = view("v1", "SELECT 1");
    v.declare_column_names(Some(&["a"][..])).unwrap();
    let err = v.declare_column_names(Some(&["a"][..])).unwrap_err();
    assert_eq!(err.kind(), PgViewErrorKind::Invariant);
}

#[test]
fn test_declare_after_inferred_column_is_invariant_violation() {
    let mut v = view("v1", "SELECT 1");
    v.set_column_comment("a", Some("'x'")).unwrap();
    let err = v.declare_column_names(Some(&["a"][..])).unwrap_err();
    assert!(matches!(err, PgViewError::ColumnsAlreadyPresent { count: 1, .. }));
}

#[test]
fn test_repeated_declared_name_is_invariant_violation() {
    let mut v = view("v1", "SELECT 1,2");
    let err = v.declare_column_names(Some(&["a", "a"][..])).unwrap_err();
    assert!(matches!(err, PgViewError::DuplicateColumn { ref column, .. } if column == "a"));
    assert_eq!(v.declared_column_names(), None);
    assert_eq!(
        ddl::render_create(&v, &AlwaysQuote).unwrap(),
        "CREATE VIEW \"v1\" AS\n\tSELECT 1,2;"
    );
}

#[test]
fn test_undeclared_column_is_invariant_violation() {
    let mut v = view("v1", "SELECT 1");
    v.declare_column_names(Some(&["a"][..])).unwrap();
    let err = v.set_column_default("b", Some("1")).unwrap_err();
    assert!(err.is_invariant_violation());
    // The failed call left no trace in the rendered output.
    assert_eq!(
        ddl::render_create(&v, &AlwaysQuote).unwrap(),
        "CREATE VIEW \"v1\" (\"a\") AS\n\tSELECT 1;"
    );
}

// ── Configuration ──────────────────────────────────────────────────────────

#[test]
fn test_render_with_configured_quoter() {
    let config = DdlConfig::from_json(r#"{"quoting": "when_needed"}"#).unwrap();
    let quoter = config.quoter();

    let mut v = view("Report", "SELECT 1");
    v.declare_column_names(Some(&["id", "Group"][..])).unwrap();
    v.set_column_comment("id", Some("'identifier'")).unwrap();

    assert_eq!(
        ddl::render_create(&v, &*quoter).unwrap(),
        "CREATE VIEW \"Report\" (id, \"Group\") AS\n\tSELECT 1;\n\n\
         COMMENT ON COLUMN \"Report\".id IS 'identifier';"
    );
    assert_eq!(ddl::render_drop(&v, &*quoter), "DROP VIEW \"Report\";");
}

// ── Threading ──────────────────────────────────────────────────────────────

#[test]
fn test_distinct_views_render_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut v = view(&format!("v{i}"), "SELECT 1");
                v.set_column_default("a", Some("1")).unwrap();
                ddl::render_create(&v, &AlwaysQuote).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sql = handle.join().unwrap();
        assert!(sql.starts_with(&format!("CREATE VIEW \"v{i}\" AS")));
    }
}
