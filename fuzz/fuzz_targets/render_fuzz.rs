//! Drives the view builder with arbitrary operation sequences.
//!
//! Each input line is one operation; the first byte picks the kind and the
//! rest is the argument. Invariant violations are expected and ignored; a
//! panic, or rendered output that disagrees with the view state, is a bug.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pg_view_ddl::{AlwaysQuote, QuoteWhenNeeded, View, ddl};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut view = View::new("fuzz_view");
    view.set_query("SELECT 1");

    for line in text.lines() {
        let mut chars = line.chars();
        let Some(op) = chars.next() else { continue };
        let arg = chars.as_str();
        let _ = match op {
            'd' => view.declare_column_names(Some(arg.split(',').collect::<Vec<_>>().as_slice())),
            's' => view.set_column_default(arg, Some("0")),
            'S' => view.clear_column_default(arg),
            'c' => view.set_column_comment(arg, Some("'c'")),
            'C' => view.clear_column_comment(arg),
            'v' => {
                view.set_comment(Some(arg));
                Ok(())
            }
            _ => Ok(()),
        };
    }

    let sql = ddl::render_create(&view, &AlwaysQuote).expect("query is set");
    assert_eq!(
        sql.starts_with("CREATE VIEW \"fuzz_view\" ("),
        view.has_declared_column_names()
    );
    let _ = ddl::render_create(&view, &QuoteWhenNeeded);
    let _ = ddl::render_drop(&view, &AlwaysQuote);
});
