//! Tests for SQL Server identifier wrapping.

mod common;
use common::*;

use oxide_sql_core::dialect::{DbType, Dialect, GenericDialect, KeywordWrap, LimitOffset};
use oxide_sql_mssql::{KEYWORDS, SqlServerDialect, is_keyword};

#[test]
fn every_reserved_word_is_bracketed() {
    let d = dialect();
    for word in KEYWORDS {
        assert_eq!(d.wrap(word), bracketed(word), "wrapping {word}");
    }
}

#[test]
fn reserved_words_match_in_any_case() {
    let d = dialect();
    for word in KEYWORDS {
        let lower = word.to_lowercase();
        assert_eq!(d.wrap(&lower), bracketed(&lower));
    }
}

#[test]
fn asterisk_passes_through() {
    assert!(!is_keyword("*"));
    assert_eq!(dialect().wrap("*"), "*");

    let always = SqlServerDialect::with_keyword_wrap(
        SqlServerDialect::default_keyword_wrap().always_wrap(true),
        LimitOffset::SqlServer,
    );
    assert_eq!(always.wrap("*"), "*");
}

#[test]
fn plain_identifiers_are_untouched() {
    let d = dialect();
    for name in ["customer_id", "orders", "created_at", "Amount", "users"] {
        assert_eq!(d.wrap(name), name);
    }
}

#[test]
fn blank_identifiers_are_untouched() {
    let d = dialect();
    assert_eq!(d.wrap(""), "");
    assert_eq!(d.wrap("  "), "  ");
}

#[test]
fn multi_word_keyword() {
    let d = dialect();
    assert_eq!(d.wrap("WITHIN GROUP"), "[WITHIN GROUP]");
    assert_eq!(d.wrap("within"), "within");
}

#[test]
fn qualified_names() {
    let d = dialect();
    assert_eq!(d.wrap_qualified("dbo.user"), "dbo.[user]");
    assert_eq!(d.wrap_qualified("o.*"), "o.*");
    assert_eq!(d.wrap_qualified("sales.order.key"), "sales.[order].[key]");
    assert_eq!(d.wrap_qualified("[dbo].[order]"), "[dbo].[order]");
}

#[test]
fn repeated_queries_agree() {
    let d = dialect();
    let first: Vec<String> = KEYWORDS.iter().map(|w| d.wrap(w)).collect();
    let second: Vec<String> = KEYWORDS.iter().map(|w| d.wrap(w)).collect();
    assert_eq!(first, second);
    assert_eq!(dialect().wrap("GROUP"), d.wrap("GROUP"));
}

#[test]
fn custom_wrap_replaces_keywords() {
    let d = SqlServerDialect::with_keyword_wrap(
        KeywordWrap::square_brackets().with_keywords(["TENANT"]),
        LimitOffset::SqlServer,
    );
    assert_eq!(d.wrap("tenant"), "[tenant]");
    assert_eq!(d.wrap("select"), "select");
}

#[test]
fn dialect_is_shareable_across_threads() {
    let d = std::sync::Arc::new(dialect());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = std::sync::Arc::clone(&d);
            std::thread::spawn(move || d.wrap("order"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "[order]");
    }
}

#[test]
fn generic_sqlserver_brackets_everything() {
    let generic = GenericDialect::for_db_type(DbType::SqlServer);
    let keyword_aware = dialect();
    assert_eq!(generic.wrap("customer_id"), "[customer_id]");
    assert_eq!(keyword_aware.wrap("customer_id"), "customer_id");
    assert_eq!(generic.wrap("order"), keyword_aware.wrap("order"));
    assert_eq!(generic.wrap("*"), "*");
}

#[test]
fn qualified_names_with_dotted_parts() {
    let d = SqlServerDialect::with_keyword_wrap(
        SqlServerDialect::default_keyword_wrap().always_wrap(true),
        LimitOffset::SqlServer,
    );
    assert_eq!(d.wrap_qualified("dbo.[my.table]"), "[dbo].[my.table]");
    assert_eq!(dialect().wrap_qualified("[sales.eu].order"), "[sales.eu].[order]");
}
