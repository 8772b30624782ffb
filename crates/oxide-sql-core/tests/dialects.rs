//! Tests for product dialects built from the shared abstraction.

use oxide_sql_core::dialect::{
    DbType, Dialect, DialectConfig, GenericDialect, KeywordWrap, LimitOffset, Page,
};

const BASE: &str = "SELECT id FROM users";

fn page() -> Page<'static> {
    Page::new().order_by("id").limit(10).offset(20)
}

#[test]
fn product_defaults() {
    let cases = [
        (DbType::Mysql, "`name`", "SELECT id FROM users ORDER BY id LIMIT 20, 10"),
        (
            DbType::Postgresql,
            "\"name\"",
            "SELECT id FROM users ORDER BY id LIMIT 10 OFFSET 20",
        ),
        (
            DbType::Oracle,
            "\"name\"",
            "SELECT id FROM users ORDER BY id OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY",
        ),
        (
            DbType::SqlServer,
            "[name]",
            "SELECT id FROM users ORDER BY id OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY",
        ),
    ];
    for (db, wrapped, paginated) in cases {
        let dialect = GenericDialect::for_db_type(db);
        assert_eq!(dialect.name(), db.name());
        assert_eq!(dialect.wrap("name"), wrapped, "{db}");
        assert_eq!(dialect.paginate(BASE, &page()), paginated, "{db}");
    }
}

#[test]
fn wildcard_never_wrapped() {
    for db in [DbType::Mysql, DbType::Postgresql, DbType::SqlServer2005] {
        assert_eq!(GenericDialect::for_db_type(db).wrap("*"), "*");
    }
}

#[test]
fn keyword_only_wrapping() {
    let dialect = GenericDialect::with_parts(
        "reserved-only",
        KeywordWrap::double_quotation().with_keywords(["user", "order"]),
        LimitOffset::Postgresql,
    );
    assert!(dialect.is_keyword("USER"));
    assert_eq!(dialect.wrap("user"), "\"user\"");
    assert_eq!(dialect.wrap("account"), "account");
    assert_eq!(dialect.wrap_qualified("public.order"), "public.\"order\"");
}

#[test]
fn config_from_json() {
    let config = DialectConfig::from_json(
        r#"{ "db_type": "postgres", "keyword_wrap": { "keywords_to_upper_case": true } }"#,
    )
    .unwrap();
    let dialect = GenericDialect::from_config(&config);
    assert_eq!(dialect.name(), "postgresql");
    assert_eq!(dialect.wrap("name"), "\"NAME\"");
}

#[test]
fn config_serializes_back() {
    let config = DialectConfig::for_db_type(DbType::SqlServer2005)
        .with_limit_offset(LimitOffset::SqlServer);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"sqlserver_2005\""));
    assert_eq!(DialectConfig::from_json(&json).unwrap(), config);
}
