//! Tests for building the SQL Server dialect from configuration.

use oxide_sql_core::dialect::{Dialect, DialectConfig, Page};
use oxide_sql_core::error::DialectError;
use oxide_sql_mssql::SqlServerDialect;

#[test]
fn json_overrides() {
    let config = DialectConfig::from_json(
        r#"{
            "db_type": "mssql",
            "limit_offset": "sqlserver_2005",
            "keyword_wrap": { "always_wrap": true }
        }"#,
    )
    .unwrap();
    let d = SqlServerDialect::from_config(&config);
    assert_eq!(d.wrap("customer_id"), "[customer_id]");
    assert_eq!(d.wrap("*"), "*");
    assert_eq!(
        d.paginate("SELECT * FROM t", &Page::new().limit(3)),
        "SELECT TOP 3 * FROM t"
    );
}

#[test]
fn json_extra_keywords() {
    let config =
        DialectConfig::from_json(r#"{ "keyword_wrap": { "extra_keywords": ["tenant"] } }"#)
            .unwrap();
    let d = SqlServerDialect::from_config(&config);
    assert!(d.is_keyword("TENANT"));
    assert_eq!(d.wrap("tenant"), "[tenant]");
    assert_eq!(d.wrap("user"), "[user]");
}

#[test]
fn foreign_db_type_keeps_sqlserver_rules() {
    let config = DialectConfig::from_json(r#"{ "db_type": "mysql" }"#).unwrap();
    let d = SqlServerDialect::from_config(&config);
    assert_eq!(d.wrap("order"), "[order]");
    assert_eq!(
        d.paginate("SELECT * FROM t", &Page::new().limit(1)),
        "SELECT * FROM t ORDER BY CURRENT_TIMESTAMP OFFSET 0 ROWS FETCH NEXT 1 ROWS ONLY"
    );
}

#[test]
fn malformed_json() {
    let err = DialectConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DialectError::Config(_)));
}
