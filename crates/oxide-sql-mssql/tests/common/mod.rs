#![allow(dead_code)]

use oxide_sql_core::dialect::{Dialect, LimitOffset, Page};
use oxide_sql_mssql::SqlServerDialect;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn dialect() -> SqlServerDialect {
    init_tracing();
    SqlServerDialect::new()
}

pub fn bracketed(word: &str) -> String {
    format!("[{word}]")
}

pub fn paginate(strategy: LimitOffset, sql: &str, page: &Page<'_>) -> String {
    SqlServerDialect::with_limit_offset(strategy).paginate(sql, page)
}
