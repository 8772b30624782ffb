//! # oxide-sql-core
//!
//! Shared SQL dialect abstraction for the oxide-sql toolkit.
//!
//! This crate provides:
//! - The [`Dialect`] trait implemented by every database-specific crate
//! - Keyword-aware identifier wrapping through [`KeywordWrap`]
//! - Pagination strategies behind [`LimitOffsetProcessor`]
//! - Serde-loadable [`DialectConfig`] used when a dialect is selected
//!
//! ## Identifier Wrapping
//!
//! Identifiers that clash with the SQL grammar have to be quoted. Each dialect
//! decides which ones and with which delimiters:
//!
//! ```rust
//! use oxide_sql_core::dialect::{DbType, Dialect, GenericDialect};
//!
//! let mysql = GenericDialect::for_db_type(DbType::Mysql);
//! assert_eq!(mysql.wrap("order"), "`order`");
//! assert_eq!(mysql.wrap("*"), "*");
//! ```
//!
//! ## Pagination
//!
//! ```rust
//! use oxide_sql_core::dialect::{Dialect, GenericDialect, Page};
//!
//! let dialect = GenericDialect::new();
//! let sql = dialect.paginate("SELECT id FROM users", &Page::new().limit(10).offset(20));
//! assert_eq!(sql, "SELECT id FROM users LIMIT 10 OFFSET 20");
//! ```

pub mod dialect;
pub mod error;

pub use dialect::{
    DbType, Dialect, DialectConfig, GenericDialect, KeywordWrap, KeywordWrapConfig, LimitOffset,
    LimitOffsetProcessor, Page,
};
pub use error::{DialectError, Result};
