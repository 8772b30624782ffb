//! # oxide-sql-mssql
//!
//! Microsoft SQL Server dialect for `oxide-sql-core`.
//!
//! # How SQL Server differs from other dialects
//!
//! - **Identifier quoting**: SQL Server delimits identifiers with square
//!   brackets (`[order]`). Double quotes only work with
//!   `QUOTED_IDENTIFIER ON`. Only [reserved keywords] need quoting, so
//!   [`SqlServerDialect`] brackets those and leaves other names alone.
//! - **Pagination**: there is no `LIMIT`. SQL Server 2012 and later use
//!   [`OFFSET ... FETCH`], which is only valid after an `ORDER BY`.
//!   SQL Server 2005 and 2008 need `TOP` or a `ROW_NUMBER()` window.
//! - **RETURNING**: not supported. SQL Server uses the [`OUTPUT`] clause.
//! - **UPSERT**: no `ON CONFLICT`. SQL Server uses [`MERGE`].
//!
//! [reserved keywords]: https://learn.microsoft.com/en-us/sql/t-sql/language-elements/reserved-keywords-transact-sql
//! [`OFFSET ... FETCH`]: https://learn.microsoft.com/en-us/sql/t-sql/queries/select-order-by-clause-transact-sql
//! [`OUTPUT`]: https://learn.microsoft.com/en-us/sql/t-sql/queries/output-clause-transact-sql
//! [`MERGE`]: https://learn.microsoft.com/en-us/sql/t-sql/statements/merge-transact-sql
//!
//! ## Example
//!
//! ```rust
//! use oxide_sql_core::dialect::{Dialect, Page};
//! use oxide_sql_mssql::SqlServerDialect;
//!
//! let dialect = SqlServerDialect::new();
//!
//! assert_eq!(dialect.wrap("user"), "[user]");
//! assert_eq!(dialect.wrap("customer_id"), "customer_id");
//! assert_eq!(dialect.wrap("*"), "*");
//!
//! let sql = dialect.paginate(
//!     "SELECT id, name FROM customers",
//!     &Page::new().order_by("id").limit(10).offset(20),
//! );
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM customers ORDER BY id OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
//! );
//! ```

mod dialect;
pub mod keywords;

pub use dialect::SqlServerDialect;
pub use keywords::{KEYWORDS, is_keyword};
