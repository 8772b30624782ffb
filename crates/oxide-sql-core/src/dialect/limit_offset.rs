//! Pagination strategies.
//!
//! Databases disagree on how to express "rows 21 to 30". A
//! [`LimitOffsetProcessor`] takes a base `SELECT` (without `ORDER BY`) and a
//! [`Page`], and renders the final statement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::DialectError;

/// A pagination request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page<'a> {
    /// Ordering expression, without the `ORDER BY` keywords.
    pub order_by: Option<&'a str>,
    /// Maximum number of rows.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
}

impl<'a> Page<'a> {
    /// Creates an empty page (no ordering, no limit, no offset).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Sets the ordering expression.
    #[must_use]
    pub const fn order_by(mut self, order_by: &'a str) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Sets the maximum number of rows.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of rows to skip.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}

/// Renders a paginated statement.
pub trait LimitOffsetProcessor: fmt::Debug + Send + Sync {
    /// Appends ordering and pagination to `sql`.
    fn process(&self, sql: &str, page: &Page<'_>) -> String;
}

/// Built-in pagination strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitOffset {
    /// `LIMIT offset, rows`
    Mysql,
    /// `LIMIT rows OFFSET offset`
    Postgresql,
    /// `OFFSET offset ROWS FETCH NEXT rows ROWS ONLY` (Oracle 12c, Derby).
    Oracle,
    /// SQL Server 2012 and later. `OFFSET`/`FETCH` with a mandatory `ORDER BY`.
    #[serde(rename = "sqlserver", alias = "mssql")]
    SqlServer,
    /// SQL Server 2005 and 2008. `TOP` or a `ROW_NUMBER()` CTE.
    #[serde(rename = "sqlserver_2005")]
    SqlServer2005,
}

impl LimitOffset {
    /// Returns the strategy name as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Oracle => "oracle",
            Self::SqlServer => "sqlserver",
            Self::SqlServer2005 => "sqlserver_2005",
        }
    }
}

impl fmt::Display for LimitOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitOffset {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::Mysql),
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            "oracle" | "derby" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "sqlserver_2005" => Ok(Self::SqlServer2005),
            _ => Err(DialectError::UnknownLimitOffset(s.to_string())),
        }
    }
}

impl LimitOffsetProcessor for LimitOffset {
    fn process(&self, sql: &str, page: &Page<'_>) -> String {
        let rendered = match self {
            Self::Mysql => mysql(sql, page),
            Self::Postgresql => postgresql(sql, page),
            Self::Oracle => offset_fetch(sql, page, page.order_by),
            Self::SqlServer if page.limit == Some(0) => sqlserver_top_zero(sql, page),
            Self::SqlServer => {
                let has_window = page.limit.is_some() || page.offset.is_some();
                let order_by = match page.order_by {
                    None if has_window => Some("CURRENT_TIMESTAMP"),
                    other => other,
                };
                offset_fetch(sql, page, order_by)
            }
            Self::SqlServer2005 => sqlserver_2005(sql, page),
        };
        trace!(strategy = %self, sql = %rendered, "paginated statement");
        rendered
    }
}

fn push_order_by(sql: &mut String, order_by: Option<&str>) {
    if let Some(order) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }
}

fn mysql(sql: &str, page: &Page<'_>) -> String {
    let mut out = sql.to_string();
    push_order_by(&mut out, page.order_by);
    match (page.limit, page.offset) {
        (Some(rows), Some(offset)) if offset > 0 => {
            out.push_str(&format!(" LIMIT {offset}, {rows}"));
        }
        (Some(rows), _) => out.push_str(&format!(" LIMIT {rows}")),
        (None, _) => {}
    }
    out
}

fn postgresql(sql: &str, page: &Page<'_>) -> String {
    let mut out = sql.to_string();
    push_order_by(&mut out, page.order_by);
    if let Some(rows) = page.limit {
        out.push_str(&format!(" LIMIT {rows}"));
    }
    if let Some(offset) = page.offset {
        out.push_str(&format!(" OFFSET {offset}"));
    }
    out
}

fn offset_fetch(sql: &str, page: &Page<'_>, order_by: Option<&str>) -> String {
    let mut out = sql.to_string();
    push_order_by(&mut out, order_by);
    match (page.limit, page.offset) {
        (Some(rows), offset) => {
            let offset = offset.unwrap_or(0);
            out.push_str(&format!(
                " OFFSET {offset} ROWS FETCH NEXT {rows} ROWS ONLY"
            ));
        }
        (None, Some(offset)) => out.push_str(&format!(" OFFSET {offset} ROWS")),
        (None, None) => {}
    }
    out
}

/// Strips a leading `keyword` (any case) that is followed by whitespace.
fn strip_keyword<'a>(sql: &'a str, keyword: &str) -> Option<&'a str> {
    let head = sql.get(..keyword.len())?;
    let rest = &sql[keyword.len()..];
    if head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Splits a statement into its leading `SELECT [DISTINCT]` and the rest.
fn split_select(sql: &str) -> Option<(bool, &str)> {
    let after_select = strip_keyword(sql.trim_start(), "SELECT")?;
    match strip_keyword(after_select, "DISTINCT") {
        Some(rest) => Some((true, rest)),
        None => Some((false, after_select)),
    }
}

fn top(sql: &str, rows: u64, order_by: Option<&str>) -> String {
    let mut out = match split_select(sql) {
        Some((true, rest)) => format!("SELECT DISTINCT TOP {rows} {rest}"),
        Some((false, rest)) => format!("SELECT TOP {rows} {rest}"),
        None => {
            warn!(sql = %sql, "statement does not start with SELECT, paginating it as a derived table");
            format!("SELECT TOP {rows} * FROM ({sql}) AS temp_source")
        }
    };
    push_order_by(&mut out, order_by);
    out
}

// FETCH NEXT requires a positive row count.
fn sqlserver_top_zero(sql: &str, page: &Page<'_>) -> String {
    top(sql, 0, page.order_by)
}

fn sqlserver_2005(sql: &str, page: &Page<'_>) -> String {
    let Some(rows) = page.limit else {
        // Without a row count there is nothing TOP or ROW_NUMBER() can express.
        let mut out = sql.to_string();
        push_order_by(&mut out, page.order_by);
        return out;
    };
    let offset = page.offset.unwrap_or(0);

    if offset == 0 {
        return top(sql, rows, page.order_by);
    }

    let order = page.order_by.unwrap_or("CURRENT_TIMESTAMP");
    let numbered = match split_select(sql) {
        Some((false, rest)) => {
            format!("SELECT ROW_NUMBER() OVER (ORDER BY {order}) AS __rn, {rest}")
        }
        Some((true, _)) => derived_row_number(sql, order),
        None => {
            warn!(sql = %sql, "statement does not start with SELECT, paginating it as a derived table");
            derived_row_number(sql, order)
        }
    };
    row_window(&numbered, offset, rows)
}

fn derived_row_number(sql: &str, order: &str) -> String {
    format!("SELECT ROW_NUMBER() OVER (ORDER BY {order}) AS __rn, * FROM ({sql}) AS temp_source")
}

fn row_window(numbered: &str, offset: u64, rows: u64) -> String {
    format!(
        "WITH temp_datas AS({numbered}) SELECT * FROM temp_datas WHERE __rn BETWEEN {} AND {} ORDER BY __rn",
        offset.saturating_add(1),
        offset.saturating_add(rows)
    )
}
