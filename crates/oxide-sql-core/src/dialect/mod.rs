//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. This module provides
//! a trait for dialect-specific behavior: how identifiers are quoted and how
//! result sets are paginated.

mod config;
mod db_type;
mod generic;
mod keyword_wrap;
mod limit_offset;

pub use config::DialectConfig;
pub use db_type::DbType;
pub use generic::GenericDialect;
pub use keyword_wrap::{ASTERISK, KeywordWrap, KeywordWrapConfig};
pub use limit_offset::{LimitOffset, LimitOffsetProcessor, Page};

use std::fmt;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the keyword wrap used for identifiers.
    fn keyword_wrap(&self) -> &KeywordWrap;

    /// Returns the pagination strategy.
    fn limit_offset(&self) -> &dyn LimitOffsetProcessor;

    /// Wraps an identifier if the dialect requires it.
    fn wrap(&self, keyword: &str) -> String {
        self.keyword_wrap().wrap(keyword)
    }

    /// Wraps each part of a dotted name.
    fn wrap_qualified(&self, name: &str) -> String {
        self.keyword_wrap().wrap_qualified(name)
    }

    /// Returns whether `word` is one of the dialect's reserved words.
    ///
    /// The match is exact against the stored upper-case form.
    fn is_keyword(&self, word: &str) -> bool {
        self.keyword_wrap().is_keyword(word)
    }

    /// Returns the identifier delimiters (e.g., `"`/`"` for standard SQL, `[`/`]` for SQL Server).
    fn identifier_quotes(&self) -> (&str, &str) {
        let wrap = self.keyword_wrap();
        (wrap.prefix(), wrap.suffix())
    }

    /// Returns the string escape character.
    fn string_escape(&self) -> &'static str {
        "''"
    }

    /// Returns the parameter placeholder style.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns whether the dialect supports RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }

    /// Returns whether the dialect supports UPSERT (ON CONFLICT).
    fn supports_upsert(&self) -> bool {
        false
    }

    /// Returns whether the dialect supports LIMIT with OFFSET.
    fn supports_limit_offset(&self) -> bool {
        true
    }

    /// Quotes an identifier unconditionally.
    ///
    /// A closing delimiter inside the name is doubled.
    fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.identifier_quotes();
        if close.is_empty() {
            return format!("{open}{name}");
        }
        let escaped = name.replace(close, &close.repeat(2));
        format!("{open}{escaped}{close}")
    }

    /// Applies ordering and pagination to a base `SELECT`.
    fn paginate(&self, sql: &str, page: &Page<'_>) -> String {
        self.limit_offset().process(sql, page)
    }
}
