//! Generic SQL dialect.

use std::sync::Arc;

use tracing::debug;

use super::{DbType, Dialect, DialectConfig, KeywordWrap, LimitOffset, LimitOffsetProcessor};

/// A configurable dialect built from a keyword wrap and a pagination strategy.
///
/// [`GenericDialect::new`] follows ANSI SQL. [`GenericDialect::for_db_type`]
/// picks a product's delimiters and pagination.
#[derive(Debug, Clone)]
pub struct GenericDialect {
    name: &'static str,
    keyword_wrap: KeywordWrap,
    limit_offset: Arc<dyn LimitOffsetProcessor>,
}

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts("generic", KeywordWrap::double_quotation(), LimitOffset::Postgresql)
    }

    /// Creates a dialect from explicit parts.
    #[must_use]
    pub fn with_parts(
        name: &'static str,
        keyword_wrap: KeywordWrap,
        limit_offset: impl LimitOffsetProcessor + 'static,
    ) -> Self {
        let limit_offset: Arc<dyn LimitOffsetProcessor> = Arc::new(limit_offset);
        debug!(
            dialect = name,
            keywords = keyword_wrap.keywords().len(),
            limit_offset = ?limit_offset,
            "initialized dialect"
        );
        Self {
            name,
            keyword_wrap,
            limit_offset,
        }
    }

    /// Creates the default dialect of a database product.
    ///
    /// The product's delimiters come without a reserved word list, so every
    /// identifier is wrapped: `for_db_type(DbType::SqlServer)` renders `name`
    /// as `[name]`. For SQL Server with keyword-aware wrapping, where only
    /// reserved words are bracketed, use `oxide_sql_mssql::SqlServerDialect`.
    #[must_use]
    pub fn for_db_type(db_type: DbType) -> Self {
        Self::with_parts(
            db_type.name(),
            db_type.default_keyword_wrap(),
            db_type.default_limit_offset(),
        )
    }

    /// Creates a dialect from configuration.
    ///
    /// Without a `db_type` the ANSI defaults are used.
    #[must_use]
    pub fn from_config(config: &DialectConfig) -> Self {
        let (name, wrap, limit_offset) = match config.db_type {
            Some(db) => (db.name(), db.default_keyword_wrap(), db.default_limit_offset()),
            None => ("generic", KeywordWrap::double_quotation(), LimitOffset::Postgresql),
        };
        if config.limit_offset.is_some() || config.keyword_wrap.is_some() {
            debug!(dialect = name, "dialect defaults overridden by configuration");
        }
        Self::with_parts(
            name,
            config.resolve_keyword_wrap(wrap),
            config.resolve_limit_offset(limit_offset),
        )
    }
}

impl Default for GenericDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        self.name
    }

    fn keyword_wrap(&self) -> &KeywordWrap {
        &self.keyword_wrap
    }

    fn limit_offset(&self) -> &dyn LimitOffsetProcessor {
        self.limit_offset.as_ref()
    }

    fn supports_returning(&self) -> bool {
        matches!(self.name, "postgresql" | "sqlite")
    }

    fn supports_upsert(&self) -> bool {
        matches!(self.name, "postgresql" | "sqlite")
    }
}
