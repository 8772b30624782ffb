//! SQL Server dialect implementation.

use std::sync::Arc;

use oxide_sql_core::dialect::{
    ASTERISK, DbType, Dialect, DialectConfig, KeywordWrap, LimitOffset, LimitOffsetProcessor,
};
use tracing::{debug, warn};

use crate::keywords::KEYWORDS;

/// SQL Server dialect.
///
/// Reserved words are wrapped in square brackets; other identifiers are left
/// alone. Pagination defaults to `OFFSET ... ROWS FETCH NEXT ... ROWS ONLY`.
#[derive(Debug, Clone)]
pub struct SqlServerDialect {
    keyword_wrap: KeywordWrap,
    limit_offset: Arc<dyn LimitOffsetProcessor>,
}

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit_offset(LimitOffset::SqlServer)
    }

    /// Creates a SQL Server dialect with a custom pagination strategy.
    #[must_use]
    pub fn with_limit_offset(limit_offset: impl LimitOffsetProcessor + 'static) -> Self {
        Self::with_keyword_wrap(Self::default_keyword_wrap(), limit_offset)
    }

    /// Creates a SQL Server dialect from an explicit keyword wrap and
    /// pagination strategy.
    #[must_use]
    pub fn with_keyword_wrap(
        keyword_wrap: KeywordWrap,
        limit_offset: impl LimitOffsetProcessor + 'static,
    ) -> Self {
        let limit_offset: Arc<dyn LimitOffsetProcessor> = Arc::new(limit_offset);
        debug!(
            dialect = "sqlserver",
            keywords = keyword_wrap.keywords().len(),
            always_wrap = keyword_wrap.is_always_wrap(),
            limit_offset = ?limit_offset,
            "initialized dialect"
        );
        Self {
            keyword_wrap,
            limit_offset,
        }
    }

    /// Creates a SQL Server dialect from registry configuration.
    ///
    /// Missing settings keep the defaults. A `sqlserver_2005` database type
    /// selects the `TOP`/`ROW_NUMBER()` pagination unless `limit_offset`
    /// says otherwise.
    #[must_use]
    pub fn from_config(config: &DialectConfig) -> Self {
        let default_limit_offset = match config.db_type {
            Some(db) if db.is_sqlserver() => db.default_limit_offset(),
            Some(db) => {
                warn!(db_type = %db, "SQL Server dialect configured with a foreign database type");
                DbType::SqlServer.default_limit_offset()
            }
            None => DbType::SqlServer.default_limit_offset(),
        };
        if config.limit_offset.is_some() || config.keyword_wrap.is_some() {
            debug!(dialect = "sqlserver", "dialect defaults overridden by configuration");
        }
        Self::with_keyword_wrap(
            config.resolve_keyword_wrap(Self::default_keyword_wrap()),
            config.resolve_limit_offset(default_limit_offset),
        )
    }

    /// The default wrap: square brackets around reserved words only.
    #[must_use]
    pub fn default_keyword_wrap() -> KeywordWrap {
        KeywordWrap::square_brackets()
            .with_keywords(KEYWORDS)
            .always_wrap(false)
            .keywords_to_upper_case(false)
    }
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn keyword_wrap(&self) -> &KeywordWrap {
        &self.keyword_wrap
    }

    fn limit_offset(&self) -> &dyn LimitOffsetProcessor {
        self.limit_offset.as_ref()
    }

    fn wrap(&self, keyword: &str) -> String {
        if keyword == ASTERISK {
            keyword.to_string()
        } else {
            self.keyword_wrap.wrap(keyword)
        }
    }

    fn supports_returning(&self) -> bool {
        false // OUTPUT clause instead
    }

    fn supports_upsert(&self) -> bool {
        false // MERGE instead
    }
}
