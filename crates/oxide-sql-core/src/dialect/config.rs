//! Dialect configuration.

use serde::{Deserialize, Serialize};

use super::db_type::DbType;
use super::keyword_wrap::{KeywordWrap, KeywordWrapConfig};
use super::limit_offset::LimitOffset;
use crate::error::Result;

/// Settings handed to a dialect constructor by the dialect registry.
///
/// Every field is optional; an empty configuration keeps the dialect's
/// defaults.
///
/// ```rust
/// use oxide_sql_core::dialect::{DbType, DialectConfig, LimitOffset};
///
/// let config = DialectConfig::from_json(
///     r#"{ "db_type": "mssql", "limit_offset": "sqlserver_2005" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.db_type, Some(DbType::SqlServer));
/// assert_eq!(config.limit_offset, Some(LimitOffset::SqlServer2005));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// The database product.
    pub db_type: Option<DbType>,
    /// Overrides the product's pagination strategy.
    pub limit_offset: Option<LimitOffset>,
    /// Overrides parts of the product's keyword wrap.
    pub keyword_wrap: Option<KeywordWrapConfig>,
}

impl DialectConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for a database product.
    #[must_use]
    pub fn for_db_type(db_type: DbType) -> Self {
        Self {
            db_type: Some(db_type),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the pagination strategy.
    #[must_use]
    pub const fn with_limit_offset(mut self, limit_offset: LimitOffset) -> Self {
        self.limit_offset = Some(limit_offset);
        self
    }

    /// Sets the keyword wrap overrides.
    #[must_use]
    pub fn with_keyword_wrap(mut self, keyword_wrap: KeywordWrapConfig) -> Self {
        self.keyword_wrap = Some(keyword_wrap);
        self
    }

    /// Resolves the pagination strategy, falling back to `default`.
    #[must_use]
    pub fn resolve_limit_offset(&self, default: LimitOffset) -> LimitOffset {
        self.limit_offset.unwrap_or(default)
    }

    /// Resolves the keyword wrap by applying the overrides to `base`.
    #[must_use]
    pub fn resolve_keyword_wrap(&self, base: KeywordWrap) -> KeywordWrap {
        match &self.keyword_wrap {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }
}
