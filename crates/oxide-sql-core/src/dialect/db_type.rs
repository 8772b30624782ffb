//! Database product identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keyword_wrap::KeywordWrap;
use super::limit_offset::LimitOffset;
use crate::error::DialectError;

/// A database product with its own dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DbType {
    /// MySQL and MariaDB.
    #[serde(rename = "mysql")]
    Mysql,
    /// PostgreSQL.
    #[serde(rename = "postgresql", alias = "postgres")]
    Postgresql,
    /// SQLite.
    #[serde(rename = "sqlite")]
    Sqlite,
    /// Oracle 12c and later.
    #[serde(rename = "oracle")]
    Oracle,
    /// Microsoft SQL Server 2012 and later.
    #[serde(rename = "sqlserver", alias = "mssql")]
    SqlServer,
    /// Microsoft SQL Server 2005 and 2008.
    #[serde(rename = "sqlserver_2005")]
    SqlServer2005,
}

impl DbType {
    /// Returns the canonical product name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Oracle => "oracle",
            Self::SqlServer => "sqlserver",
            Self::SqlServer2005 => "sqlserver_2005",
        }
    }

    /// Returns the product's default pagination strategy.
    #[must_use]
    pub const fn default_limit_offset(self) -> LimitOffset {
        match self {
            Self::Mysql => LimitOffset::Mysql,
            Self::Postgresql | Self::Sqlite => LimitOffset::Postgresql,
            Self::Oracle => LimitOffset::Oracle,
            Self::SqlServer => LimitOffset::SqlServer,
            Self::SqlServer2005 => LimitOffset::SqlServer2005,
        }
    }

    /// Returns the product's identifier delimiters with an empty keyword set,
    /// so every identifier gets wrapped.
    ///
    /// Product crates narrow this down; `oxide-sql-mssql` adds the SQL Server
    /// reserved words so that only those are bracketed.
    #[must_use]
    pub fn default_keyword_wrap(self) -> KeywordWrap {
        match self {
            Self::Mysql => KeywordWrap::back_quote(),
            Self::Postgresql | Self::Sqlite | Self::Oracle => KeywordWrap::double_quotation(),
            Self::SqlServer | Self::SqlServer2005 => KeywordWrap::square_brackets(),
        }
    }

    /// Returns whether this is a SQL Server version.
    #[must_use]
    pub const fn is_sqlserver(self) -> bool {
        matches!(self, Self::SqlServer | Self::SqlServer2005)
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DbType {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            "sqlite" => Ok(Self::Sqlite),
            "oracle" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "sqlserver_2005" => Ok(Self::SqlServer2005),
            _ => Err(DialectError::UnknownDbType(s.to_string())),
        }
    }
}
