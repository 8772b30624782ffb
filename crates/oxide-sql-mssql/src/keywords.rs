//! SQL Server reserved words.
//!
//! The list follows the [reserved keywords] of Transact-SQL. Identifiers
//! matching one of them (after upper-casing) must be bracket-quoted.
//!
//! [reserved keywords]: https://learn.microsoft.com/en-us/sql/t-sql/language-elements/reserved-keywords-transact-sql

use std::collections::HashSet;
use std::sync::LazyLock;

/// Reserved words, upper-case.
pub const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BACKUP", "BEGIN", "BETWEEN", "BREAK",
    "BROWSE", "BULK", "BY", "CASCADE", "CASE", "CHECK", "CHECKPOINT", "CLOSE", "CLUSTERED",
    "COALESCE", "COLUMN", "COMMIT", "COMMITTED", "COMPUTE", "CONFIRM", "CONNECT",
    "CONSTRAINT", "CONTAINS", "CONTAINSTABLE", "CONTINUE", "CONVERT", "CREATE", "CROSS",
    "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURSOR", "DATABASE", "DBCC", "DEALLOCATE", "DECLARE", "DEFAULT", "DELETE", "DENY",
    "DESC", "DISTINCT", "DISTRIBUTED", "DOUBLE", "DROP", "DUMP", "ELSE", "END", "ERRLVL",
    "ESCAPE", "EXCEPT", "EXEC", "EXECUTE", "EXISTS", "EXIT", "EXTERNAL", "FETCH", "FILE",
    "FILLFACTOR", "FOR", "FOREIGN", "FREETEXT", "FREETEXTTABLE", "FROM", "FULL", "FUNCTION",
    "GOTO", "GRANT", "GROUP", "HAVING", "HOLDLOCK", "IDENTITY", "IDENTITY_INSERT",
    "IDENTITYCOL", "IF", "IN", "INDEX", "INNER", "INSERT", "INTERSECT", "INTO", "IS",
    "JOIN", "KEY", "KILL", "LEFT", "LIKE", "LINENO", "LOAD", "MAX", "MIN", "NATIONAL",
    "NOCHECK", "NONCLUSTERED", "NOT", "NULL", "NULLIF", "OF", "OFF", "OFFSETS", "ON",
    "OPEN", "OPENDATASOURCE", "OPENQUERY", "OPENROWSET", "OPTION", "OR", "ORDER", "OUTER",
    "OVER", "PERCENT", "PIPE", "PLAN", "PRECISION", "PREPARE", "PRIMARY", "PRINT",
    "PRIVILEGES", "PROC", "PROCEDURE", "PUBLIC", "RAISERROR", "READ", "READTEXT",
    "RECONFIGURE", "REFERENCES", "REPEATABLE", "RESTORE", "RESTRICT", "RETURN", "REVOKE",
    "RIGHT", "ROLLBACK", "ROWCOUNT", "ROWGUIDCOL", "RULE", "SAVE", "SCHEMA",
    "SECURITYAUDIT", "SELECT", "SEMANTICKEYPHRASETABLE", "SEMANTICSIMILARITYDETAILSTABLE",
    "SEMANTICSIMILARITYTABLE", "SESSION_USER", "SET", "SETUSER", "SHUTDOWN", "SOME",
    "STATISTICS", "SYSTEM_USER", "TABLE", "TABLESAMPLE", "TEXTSIZE", "THEN", "TO", "TOP",
    "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE", "TSEQUAL", "UNION", "UNIQUE", "UNPIVOT",
    "UPDATE", "UPDATETEXT", "USE", "USER", "USING", "VALUES", "VARYING", "VIEW", "WAITFOR",
    "WHEN", "WHERE", "WHILE", "WITH", "WITHIN GROUP", "WRITETEXT", "XACT_ABORT", "XLOCK",
];

static KEYWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns the reserved word set.
#[must_use]
pub fn keyword_set() -> &'static HashSet<&'static str> {
    &KEYWORD_SET
}

/// Exact-match lookup against the upper-case table.
///
/// ```rust
/// use oxide_sql_mssql::keywords::is_keyword;
///
/// assert!(is_keyword("SELECT"));
/// assert!(!is_keyword("select"));
/// assert!(!is_keyword("customer_id"));
/// ```
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_upper_case_and_unique() {
        for word in KEYWORDS {
            assert_eq!(*word, word.to_uppercase(), "{word} is not upper-case");
        }
        assert_eq!(keyword_set().len(), KEYWORDS.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_keyword("TRANSACTION"));
        assert!(!is_keyword("Transaction"));
        assert!(is_keyword("WITHIN GROUP"));
        assert!(!is_keyword("WITHIN"));
        assert!(!is_keyword("*"));
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let first: Vec<bool> = KEYWORDS.iter().map(|w| is_keyword(w)).collect();
        let second: Vec<bool> = KEYWORDS.iter().map(|w| is_keyword(w)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|hit| *hit));
    }
}
