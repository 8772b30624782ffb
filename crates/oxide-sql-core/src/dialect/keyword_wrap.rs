//! Keyword-aware identifier wrapping.
//!
//! Every dialect decides whether an identifier needs delimiters through a
//! [`KeywordWrap`]. It holds the dialect's reserved words and the pair of
//! delimiters to put around them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The wildcard column symbol. It is never wrapped.
pub const ASTERISK: &str = "*";

/// Decides whether (and how) an identifier is wrapped in delimiters.
///
/// By default only identifiers found in the keyword set are wrapped. The
/// lookup upper-cases the identifier first, while the output keeps the
/// caller's spelling unless [`KeywordWrap::keywords_to_upper_case`] is set.
///
/// A wrap with an empty keyword set wraps every identifier.
///
/// ```rust
/// use oxide_sql_core::dialect::KeywordWrap;
///
/// let wrap = KeywordWrap::square_brackets().with_keywords(["ORDER", "USER"]);
/// assert_eq!(wrap.wrap("order"), "[order]");
/// assert_eq!(wrap.wrap("amount"), "amount");
/// assert_eq!(wrap.wrap_qualified("dbo.user"), "dbo.[user]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordWrap {
    always_wrap: bool,
    keywords_to_upper_case: bool,
    keywords: HashSet<String>,
    prefix: String,
    suffix: String,
}

impl KeywordWrap {
    /// Creates a wrap with the given delimiters and no keywords.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            always_wrap: false,
            keywords_to_upper_case: false,
            keywords: HashSet::new(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// A wrap that never adds delimiters.
    #[must_use]
    pub fn none() -> Self {
        Self::new("", "")
    }

    /// MySQL-style back quotes.
    #[must_use]
    pub fn back_quote() -> Self {
        Self::new("`", "`")
    }

    /// ANSI double quotes.
    #[must_use]
    pub fn double_quotation() -> Self {
        Self::new("\"", "\"")
    }

    /// SQL Server square brackets.
    #[must_use]
    pub fn square_brackets() -> Self {
        Self::new("[", "]")
    }

    /// Adds reserved words. They are stored upper-cased.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|k| k.as_ref().to_uppercase()));
        self
    }

    /// Wraps every identifier, reserved or not.
    #[must_use]
    pub fn always_wrap(mut self, enabled: bool) -> Self {
        self.always_wrap = enabled;
        self
    }

    /// Upper-cases identifiers on output.
    #[must_use]
    pub fn keywords_to_upper_case(mut self, enabled: bool) -> Self {
        self.keywords_to_upper_case = enabled;
        self
    }

    /// Returns the opening delimiter.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the closing delimiter.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the reserved word set (upper-cased).
    #[must_use]
    pub const fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    /// Returns whether every identifier is wrapped.
    #[must_use]
    pub const fn is_always_wrap(&self) -> bool {
        self.always_wrap
    }

    /// Returns whether identifiers are upper-cased on output.
    #[must_use]
    pub const fn is_keywords_to_upper_case(&self) -> bool {
        self.keywords_to_upper_case
    }

    /// Exact-match membership test against the stored (upper-case) words.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Wraps a single identifier if it needs it.
    #[must_use]
    pub fn wrap(&self, identifier: &str) -> String {
        let trimmed = identifier.trim();
        if trimmed.is_empty() || trimmed == ASTERISK {
            return identifier.to_string();
        }

        let upper = identifier.to_uppercase();
        let needs_wrap =
            self.always_wrap || self.keywords.is_empty() || self.keywords.contains(&upper);
        let output = if self.keywords_to_upper_case {
            upper.as_str()
        } else {
            identifier
        };

        if needs_wrap {
            format!("{}{output}{}", self.prefix, self.suffix)
        } else {
            output.to_string()
        }
    }

    /// Wraps each part of a dotted name (`schema.table`, `alias.column`).
    ///
    /// Dots inside an already delimited part do not split it, and such parts
    /// are kept as they are.
    #[must_use]
    pub fn wrap_qualified(&self, name: &str) -> String {
        self.split_qualified(name)
            .into_iter()
            .map(|part| {
                if self.is_wrapped(part) {
                    part.to_string()
                } else {
                    self.wrap(part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Splits on `.` outside of `prefix`..`suffix` pairs. A doubled suffix
    /// inside a pair is an escaped delimiter.
    fn split_qualified<'a>(&self, name: &'a str) -> Vec<&'a str> {
        let prefix = self.prefix.as_str();
        let suffix = self.suffix.as_str();
        let mut parts = Vec::new();
        let mut start = 0;
        let mut quoted = false;
        let mut i = 0;

        while i < name.len() {
            let rest = &name[i..];
            if quoted {
                if !suffix.is_empty() && rest.starts_with(suffix) {
                    if rest[suffix.len()..].starts_with(suffix) {
                        i += suffix.len() * 2;
                    } else {
                        quoted = false;
                        i += suffix.len();
                    }
                    continue;
                }
            } else if !prefix.is_empty() && rest.starts_with(prefix) {
                quoted = true;
                i += prefix.len();
                continue;
            } else if rest.starts_with('.') {
                parts.push(&name[start..i]);
                start = i + 1;
                i += 1;
                continue;
            }
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
        parts.push(&name[start..]);
        parts
    }

    fn is_wrapped(&self, part: &str) -> bool {
        !self.prefix.is_empty()
            && part.len() >= self.prefix.len() + self.suffix.len()
            && part.starts_with(&self.prefix)
            && part.ends_with(&self.suffix)
    }
}

impl Default for KeywordWrap {
    fn default() -> Self {
        Self::double_quotation()
    }
}

/// User-supplied overrides for a dialect's default [`KeywordWrap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordWrapConfig {
    /// Wrap every identifier, reserved or not.
    pub always_wrap: Option<bool>,
    /// Upper-case identifiers on output.
    pub keywords_to_upper_case: Option<bool>,
    /// Replaces the opening delimiter.
    pub prefix: Option<String>,
    /// Replaces the closing delimiter.
    pub suffix: Option<String>,
    /// Additional words treated as reserved.
    pub extra_keywords: Vec<String>,
}

impl KeywordWrapConfig {
    /// Applies these overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, base: KeywordWrap) -> KeywordWrap {
        let mut wrap = base.with_keywords(&self.extra_keywords);

        if let Some(always) = self.always_wrap {
            wrap = wrap.always_wrap(always);
        }
        if let Some(upper) = self.keywords_to_upper_case {
            wrap = wrap.keywords_to_upper_case(upper);
        }

        match (&self.prefix, &self.suffix) {
            (Some(prefix), Some(suffix)) => {
                wrap.prefix.clone_from(prefix);
                wrap.suffix.clone_from(suffix);
            }
            (Some(prefix), None) => {
                warn!(prefix = %prefix, suffix = %wrap.suffix, "keyword wrap prefix set without suffix");
                wrap.prefix.clone_from(prefix);
            }
            (None, Some(suffix)) => {
                warn!(prefix = %wrap.prefix, suffix = %suffix, "keyword wrap suffix set without prefix");
                wrap.suffix.clone_from(suffix);
            }
            (None, None) => {}
        }

        debug!(
            always_wrap = wrap.always_wrap,
            keywords_to_upper_case = wrap.keywords_to_upper_case,
            extra_keywords = self.extra_keywords.len(),
            "applied keyword wrap overrides"
        );
        wrap
    }
}
