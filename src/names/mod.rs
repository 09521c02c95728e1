// Tue Jan 13 2026 - Alex

pub mod normalizer;
pub mod dedup;

pub use normalizer::{normalize, strip_brackets};
pub use dedup::{Deduplicator, DistinctNames};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multi-word separator understood by the taxonomy browser.
pub const QUERY_SEPARATOR: &str = "%20";

/// Word separator used in every resolved name.
pub const RESOLVED_SEPARATOR: char = '_';

/// Stand-in for a fallback that would otherwise come out empty.
pub const EMPTY_NAME_PLACEHOLDER: &str = "Unnamed";

/// An input token exactly as read, quotes and surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawName(String);

impl RawName {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_query(&self) -> QueryName {
        normalize(&self.0)
    }
}

impl fmt::Display for RawName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lookup key sent to the resolver. Words are joined with [`QUERY_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryName(String);

impl QueryName {
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(QUERY_SEPARATOR)
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical or fallback output name. Never empty, never contains `[` or `]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedName(String);

impl ResolvedName {
    /// Builds a resolved name from the text of an authority entry.
    /// Returns `None` when nothing usable is left after cleanup.
    pub fn from_canonical(text: &str) -> Option<Self> {
        let separator = RESOLVED_SEPARATOR.to_string();
        let joined = text.split_whitespace().collect::<Vec<_>>().join(separator.as_str());
        let cleaned = strip_brackets(&joined);

        if cleaned.chars().all(|c| c == RESOLVED_SEPARATOR) {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    /// Local transform used whenever the lookup produced nothing.
    pub fn fallback(query: &QueryName) -> Self {
        let separator = RESOLVED_SEPARATOR.to_string();
        let joined = query.segments().collect::<Vec<_>>().join(separator.as_str());
        let cleaned = strip_brackets(&joined);

        if cleaned.is_empty() {
            Self(EMPTY_NAME_PLACEHOLDER.to_string())
        } else {
            Self(cleaned)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_name_rejects_empty() {
        assert!(RawName::new("").is_none());
        assert_eq!(RawName::new("Homo sapiens").unwrap().as_str(), "Homo sapiens");
    }

    #[test]
    fn test_canonical_cleanup() {
        let name = ResolvedName::from_canonical("[Clostridium] difficile").unwrap();
        assert_eq!(name.as_str(), "Clostridium_difficile");

        let name = ResolvedName::from_canonical("  Escherichia   coli\n").unwrap();
        assert_eq!(name.as_str(), "Escherichia_coli");
    }

    #[test]
    fn test_canonical_blank_is_none() {
        assert!(ResolvedName::from_canonical("   ").is_none());
        assert!(ResolvedName::from_canonical("[ ]").is_none());
    }

    #[test]
    fn test_fallback_transform() {
        let query = normalize("Escherichia coli");
        assert_eq!(ResolvedName::fallback(&query).as_str(), "Escherichia_coli");

        let query = normalize("Bad[Name]");
        assert_eq!(ResolvedName::fallback(&query).as_str(), "BadName");
    }

    #[test]
    fn test_fallback_keeps_spaces_when_underscores_present() {
        let query = normalize("Salmonella enterica_subsp");
        assert_eq!(ResolvedName::fallback(&query).as_str(), "Salmonella enterica_subsp");
    }

    #[test]
    fn test_fallback_never_empty() {
        let query = normalize("[]");
        assert_eq!(ResolvedName::fallback(&query).as_str(), EMPTY_NAME_PLACEHOLDER);
    }
}
