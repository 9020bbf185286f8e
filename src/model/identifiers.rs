//! Core identifier newtypes with smart constructors.
//!
//! Group titles validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a transcript record, as assigned by the recording database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptId(i64);

impl TranscriptId {
    /// Wrap a raw database id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TranscriptId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TranscriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Title of a date group ("Today", "March 2026", ...).
///
/// Unique within a rendering pass; used as the key for expansion state.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupTitle(String);

impl GroupTitle {
    /// Smart constructor: validates non-empty title.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidGroupTitle> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidGroupTitle::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for GroupTitle {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GroupTitle {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGroupTitle {
    #[error("Group title cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_title_rejects_empty_string() {
        assert_eq!(GroupTitle::new(""), Err(InvalidGroupTitle::Empty));
    }

    #[test]
    fn group_title_rejects_whitespace_only() {
        assert_eq!(GroupTitle::new("   "), Err(InvalidGroupTitle::Empty));
    }

    #[test]
    fn group_title_preserves_raw_text() {
        let title = GroupTitle::new("Last Week").expect("valid title");
        assert_eq!(title.as_str(), "Last Week");
        assert_eq!(title.to_string(), "Last Week");
        assert_eq!(title, "Last Week");
    }

    #[test]
    fn transcript_id_display_is_hash_prefixed() {
        assert_eq!(TranscriptId::new(42).to_string(), "#42");
    }

    #[test]
    fn transcript_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&TranscriptId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TranscriptId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TranscriptId::new(7));
    }
}
