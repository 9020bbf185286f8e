//! Transcript record type.
//!
//! A Transcript is one recorded dictation as stored by the recording database.
//! The list engine treats it as opaque apart from its id; hosts use the
//! remaining fields for display.

use crate::model::TranscriptId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// SQLite `datetime('now')` layout, used by older exports.
const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    id: TranscriptId,
    text: String,
    duration_ms: i32,
    #[serde(deserialize_with = "deserialize_created_at")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    metadata: Option<String>,
    #[serde(default)]
    audio_path: Option<String>,
    #[serde(default)]
    file_size: Option<i64>,
}

impl Transcript {
    /// Create a transcript without audio attachment or metadata.
    pub fn new(
        id: TranscriptId,
        text: impl Into<String>,
        duration_ms: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            duration_ms,
            created_at,
            metadata: None,
            audio_path: None,
            file_size: None,
        }
    }

    /// Attach the recorded audio file.
    pub fn with_audio(mut self, path: impl Into<String>, file_size: Option<i64>) -> Self {
        self.audio_path = Some(path.into());
        self.file_size = file_size;
        self
    }

    /// Attach the raw JSON metadata blob.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    // ===== Accessors (read-only) =====

    pub fn id(&self) -> TranscriptId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration_ms(&self) -> i32 {
        self.duration_ms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn audio_path(&self) -> Option<&str> {
        self.audio_path.as_deref()
    }

    pub fn file_size(&self) -> Option<i64> {
        self.file_size
    }
}

/// Format a recording duration as `"1m 5s"` / `"42s"`.
pub fn format_duration_ms(ms: i32) -> String {
    let seconds = ms.max(0) / 1000;
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, remaining_seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Accept RFC 3339 timestamps as well as the SQLite `YYYY-MM-DD HH:MM:SS` form (assumed UTC).
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, SQLITE_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid created_at {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_duration_under_a_minute_shows_seconds_only() {
        assert_eq!(format_duration_ms(0), "0s");
        assert_eq!(format_duration_ms(42_999), "42s");
    }

    #[test]
    fn format_duration_over_a_minute_shows_minutes_and_seconds() {
        assert_eq!(format_duration_ms(65_000), "1m 5s");
        assert_eq!(format_duration_ms(600_000), "10m 0s");
    }

    #[test]
    fn format_duration_clamps_negative_to_zero() {
        assert_eq!(format_duration_ms(-5), "0s");
    }

    #[test]
    fn deserializes_rfc3339_created_at() {
        let json = r#"{"id": 1, "text": "hello", "duration_ms": 1200,
                       "created_at": "2026-03-01T10:15:00Z"}"#;
        let t: Transcript = serde_json::from_str(json).expect("valid transcript");
        assert_eq!(t.id(), TranscriptId::new(1));
        assert_eq!(t.created_at(), Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap());
        assert_eq!(t.audio_path(), None);
    }

    #[test]
    fn deserializes_sqlite_created_at() {
        let json = r#"{"id": 2, "text": "x", "duration_ms": 10,
                       "created_at": "2026-03-01 10:15:00",
                       "audio_path": "/tmp/a.wav", "file_size": 2048}"#;
        let t: Transcript = serde_json::from_str(json).expect("valid transcript");
        assert_eq!(t.created_at(), Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap());
        assert_eq!(t.audio_path(), Some("/tmp/a.wav"));
        assert_eq!(t.file_size(), Some(2048));
    }

    #[test]
    fn rejects_garbage_created_at() {
        let json = r#"{"id": 3, "text": "x", "duration_ms": 10, "created_at": "yesterday"}"#;
        let err = serde_json::from_str::<Transcript>(json).unwrap_err();
        assert!(err.to_string().contains("invalid created_at"));
    }
}
