//! Transcript input sources.
//!
//! This module provides the record sets the viewer can display:
//! - File loading for a JSON array of transcripts
//! - Synthetic demo data
//! - Unified TranscriptSource enum for both

use crate::model::error::InputError;
use crate::model::Transcript;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod demo;
pub mod file;

pub use demo::demo_transcripts;
pub use file::{load_transcripts, parse_transcripts};

/// Number of demo transcripts used when no file is given.
pub const DEFAULT_DEMO_COUNT: usize = 500;

/// Where the transcripts come from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    /// JSON file, read once at startup.
    File(PathBuf),
    /// Generated records.
    Demo { count: usize },
}

impl TranscriptSource {
    /// Load every record. The whole set stays resident; only rendering is windowed.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if a file source cannot be read or decoded.
    pub fn load(&self, now: DateTime<Utc>) -> Result<Vec<Transcript>, InputError> {
        match self {
            Self::File(path) => load_transcripts(path),
            Self::Demo { count } => Ok(demo_transcripts(*count, now)),
        }
    }
}

/// Choose a source from CLI arguments.
///
/// # Logic:
/// 1. If a file path is provided: read that file
/// 2. Else: demo data (`demo` count or [`DEFAULT_DEMO_COUNT`])
pub fn detect_source(file: Option<PathBuf>, demo: Option<usize>) -> TranscriptSource {
    match file {
        Some(path) => TranscriptSource::File(path),
        None => TranscriptSource::Demo {
            count: demo.unwrap_or(DEFAULT_DEMO_COUNT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_argument_wins_over_demo() {
        let source = detect_source(Some(PathBuf::from("t.json")), Some(5));
        assert_eq!(source, TranscriptSource::File(PathBuf::from("t.json")));
    }

    #[test]
    fn no_file_means_demo_data() {
        assert_eq!(
            detect_source(None, None),
            TranscriptSource::Demo {
                count: DEFAULT_DEMO_COUNT
            }
        );
        assert_eq!(detect_source(None, Some(7)), TranscriptSource::Demo { count: 7 });
    }

    #[test]
    fn demo_source_loads_generated_records() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        let records = TranscriptSource::Demo { count: 12 }.load(now).expect("demo never fails");
        assert_eq!(records.len(), 12);
    }

    #[test]
    fn missing_file_source_fails() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        let source = TranscriptSource::File(PathBuf::from("/nonexistent/tlv.json"));
        assert!(matches!(source.load(now), Err(InputError::FileNotFound { .. })));
    }
}
