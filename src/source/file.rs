//! JSON transcript file loading.

use crate::model::error::InputError;
use crate::model::Transcript;
use std::path::Path;
use tracing::info;

/// Read a JSON array of transcripts.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::Read` for other I/O errors, and `InputError::InvalidJson` if the
/// contents are not an array of transcripts.
pub fn load_transcripts(path: impl AsRef<Path>) -> Result<Vec<Transcript>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let transcripts = parse_transcripts(&contents).map_err(|e| InputError::InvalidJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), count = transcripts.len(), "loaded transcripts");
    Ok(transcripts)
}

/// Decode a JSON array of transcripts from a string.
pub fn parse_transcripts(json: &str) -> Result<Vec<Transcript>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TranscriptId;
    use std::fs;

    const TWO_TRANSCRIPTS: &str = r#"[
        {"id": 1, "text": "Buy milk", "duration_ms": 4200, "created_at": "2026-10-14T09:30:00Z"},
        {"id": 2, "text": "Call back", "duration_ms": 65000, "created_at": "2026-10-13 18:05:00",
         "audio_path": "/rec/2.wav", "file_size": 1024}
    ]"#;

    #[test]
    fn parses_both_timestamp_formats() {
        let transcripts = parse_transcripts(TWO_TRANSCRIPTS).expect("valid json");
        assert_eq!(transcripts.len(), 2);
        assert_eq!(transcripts[0].id(), TranscriptId::new(1));
        assert_eq!(transcripts[1].audio_path(), Some("/rec/2.wav"));
        assert_eq!(transcripts[1].created_at().to_rfc3339(), "2026-10-13T18:05:00+00:00");
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join("tlv_load_transcripts.json");
        fs::write(&path, TWO_TRANSCRIPTS).expect("write fixture");

        let transcripts = load_transcripts(&path).expect("loads");
        assert_eq!(transcripts.len(), 2);

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let result = load_transcripts("/nonexistent/transcripts.json");
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn non_array_is_invalid_json() {
        let path = std::env::temp_dir().join("tlv_load_transcripts_invalid.json");
        fs::write(&path, r#"{"id": 1}"#).expect("write fixture");

        match load_transcripts(&path) {
            Err(InputError::InvalidJson { path: reported, reason }) => {
                assert_eq!(reported, path);
                assert!(!reason.is_empty());
            }
            other => panic!("Expected InvalidJson, got {:?}", other),
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_transcripts("[]").expect("valid").is_empty());
    }
}
