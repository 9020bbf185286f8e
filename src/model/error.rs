//! Error types for the tlv application.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Transcript file reading/decoding failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! The list engine itself has no runtime error paths: stale or missing slots render as
//! nothing, and out-of-range index queries are programmer errors that panic. Everything in
//! this module originates in the impure shell (files, terminal, global subscriber) and is
//! fatal at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`
/// implementations, enabling clean error propagation with the `?` operator.
///
/// # Examples
///
/// ```no_run
/// use tlv::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_transcripts()?;
///     Ok(())
/// }
/// # fn read_transcripts() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load transcripts from the input file.
    ///
    /// **Recovery**: Display error to user and exit with non-zero status.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be read or parsed.
    ///
    /// Missing config files are not errors and never reach this variant.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer (raw mode, resize, broken pipe).
    ///
    /// **Recovery**: Attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the transcript file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified transcript file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tlv::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// The file exists but could not be read (permissions, disk errors).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of transcripts.
    ///
    /// `reason` carries the `serde_json` message, which includes line and column.
    #[error("Invalid transcript JSON in {path}: {reason}")]
    InvalidJson {
        /// Path with invalid contents.
        path: PathBuf,
        /// Decoder error details.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        fn load() -> Result<(), InputError> {
            Err(InputError::FileNotFound {
                path: PathBuf::from("/nope.json"),
            })
        }
        fn run() -> Result<(), AppError> {
            load()?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::FileNotFound { .. })));
        assert!(err.to_string().contains("/nope.json"));
    }

    #[test]
    fn invalid_json_message_names_path_and_reason() {
        let err = InputError::InvalidJson {
            path: PathBuf::from("t.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("t.json"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn io_error_converts_into_terminal_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
