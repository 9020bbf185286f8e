//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod group;
pub mod grouping;
pub mod identifiers;
pub mod key_action;
pub mod transcript;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use group::Group;
pub use grouping::group_by_date;
pub use identifiers::{GroupTitle, InvalidGroupTitle, TranscriptId};
pub use key_action::KeyAction;
pub use transcript::{format_duration_ms, Transcript};
