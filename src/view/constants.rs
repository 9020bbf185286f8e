//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::ops::Range;

/// Height of the status bar in lines.
///
/// Single line for record counts, the last host message and key hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Columns of the `[ ]` checkbox within a list line.
///
/// Headers render as `▸ [ ] Title`, rows as `  [ ] 12:00`, so both kinds
/// share the same checkbox columns.
pub const CHECKBOX_COLUMNS: Range<u16> = 2..5;

/// Indent of a row's text lines, aligned under the time.
pub const ROW_TEXT_INDENT: usize = 6;
