//! Bottom status bar: record counts, the last host message and key hints.

use crate::state::AppState;
use crate::view::list::truncate_to_width;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "j/k move  ⏎ open  ␣ select  a group  d delete  q quit";

/// Status bar text padded or truncated to exactly `width` columns.
///
/// Hints are right-aligned and dropped first when space runs out.
pub fn status_line(state: &AppState, width: usize) -> String {
    let mut left = format!(" {} transcripts", state.record_count());
    let selected = state.selected_count();
    if selected > 0 {
        left.push_str(&format!(" · {selected} selected"));
    }
    if let Some(status) = state.status() {
        left.push_str(" · ");
        left.push_str(status);
    }

    let left_width = left.width();
    let hints_width = KEY_HINTS.width() + 1;
    if left_width + 2 + hints_width <= width {
        let gap = width - left_width - hints_width;
        format!("{left}{}{KEY_HINTS} ", " ".repeat(gap))
    } else {
        let left = truncate_to_width(&left, width);
        let pad = width.saturating_sub(left.width());
        format!("{left}{}", " ".repeat(pad))
    }
}
