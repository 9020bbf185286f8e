//! Transcript list rendering.
//!
//! Turns the engine's materialized items into exactly one text line per
//! content line the item occupies, then places them at their viewport
//! offsets. Items scrolled partly off either edge are clipped line by line.

use crate::model::{format_duration_ms, Group, Transcript};
use crate::state::AppState;
use crate::view::constants::ROW_TEXT_INDENT;
use crate::view::styles::ListStyles;
use crate::view_state::{CheckState, FlatItemRef, ItemStyle};
use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Lines for the list viewport, top to bottom. Always `viewport.height` long.
pub fn list_lines(state: &mut AppState, styles: &ListStyles) -> Vec<Line<'static>> {
    let viewport = state.list().viewport();
    let height = viewport.height as usize;
    let width = viewport.width as usize;
    let focused = state.focused();
    let mut lines = vec![Line::default(); height];

    if state.list().is_empty() {
        if let Some(first) = lines.first_mut() {
            *first = Line::from(truncate_to_width("No transcripts", width));
        }
        return lines;
    }

    state.list_mut().render_visible(|index, item, style| {
        let line_style = styles.item_style(item.kind(), style.check, focused == Some(index));
        for (i, text) in item_lines(item, style, width).into_iter().enumerate() {
            let y = style.viewport_top + i as i64;
            if y >= 0 && (y as usize) < height {
                lines[y as usize] = Line::styled(text, line_style);
            }
        }
    });
    lines
}

/// Text of every line an item occupies: exactly `style.extent` entries.
pub fn item_lines(item: FlatItemRef<'_>, style: ItemStyle, width: usize) -> Vec<String> {
    let extent = style.extent.get() as usize;
    if extent == 0 {
        return Vec::new();
    }

    let mut lines = match item {
        FlatItemRef::Header(group) => {
            vec![truncate_to_width(&header_text(group, style.check, style.expanded), width)]
        }
        FlatItemRef::Row { record, .. } if extent == 1 => {
            let meta = row_meta(record, style.check);
            let snippet = record.text().split_whitespace().collect::<Vec<_>>().join(" ");
            vec![truncate_to_width(&format!("{meta}  {snippet}"), width)]
        }
        FlatItemRef::Row { record, .. } => {
            let indent = " ".repeat(ROW_TEXT_INDENT);
            let text_width = width.saturating_sub(ROW_TEXT_INDENT);
            let mut lines = vec![truncate_to_width(&row_meta(record, style.check), width)];
            lines.extend(
                wrap_to_width(record.text(), text_width, extent - 1)
                    .into_iter()
                    .map(|line| format!("{indent}{line}")),
            );
            lines
        }
    };
    lines.resize(extent, String::new());
    lines
}

/// `▾ [~] Today (5 items)`
pub fn header_text(group: &Group, check: CheckState, expanded: bool) -> String {
    let marker = if expanded { '▾' } else { '▸' };
    let count = match group.len() {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };
    format!("{marker} {} {} ({count})", checkbox(check), group.title())
}

/// `  [x] 09:30  1m 5s`; times are shown in UTC.
pub fn row_meta(record: &Transcript, check: CheckState) -> String {
    format!(
        "  {} {}  {}",
        checkbox(check),
        record.created_at().format("%H:%M"),
        format_duration_ms(record.duration_ms())
    )
}

pub fn checkbox(check: CheckState) -> &'static str {
    match check {
        CheckState::Unchecked => "[ ]",
        CheckState::Partial => "[~]",
        CheckState::Checked => "[x]",
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// Whitespace runs collapse to one space. Overflow is folded into the last
/// line, which is then truncated.
pub fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        let rest = lines.split_off(max_lines - 1).join(" ");
        lines.push(rest);
    }
    lines
        .into_iter()
        .map(|line| truncate_to_width(&line, width))
        .collect()
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
