//! Grapheme-aware helpers for the single-line draft field and task rows.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells` cells, ending in `…` when anything was dropped
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary before `offset` (0 stays 0)
pub fn prev_boundary(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset of the grapheme boundary after `offset` (end stays end)
pub fn next_boundary(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    s[offset..]
        .graphemes(true)
        .next()
        .map_or(s.len(), |g| offset + g.len())
}

/// Start of the word ending at `offset`, skipping trailing whitespace first
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    let head = &s[..offset];
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// Display column of byte `offset` in `s`
pub fn offset_to_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset of the grapheme at display column `col`, snapping back to the
/// start of a wide grapheme. Past the end returns `s.len()`.
pub fn col_to_offset(s: &str, col: usize) -> usize {
    let mut used = 0;
    for (i, g) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > col {
            return i;
        }
        used += w;
    }
    s.len()
}

/// First visible column of a single-line field `width` cells wide so that
/// the cursor at byte `cursor` stays in view with some context around it.
/// `scroll` is the previous first column.
pub fn scroll_for_cursor(s: &str, cursor: usize, scroll: usize, width: usize) -> usize {
    let cursor_col = offset_to_col(s, cursor);
    let margin = 10.min(width / 3);
    let total = display_width(s);
    // The cursor glyph takes a column of its own at the end
    let content_end = if cursor_col >= total { total + 1 } else { total };

    let mut scroll = scroll;
    if cursor_col >= scroll + width.saturating_sub(margin) {
        scroll = cursor_col.saturating_sub(width.saturating_sub(margin + 1));
    }
    scroll = scroll.min(content_end.saturating_sub(width.saturating_sub(1)));
    if cursor_col < scroll + margin {
        scroll = cursor_col.saturating_sub(margin);
    }
    scroll
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cols_and_offsets() {
        let s = "a计b";
        assert_eq!(offset_to_col(s, 0), 0);
        assert_eq!(offset_to_col(s, 1), 1);
        assert_eq!(offset_to_col(s, 4), 3);
        assert_eq!(col_to_offset(s, 1), 1);
        // column 2 is the right half of 计
        assert_eq!(col_to_offset(s, 2), 1);
        assert_eq!(col_to_offset(s, 3), 4);
        assert_eq!(col_to_offset(s, 9), 5);
    }

    #[test]
    fn scroll_follows_cursor_to_the_end() {
        let s = format!("{}XYZ", "a".repeat(40));
        let scroll = scroll_for_cursor(&s, s.len(), 0, 23);
        assert_eq!(scroll, 22);
        // cursor column 43 lands inside the 23-cell window
        assert!(43 - scroll < 23);
    }

    #[test]
    fn scroll_returns_left_near_start() {
        let s = "a".repeat(40);
        assert_eq!(scroll_for_cursor(&s, 0, 22, 23), 0);
        assert_eq!(scroll_for_cursor(&s, 10, 22, 23), 3);
    }

    #[test]
    fn short_text_never_scrolls() {
        assert_eq!(scroll_for_cursor("gym", 3, 0, 23), 0);
        assert_eq!(scroll_for_cursor("", 0, 5, 23), 0);
    }

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("plan"), 4);
        assert_eq!(display_width("计划"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_leaves_short_text() {
        assert_eq!(truncate_to_width("gym", 10), "gym");
        assert_eq!(truncate_to_width("gym", 3), "gym");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("write report", 6), "write\u{2026}");
        assert_eq!(truncate_to_width("write report", 1), "\u{2026}");
        assert_eq!(truncate_to_width("write report", 0), "");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        // budget 4: "计划" fits, "任" would overflow
        assert_eq!(truncate_to_width("计划任务", 5), "计划\u{2026}");
    }

    #[test]
    fn boundaries_step_over_graphemes() {
        let s = "ae\u{301}z"; // a, e + combining acute, z
        assert_eq!(next_boundary(s, 0), 1);
        assert_eq!(next_boundary(s, 1), 4);
        assert_eq!(next_boundary(s, 4), 5);
        assert_eq!(next_boundary(s, 5), 5);
        assert_eq!(prev_boundary(s, 5), 4);
        assert_eq!(prev_boundary(s, 4), 1);
        assert_eq!(prev_boundary(s, 0), 0);
    }

    #[test]
    fn word_start_skips_trailing_space() {
        assert_eq!(word_start_before("call the bank", 13), 9);
        assert_eq!(word_start_before("call the ", 9), 5);
        assert_eq!(word_start_before("call", 4), 0);
        assert_eq!(word_start_before("", 0), 0);
    }
}
