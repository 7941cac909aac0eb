use unicode_width::UnicodeWidthStr;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Terminal columns taken by the first `cursor_position` chars of `text`.
pub fn cursor_display_column(text: &str, cursor_position: usize) -> usize {
    let end = text
        .char_indices()
        .nth(cursor_position)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text[..end].width()
}

/// Left offset that centres `text` inside `area_width` columns.
pub fn centered_offset(text: &str, area_width: usize) -> usize {
    area_width.saturating_sub(text.width()) / 2
}
