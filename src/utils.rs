use unicode_width::UnicodeWidthStr;

/// Shorten to at most `max_len` characters, ellipsized. Counts chars,
/// not bytes, so multi-byte text never splits mid-character.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Lay `count` copies of an emoji out as rows that fit `max_width`
/// terminal columns. One space between items; at least one item per row
/// even in absurdly narrow areas.
pub fn emoji_rows(item: &str, count: usize, max_width: usize) -> Vec<String> {
    let item_width = display_width(item).max(1);
    let per_row = (max_width.saturating_add(1) / (item_width + 1)).max(1);
    let mut rows = Vec::new();
    let mut remaining = count;
    while remaining > 0 {
        let take = remaining.min(per_row);
        rows.push(vec![item; take].join(" "));
        remaining -= take;
    }
    rows
}

/// "⭐⭐☆" style rating out of three.
pub fn stars_row(stars: u8) -> String {
    (0..3)
        .map(|i| if i < stars { "⭐" } else { "☆" })
        .collect()
}
