//! Terminal column formatting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad `s` with spaces to `width` display columns.
pub fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Widest entry in display columns.
pub fn column_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// First line of `s`, cut to `max` display columns with a trailing `…`.
pub fn preview(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or("");
    let more_lines = s.lines().nth(1).is_some();
    if UnicodeWidthStr::width(line) <= max && !more_lines {
        return line.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
