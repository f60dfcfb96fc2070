use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`, if any.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(byte_offset + g.len())
}

/// Byte offset of the grapheme before `byte_offset`, if any.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let prefix = s.get(..byte_offset)?;
    prefix.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Start of the word left of `byte_offset` (whitespace-delimited), for Ctrl+W.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let prefix = &s[..byte_offset.min(s.len())];
    let trimmed = prefix.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// Greedy word wrap to `width` cells. Words longer than a line are split
/// at grapheme boundaries. Always returns at least one line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let ww = display_width(word);
        if current_w > 0 && current_w + 1 + ww <= width {
            current.push(' ');
            current.push_str(word);
            current_w += 1 + ww;
            continue;
        }
        if current_w > 0 {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if ww <= width {
            current.push_str(word);
            current_w = ww;
            continue;
        }
        for g in word.graphemes(true) {
            let gw = display_width(g);
            if current_w + gw > width && current_w > 0 {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
            current.push_str(g);
            current_w += gw;
        }
    }
    if current_w > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
