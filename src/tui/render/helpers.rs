use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad a line's spans with `style` out to `width` cells
pub(super) fn pad_to_width(spans: &mut Vec<Span<'static>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Wrap `text` to `width` cells, each line prefixed by `indent` and styled with `style`
pub(super) fn wrapped_lines(
    text: &str,
    width: usize,
    indent: &'static str,
    style: Style,
    bg: Style,
) -> Vec<Line<'static>> {
    let avail = width.saturating_sub(indent.len()).max(1);
    unicode::wrap_words(text, avail)
        .into_iter()
        .map(|l| Line::from(vec![Span::styled(indent, bg), Span::styled(l, style)]))
        .collect()
}

/// Text of an edit buffer with a block cursor spliced in at `cursor`
pub(super) fn buffer_with_cursor(buffer: &str, cursor: usize) -> (String, String) {
    let cursor = cursor.min(buffer.len());
    (buffer[..cursor].to_string(), buffer[cursor..].to_string())
}
