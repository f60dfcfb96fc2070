use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

use super::helpers::spans_width;

const PAGE_TITLE: &str = "Mind Wandering";
const PAGE_BADGE: &str = "Week 2 \u{2022} Online \u{2022} 1.5 hours";

/// Render the tab bar: title, view tabs, page badge, and a separator line
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {} ", PAGE_TITLE),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, view) in View::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, view.title());
        let style = if *view == app.view {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg)));
        spans.push(Span::styled(label, style));
    }

    let used = spans_width(&spans);
    let badge_width = PAGE_BADGE.chars().count() + 1;
    if used + badge_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - badge_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            format!("{} ", PAGE_BADGE),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.selection_bg).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
