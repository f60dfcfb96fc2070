use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Focus, Mode, View};

use super::helpers::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let spans = match &app.status_message {
                Some(msg) => vec![Span::styled(
                    format!(" {}", msg),
                    Style::default().fg(app.theme.green).bg(bg),
                )],
                None => Vec::new(),
            };
            let hint = match (app.focus, app.view) {
                (Focus::Components, _) => "jk move  Space done  Tab back  ? help",
                (Focus::Main, View::Tracker) => "jk move  Enter edit  R record  Tab sidebar  ? help",
                (Focus::Main, View::Reflection) => "jk move  Enter edit  S save  Tab sidebar  ? help",
            };
            (spans, hint)
        }
        Mode::Edit => {
            let label = match app.edit_target {
                Some(EditTarget::Draft(field)) => field.label(),
                Some(EditTarget::Reflection(field)) => field.prompt(),
                None => "",
            };
            let spans = vec![Span::styled(
                format!(" editing: {}", label),
                Style::default().fg(app.theme.text_bright).bg(bg),
            )];
            (spans, "Enter save  Esc cancel")
        }
    };

    if app.config.ui.show_key_hints || app.mode == Mode::Edit {
        let content_width = spans_width(&spans);
        let hint_width = hint.chars().count() + 1;
        if content_width + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
