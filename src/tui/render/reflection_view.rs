use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Focus, Mode, REFLECTION_ROWS, ReflectionRow};

use super::helpers::{buffer_with_cursor, pad_to_width, wrapped_lines};

/// Render the weekly reflection questionnaire
pub fn render_reflection_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let focused = app.focus == Focus::Main;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " \u{1F914} Weekly Reflection",
            Style::default()
                .fg(app.theme.blue)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, row) in REFLECTION_ROWS.iter().enumerate() {
        let selected = focused && i == app.reflection_cursor;
        match *row {
            ReflectionRow::Field(field) => {
                let row_bg = if selected { app.theme.selection_bg } else { bg };
                let prompt_style = if selected {
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                };
                let mut prompt = vec![Span::styled(format!("  {}", field.prompt()), prompt_style)];
                pad_to_width(&mut prompt, width, Style::default().bg(row_bg));
                lines.push(Line::from(prompt));

                let editing = app.mode == Mode::Edit
                    && app.edit_target == Some(EditTarget::Reflection(field));
                let value_style = Style::default().fg(app.theme.text).bg(bg);
                if editing {
                    let (before, after) = buffer_with_cursor(&app.edit_buffer, app.edit_cursor);
                    lines.push(Line::from(vec![
                        Span::styled("    ", Style::default().bg(bg)),
                        Span::styled(before, value_style),
                        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                        Span::styled(after, value_style),
                    ]));
                } else {
                    let answer = app.page.reflection.answers().get(field);
                    let (text, style) = if answer.is_empty() {
                        (field.placeholder(), Style::default().fg(app.theme.dim).bg(bg))
                    } else {
                        (answer, value_style)
                    };
                    lines.extend(wrapped_lines(
                        text,
                        width,
                        "    ",
                        style,
                        Style::default().bg(bg),
                    ));
                }
                lines.push(Line::from(""));
            }
            ReflectionRow::Save => {
                let style = if selected {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(app.theme.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.highlight).bg(bg)
                };
                lines.push(Line::from(vec![
                    Span::styled("  ", Style::default().bg(bg)),
                    Span::styled("[ \u{1F4BE} Save Reflection ]", style),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
