use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::episode::{DraftField, Episode};
use crate::model::trigger::COMMON_TRIGGERS;
use crate::tui::app::{App, EditTarget, Focus, Mode, TRACKER_ROWS, TrackerRow};
use crate::util::unicode;

use super::helpers::{buffer_with_cursor, pad_to_width, spans_width, wrapped_lines};

const LABEL_WIDTH: usize = 25;

/// Render the episode form followed by the recorded episodes
pub fn render_tracker_view(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let mut lines = form_lines(app, width);

    let episodes = app.page.episodes.episodes();
    if !episodes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" Recent Episodes ({})", episodes.len()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )));
        let skip = app.episode_scroll.min(episodes.len() - 1);
        let list: Vec<Line> = episodes
            .iter()
            .skip(skip)
            .flat_map(|ep| episode_lines(app, ep, width))
            .collect();
        lines.extend(list);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn form_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Main;
    let mut lines = vec![Line::from(Span::styled(
        " \u{1F9E0} Record New Episode",
        Style::default()
            .fg(app.theme.blue)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ))];

    for (i, row) in TRACKER_ROWS.iter().enumerate() {
        let selected = focused && i == app.tracker_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        match *row {
            TrackerRow::Field(field) => lines.push(field_line(app, field, selected, width)),
            TrackerRow::Triggers => {
                let label_style = label_style(app, selected);
                let mut spans = vec![Span::styled(
                    format!("  {:<w$}", "Common Triggers", w = LABEL_WIDTH),
                    label_style,
                )];
                if selected {
                    spans.push(Span::styled(
                        "\u{2190}\u{2192} move  Space toggle",
                        Style::default().fg(app.theme.dim).bg(row_bg),
                    ));
                }
                pad_to_width(&mut spans, width, Style::default().bg(row_bg));
                lines.push(Line::from(spans));
                lines.extend(trigger_chip_lines(app, selected, width));
            }
            TrackerRow::Record => {
                lines.push(Line::from(""));
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
                    Span::styled("[ \u{1F4DD} Record Episode ]", style),
                ]));
            }
        }
    }
    lines
}

fn label_style(app: &App, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}

fn field_line(app: &App, field: DraftField, selected: bool, width: usize) -> Line<'static> {
    let row_bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
    let mut spans = vec![Span::styled(
        format!("  {:<w$}", field.label(), w = LABEL_WIDTH),
        label_style(app, selected),
    )];
    let avail = width.saturating_sub(spans_width(&spans) + 1);

    let editing = app.mode == Mode::Edit && app.edit_target == Some(EditTarget::Draft(field));
    if editing {
        let (before, after) = buffer_with_cursor(&app.edit_buffer, app.edit_cursor);
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        let value = app.page.episodes.draft().text(field);
        if value.is_empty() {
            spans.push(Span::styled(
                unicode::truncate_to_width(field.placeholder(), avail),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(
                unicode::truncate_to_width(&value, avail),
                value_style,
            ));
            if field == DraftField::Intensity {
                let level = app.page.episodes.draft().intensity.unwrap_or(0).clamp(0, 10) as usize;
                spans.push(Span::styled(
                    format!(
                        "/10  {}{}",
                        "\u{25A0}".repeat(level),
                        "\u{25A1}".repeat(10 - level)
                    ),
                    Style::default().fg(app.theme.blue).bg(row_bg),
                ));
            } else if field == DraftField::Duration {
                spans.push(Span::styled(
                    " min",
                    Style::default().fg(app.theme.dim).bg(row_bg),
                ));
            }
        }
        if selected && field.is_numeric() {
            spans.push(Span::styled(
                "  -/+",
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
    }

    pad_to_width(&mut spans, width, Style::default().bg(row_bg));
    Line::from(spans)
}

/// Lay the ten triggers out as `[x] Name` chips, wrapping to the width
fn trigger_chip_lines(app: &App, row_selected: bool, width: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let draft = app.page.episodes.draft();
    let indent = "    ";
    let mut lines = Vec::new();
    let mut spans: Vec<Span> = vec![Span::styled(indent, Style::default().bg(bg))];

    for (i, name) in COMMON_TRIGGERS.iter().enumerate() {
        let on = draft.triggers.contains(*name);
        let chip = format!("[{}] {}", if on { 'x' } else { ' ' }, name);
        let chip_w = unicode::display_width(&chip);
        if spans.len() > 1 && spans_width(&spans) + 2 + chip_w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::styled(indent, Style::default().bg(bg)));
        } else if spans.len() > 1 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }

        let mut style = if on {
            Style::default().fg(app.theme.text_bright).bg(app.theme.chip_on_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        if row_selected && i == app.trigger_cursor {
            style = style
                .bg(app.theme.highlight)
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(chip, style));
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }
    lines
}

fn episode_lines(app: &App, ep: &Episode, width: usize) -> Vec<Line<'static>> {
    let bg = Style::default().bg(app.theme.background);
    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let text = Style::default().fg(app.theme.text).bg(app.theme.background);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", bg),
            Span::styled(
                ep.date.clone(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.background)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", ep.time), dim),
            Span::styled(
                format!("  {}min", ep.duration),
                Style::default().fg(app.theme.purple).bg(app.theme.background),
            ),
            Span::styled(
                format!("  Intensity: {}/10", ep.intensity),
                Style::default().fg(app.theme.blue).bg(app.theme.background),
            ),
        ]),
    ];
    lines.extend(wrapped_lines(&ep.description, width, "    ", text, bg));

    let mut trigger_spans = vec![Span::styled("    ", bg)];
    for (i, t) in ep.triggers.iter().enumerate() {
        if i > 0 {
            trigger_spans.push(Span::styled(" ", bg));
        }
        trigger_spans.push(Span::styled(
            format!(" {} ", t),
            Style::default().fg(app.theme.text).bg(app.theme.selection_bg),
        ));
    }
    lines.push(Line::from(trigger_spans));

    lines.push(Line::from(vec![
        Span::styled("    Before: ", dim),
        Span::styled(ep.emotional_state_before.clone(), text),
        Span::styled("   After: ", dim),
        Span::styled(ep.emotional_state_after.clone(), text),
    ]));
    lines
}
