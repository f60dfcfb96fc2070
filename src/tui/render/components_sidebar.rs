use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::component::{DEFAULT_ACTIVE_COMPONENT, SessionComponent};
use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::helpers::{pad_to_width, spans_width, wrapped_lines};

/// Rows reserved at the bottom for progress and weekly stats
const SUMMARY_HEIGHT: u16 = 8;

/// Render the session components sidebar with progress and "This Week" stats
pub fn render_components_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.sidebar_bg;
    let border_color = if app.focus == Focus::Components {
        app.theme.highlight
    } else {
        app.theme.selection_bg
    };
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(SUMMARY_HEIGHT)])
        .split(inner);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Session Components",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                " {} of {} completed",
                app.page.checklist.completed_count(),
                app.page.checklist.total_count()
            ),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    for (i, comp) in app.page.checklist.components().iter().enumerate() {
        let selected = app.focus == Focus::Components && i == app.component_cursor;
        lines.push(Line::from(""));
        lines.extend(component_lines(app, comp, selected, width));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(list, chunks[0]);

    render_summary(frame, app, chunks[1]);
}

fn component_lines(
    app: &App,
    comp: &SessionComponent,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.sidebar_bg
    };
    let emphasized = !comp.completed && comp.id == DEFAULT_ACTIVE_COMPONENT;

    let (marker, marker_style) = if comp.completed {
        (
            "[\u{2713}]".to_string(),
            Style::default().fg(app.theme.green).bg(bg),
        )
    } else {
        (
            format!("[{}]", comp.id),
            Style::default().fg(app.theme.dim).bg(bg),
        )
    };
    let title_fg = if comp.completed {
        app.theme.green
    } else if emphasized || selected {
        app.theme.text_bright
    } else {
        app.theme.text
    };

    let mut header = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(marker, marker_style),
        Span::styled(
            format!(" {} {}", comp.kind.icon(), comp.title),
            Style::default()
                .fg(title_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let duration_w = unicode::display_width(&comp.duration) + 1;
    let used = spans_width(&header);
    if used + duration_w < width {
        header.push(Span::styled(
            " ".repeat(width - used - duration_w),
            Style::default().bg(bg),
        ));
        header.push(Span::styled(
            format!("{} ", comp.duration),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        pad_to_width(&mut header, width, Style::default().bg(bg));
    }

    let mut lines = vec![Line::from(header)];
    let side_bg = Style::default().bg(app.theme.sidebar_bg);
    lines.extend(wrapped_lines(
        &comp.description,
        width,
        "     ",
        Style::default().fg(app.theme.dim).bg(app.theme.sidebar_bg),
        side_bg,
    ));

    if let Some(items) = comp.checklist() {
        lines.push(Line::from(vec![
            Span::styled("     ", side_bg),
            Span::styled(
                "\u{2713} Your preparation checklist:",
                Style::default().fg(app.theme.green).bg(app.theme.sidebar_bg),
            ),
        ]));
        for item in items {
            let wrapped = unicode::wrap_words(item, width.saturating_sub(9).max(1));
            for (j, part) in wrapped.into_iter().enumerate() {
                let bullet = if j == 0 { "     \u{2022}  " } else { "        " };
                lines.push(Line::from(vec![
                    Span::styled(bullet, Style::default().fg(app.theme.green).bg(app.theme.sidebar_bg)),
                    Span::styled(part, Style::default().fg(app.theme.text).bg(app.theme.sidebar_bg)),
                ]));
            }
        }
    }
    lines
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.sidebar_bg;
    let width = area.width as usize;
    let completed = app.page.checklist.completed_count();
    let total = app.page.checklist.total_count();
    let stats = app.page.episodes.derived_stats();

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.selection_bg).bg(bg),
    ));

    let mut progress = vec![Span::styled(
        " Progress",
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let count = format!("{}/{} ", completed, total);
    let used = spans_width(&progress) + count.len();
    if used < width {
        progress.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    progress.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));

    let bar_width = width.saturating_sub(2);
    let filled = (app.page.checklist.progress_ratio() * bar_width as f64).round() as usize;
    let bar = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{2588}".repeat(filled.min(bar_width)),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(
            "\u{2591}".repeat(bar_width - filled.min(bar_width)),
            Style::default().fg(app.theme.selection_bg).bg(bg),
        ),
    ]);

    let half = width / 2;
    let stat_cell = |value: String, w: usize| format!("{:^w$}", value, w = w);
    let lines = vec![
        rule.clone(),
        Line::from(progress),
        bar,
        rule,
        Line::from(Span::styled(
            " This Week",
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(vec![
            Span::styled(
                stat_cell(stats.count.to_string(), half),
                Style::default()
                    .fg(app.theme.blue)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                stat_cell(stats.total_minutes.to_string(), width - half),
                Style::default()
                    .fg(app.theme.purple)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                stat_cell("Episodes".into(), half),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(
                stat_cell("Total Minutes".into(), width - half),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
