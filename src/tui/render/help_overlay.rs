use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let sections: [(&str, &[(&str, &'static str)]); 4] = [
        (
            " Episode form",
            &[
                (" \u{2191}\u{2193}/jk", "Move between fields"),
                (" Enter/e", "Edit field"),
                (" -/+", "Adjust duration or intensity"),
                (" \u{2190}\u{2192} Space", "Pick and toggle triggers"),
                (" R", "Record episode"),
                (" J/K", "Scroll recorded episodes"),
            ],
        ),
        (
            " Reflection",
            &[(" Enter/e", "Edit answer"), (" S", "Save reflection")],
        ),
        (
            " Session components",
            &[(" Tab", "Focus sidebar"), (" Space/x", "Mark done / not done")],
        ),
        (
            " Global",
            &[
                (" 1/2 ]", "Tracker / Reflection view"),
                (" ?", "Toggle this help"),
                (" q Ctrl+Q", "Quit (nothing is saved)"),
            ],
        ),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (title, bindings) in sections {
        lines.push(Line::from(Span::styled(title, header_style)));
        for &(key, desc) in bindings {
            lines.push(binding_line(key, desc, key_style, desc_style));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Key column is padded to a fixed width so descriptions line up
fn binding_line(
    key: &str,
    desc: &'static str,
    key_style: Style,
    desc_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", key), key_style),
        Span::styled(desc, desc_style),
    ])
}

/// A `percent_x` by `percent_y` box centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
