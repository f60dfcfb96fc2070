pub mod components_sidebar;
pub mod help_overlay;
pub mod helpers;
pub mod reflection_view;
pub mod status_row;
pub mod tab_bar;
pub mod tracker_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Sidebar width in columns when the terminal is wide enough
const SIDEBAR_WIDTH: u16 = 38;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    // Content: main view | components sidebar
    let sidebar_width = SIDEBAR_WIDTH.min(chunks[1].width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(sidebar_width)])
        .split(chunks[1]);

    match app.view {
        View::Tracker => tracker_view::render_tracker_view(frame, app, columns[0]),
        View::Reflection => reflection_view::render_reflection_view(frame, app, columns[0]),
    }
    components_sidebar::render_components_sidebar(frame, app, columns[1]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
