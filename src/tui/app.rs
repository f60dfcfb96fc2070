use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::Config;
use crate::model::episode::DraftField;
use crate::model::reflection::ReflectionField;
use crate::ops::page::Page;
use crate::ops::reflection_ops::MemorySink;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view fills the main pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tracker,
    Reflection,
}

impl View {
    pub const ALL: [View; 2] = [View::Tracker, View::Reflection];

    pub fn title(self) -> &'static str {
        match self {
            View::Tracker => "Tracker",
            View::Reflection => "Reflection",
        }
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Main,
    Components,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// A selectable row of the episode form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerRow {
    Field(DraftField),
    Triggers,
    Record,
}

/// Episode form rows, in display order
pub const TRACKER_ROWS: [TrackerRow; 11] = [
    TrackerRow::Field(DraftField::Date),
    TrackerRow::Field(DraftField::Time),
    TrackerRow::Field(DraftField::Duration),
    TrackerRow::Field(DraftField::Intensity),
    TrackerRow::Triggers,
    TrackerRow::Field(DraftField::Description),
    TrackerRow::Field(DraftField::EmotionalStateBefore),
    TrackerRow::Field(DraftField::EmotionalStateAfter),
    TrackerRow::Field(DraftField::TaskImpact),
    TrackerRow::Field(DraftField::ActionTaken),
    TrackerRow::Record,
];

/// A selectable row of the reflection view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionRow {
    Field(ReflectionField),
    Save,
}

pub const REFLECTION_ROWS: [ReflectionRow; 5] = [
    ReflectionRow::Field(ReflectionField::WhatBroughtBack),
    ReflectionRow::Field(ReflectionField::PatternsNoticed),
    ReflectionRow::Field(ReflectionField::StrategiesWorked),
    ReflectionRow::Field(ReflectionField::GoalsNextWeek),
    ReflectionRow::Save,
];

/// The field an edit buffer writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Draft(DraftField),
    Reflection(ReflectionField),
}

/// Main application state
pub struct App {
    pub page: Page,
    pub config: Config,
    pub theme: Theme,
    pub view: View,
    pub focus: Focus,
    pub mode: Mode,
    pub should_quit: bool,
    /// Index into TRACKER_ROWS
    pub tracker_cursor: usize,
    /// Index into COMMON_TRIGGERS, used while the triggers row is selected
    pub trigger_cursor: usize,
    /// Index into REFLECTION_ROWS
    pub reflection_cursor: usize,
    /// Index into the component list
    pub component_cursor: usize,
    /// Recorded episodes hidden above the visible part of the list
    pub episode_scroll: usize,
    pub edit_target: Option<EditTarget>,
    pub edit_buffer: String,
    /// Byte offset into edit_buffer
    pub edit_cursor: usize,
    pub show_help: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Where saved reflections go
    pub submissions: MemorySink,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            page: Page::new(),
            config,
            theme,
            view: View::Tracker,
            focus: Focus::Main,
            mode: Mode::Navigate,
            should_quit: false,
            tracker_cursor: 0,
            trigger_cursor: 0,
            reflection_cursor: 0,
            component_cursor: 0,
            episode_scroll: 0,
            edit_target: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            show_help: false,
            status_message: None,
            submissions: MemorySink::default(),
        }
    }

    pub fn tracker_row(&self) -> TrackerRow {
        TRACKER_ROWS[self.tracker_cursor.min(TRACKER_ROWS.len() - 1)]
    }

    pub fn reflection_row(&self) -> ReflectionRow {
        REFLECTION_ROWS[self.reflection_cursor.min(REFLECTION_ROWS.len() - 1)]
    }

    /// Current stored text for an edit target
    pub fn target_text(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Draft(field) => self.page.episodes.draft().text(field),
            EditTarget::Reflection(field) => {
                self.page.reflection.answers().get(field).to_string()
            }
        }
    }

    /// Open the edit buffer on `target`, seeded with its current text
    pub fn begin_edit(&mut self, target: EditTarget) {
        self.edit_buffer = self.target_text(target);
        self.edit_cursor = self.edit_buffer.len();
        self.edit_target = Some(target);
        self.mode = Mode::Edit;
    }

    /// Write the edit buffer back to its target and leave edit mode
    pub fn commit_edit(&mut self) {
        if let Some(target) = self.edit_target.take() {
            match target {
                EditTarget::Draft(field) => {
                    self.page.episodes.update_draft_field(field, &self.edit_buffer)
                }
                EditTarget::Reflection(field) => {
                    self.page.reflection.update_field(field, &self.edit_buffer)
                }
            }
        }
        self.clear_edit();
    }

    /// Leave edit mode without touching the target
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.clear_edit();
    }

    fn clear_edit(&mut self) {
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Record the draft. A draft missing its description or triggers is left as is, silently.
    pub fn record_episode(&mut self) {
        if self.page.episodes.commit_episode().is_ok() {
            self.trigger_cursor = 0;
        }
    }

    /// Hand the reflection answers to the submission sink
    pub fn save_reflection(&mut self) {
        match self.page.reflection.save(&mut self.submissions) {
            Ok(()) => self.status_message = Some("Reflection saved".into()),
            Err(e) => {
                tracing::warn!(error = %e, "reflection save failed");
                self.status_message = Some(format!("Save failed: {}", e));
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    let stats = app.page.episodes.derived_stats();
    tracing::info!(
        episodes = stats.count,
        minutes = stats.total_minutes,
        "tui stopped, session state discarded"
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_defaults() {
        let app = App::new(Config::default());
        assert_eq!(app.view, View::Tracker);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tracker_row(), TrackerRow::Field(DraftField::Date));
        assert_eq!(app.reflection_row(), ReflectionRow::Field(ReflectionField::WhatBroughtBack));
    }

    #[test]
    fn test_edit_commit_writes_draft() {
        let mut app = App::new(Config::default());
        app.begin_edit(EditTarget::Draft(DraftField::Description));
        assert_eq!(app.mode, Mode::Edit);
        app.edit_buffer.push_str("Lost focus");
        app.commit_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(
            app.page.episodes.draft().description.as_deref(),
            Some("Lost focus")
        );
    }

    #[test]
    fn test_edit_cancel_keeps_target() {
        let mut app = App::new(Config::default());
        app.page
            .reflection
            .update_field(ReflectionField::GoalsNextWeek, "rest");
        app.begin_edit(EditTarget::Reflection(ReflectionField::GoalsNextWeek));
        assert_eq!(app.edit_buffer, "rest");
        app.edit_buffer.push_str(" more");
        app.cancel_edit();
        assert_eq!(app.page.reflection.answers().goals_next_week, "rest");
    }

    #[test]
    fn test_record_episode_silent_on_invalid_draft() {
        let mut app = App::new(Config::default());
        app.record_episode();
        assert!(app.page.episodes.episodes().is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_save_reflection_goes_to_sink() {
        let mut app = App::new(Config::default());
        app.page
            .reflection
            .update_field(ReflectionField::PatternsNoticed, "mornings");
        app.save_reflection();
        assert_eq!(app.submissions.saved.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Reflection saved"));
    }
}
