use crossterm::event::{KeyCode, KeyEvent};

use crate::model::episode::DraftField;
use crate::model::trigger::COMMON_TRIGGERS;
use crate::tui::app::{
    App, EditTarget, Focus, REFLECTION_ROWS, ReflectionRow, TRACKER_ROWS, TrackerRow, View,
};

const INTENSITY_MIN: i64 = 1;
const INTENSITY_MAX: i64 = 10;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('1') => {
            switch_view(app, View::Tracker);
            return;
        }
        KeyCode::Char('2') => {
            switch_view(app, View::Reflection);
            return;
        }
        KeyCode::Char(']') | KeyCode::BackTab => {
            let next = match app.view {
                View::Tracker => View::Reflection,
                View::Reflection => View::Tracker,
            };
            switch_view(app, next);
            return;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Main => Focus::Components,
                Focus::Components => Focus::Main,
            };
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Components => handle_components(app, key),
        Focus::Main => match app.view {
            View::Tracker => handle_tracker(app, key),
            View::Reflection => handle_reflection(app, key),
        },
    }
}

fn switch_view(app: &mut App, view: View) {
    app.view = view;
    app.focus = Focus::Main;
}

fn handle_components(app: &mut App, key: KeyEvent) {
    let count = app.page.checklist.total_count();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.component_cursor + 1 < count {
                app.component_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.component_cursor = app.component_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
            if let Some(id) = app
                .page
                .checklist
                .components()
                .get(app.component_cursor)
                .map(|c| c.id)
            {
                app.page.checklist.toggle_completion(id);
            }
        }
        KeyCode::Esc => app.focus = Focus::Main,
        _ => {}
    }
}

fn handle_tracker(app: &mut App, key: KeyEvent) {
    let row = app.tracker_row();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.tracker_cursor + 1 < TRACKER_ROWS.len() {
                app.tracker_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.tracker_cursor = app.tracker_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.tracker_cursor = 0,
        KeyCode::Char('G') => app.tracker_cursor = TRACKER_ROWS.len() - 1,
        KeyCode::Char('J') | KeyCode::PageDown => {
            if app.episode_scroll + 1 < app.page.episodes.episodes().len() {
                app.episode_scroll += 1;
            }
        }
        KeyCode::Char('K') | KeyCode::PageUp => {
            app.episode_scroll = app.episode_scroll.saturating_sub(1);
        }
        KeyCode::Char('R') => app.record_episode(),
        _ => match row {
            TrackerRow::Field(field) => handle_tracker_field(app, field, key),
            TrackerRow::Triggers => handle_triggers(app, key),
            TrackerRow::Record => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.record_episode();
                }
            }
        },
    }
}

fn handle_tracker_field(app: &mut App, field: DraftField, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(EditTarget::Draft(field)),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Char('l') => {
            adjust_number(app, field, true)
        }
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Char('h') => {
            adjust_number(app, field, false)
        }
        _ => {}
    }
}

/// Step duration or intensity by `step` inside `min..=max`. A typed value
/// already outside the range never moves further out.
fn step_within(current: i64, step: i64, min: i64, max: i64, up: bool) -> i64 {
    if up {
        current.saturating_add(step).min(max.max(current))
    } else {
        current.saturating_sub(step).max(min.min(current))
    }
}

fn adjust_number(app: &mut App, field: DraftField, up: bool) {
    let draft = app.page.episodes.draft();
    match field {
        DraftField::Duration => {
            let step = i64::from(app.config.tracker.duration_step.max(1));
            let max = i64::from(app.config.tracker.duration_max);
            let next = step_within(draft.duration.unwrap_or(0), step, 0, max, up);
            app.page.episodes.set_duration(next);
        }
        DraftField::Intensity => {
            let current = draft.intensity.unwrap_or(INTENSITY_MIN);
            let next = step_within(current, 1, INTENSITY_MIN, INTENSITY_MAX, up);
            app.page.episodes.set_intensity(next);
        }
        _ => {}
    }
}

fn handle_triggers(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => {
            if app.trigger_cursor + 1 < COMMON_TRIGGERS.len() {
                app.trigger_cursor += 1;
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.trigger_cursor = app.trigger_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
            let name = COMMON_TRIGGERS[app.trigger_cursor.min(COMMON_TRIGGERS.len() - 1)];
            app.page.episodes.toggle_trigger(name);
        }
        _ => {}
    }
}

fn handle_reflection(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.reflection_cursor + 1 < REFLECTION_ROWS.len() {
                app.reflection_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.reflection_cursor = app.reflection_cursor.saturating_sub(1);
        }
        KeyCode::Char('S') => app.save_reflection(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char(' ') => match app.reflection_row() {
            ReflectionRow::Field(field) => app.begin_edit(EditTarget::Reflection(field)),
            ReflectionRow::Save => app.save_reflection(),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::model::reflection::ReflectionField;
    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;

    fn app() -> App {
        App::new(Config::default())
    }

    fn goto(app: &mut App, row: TrackerRow) {
        app.tracker_cursor = TRACKER_ROWS.iter().position(|r| *r == row).unwrap();
    }

    #[test]
    fn test_cursor_bounds() {
        let mut app = app();
        handle_key(&mut app, ch('k'));
        assert_eq!(app.tracker_cursor, 0);
        handle_key(&mut app, ch('G'));
        assert_eq!(app.tracker_row(), TrackerRow::Record);
        handle_key(&mut app, ch('j'));
        assert_eq!(app.tracker_row(), TrackerRow::Record);
    }

    #[test]
    fn test_view_switching() {
        let mut app = app();
        handle_key(&mut app, ch('2'));
        assert_eq!(app.view, View::Reflection);
        handle_key(&mut app, ch(']'));
        assert_eq!(app.view, View::Tracker);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Components);
        handle_key(&mut app, ch('1'));
        assert_eq!(app.focus, Focus::Main);
    }

    #[test]
    fn test_toggle_component_from_sidebar() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert!(app.page.checklist.get(3).unwrap().completed);
        assert_eq!(app.page.checklist.completed_count(), 1);
        handle_key(&mut app, ch(' '));
        assert_eq!(app.page.checklist.completed_count(), 0);
    }

    #[test]
    fn test_trigger_toggle_keys() {
        let mut app = app();
        goto(&mut app, TrackerRow::Triggers);
        handle_key(&mut app, ch(' '));
        assert!(app.page.episodes.draft().triggers.contains("Stress/Anxiety"));
        handle_key(&mut app, ch(' '));
        assert!(app.page.episodes.draft().triggers.is_empty());
        for _ in 0..20 {
            handle_key(&mut app, ch('l'));
        }
        assert_eq!(app.trigger_cursor, COMMON_TRIGGERS.len() - 1);
    }

    #[test]
    fn test_intensity_steps_clamped() {
        let mut app = app();
        goto(&mut app, TrackerRow::Field(DraftField::Intensity));
        for _ in 0..8 {
            handle_key(&mut app, ch('+'));
        }
        assert_eq!(app.page.episodes.draft().intensity, Some(10));
        for _ in 0..12 {
            handle_key(&mut app, ch('-'));
        }
        assert_eq!(app.page.episodes.draft().intensity, Some(1));
    }

    #[test]
    fn test_intensity_plus_on_huge_typed_value() {
        let mut app = app();
        app.page
            .episodes
            .update_draft_field(DraftField::Intensity, "99999999999999999999");
        goto(&mut app, TrackerRow::Field(DraftField::Intensity));
        handle_key(&mut app, ch('+'));
        assert_eq!(app.page.episodes.draft().intensity, Some(i64::MAX));
        handle_key(&mut app, ch('-'));
        assert_eq!(app.page.episodes.draft().intensity, Some(i64::MAX - 1));
    }

    #[test]
    fn test_minus_on_negative_typed_value_stays_put() {
        let mut app = app();
        app.page
            .episodes
            .update_draft_field(DraftField::Duration, "-4");
        goto(&mut app, TrackerRow::Field(DraftField::Duration));
        handle_key(&mut app, ch('-'));
        assert_eq!(app.page.episodes.draft().duration, Some(-4));
        handle_key(&mut app, ch('+'));
        assert_eq!(app.page.episodes.draft().duration, Some(1));
    }

    #[test]
    fn test_episode_scroll_stops_at_last_episode() {
        let mut app = app();
        handle_key(&mut app, ch('J'));
        assert_eq!(app.episode_scroll, 0);
        for desc in ["first", "second", "third"] {
            app.page.episodes.update_draft_field(DraftField::Description, desc);
            app.page.episodes.toggle_trigger("Boredom");
            app.page.episodes.commit_episode().unwrap();
        }
        for _ in 0..10 {
            handle_key(&mut app, ch('J'));
        }
        assert_eq!(app.episode_scroll, 2);
        handle_key(&mut app, ch('K'));
        assert_eq!(app.episode_scroll, 1);
    }

    #[test]
    fn test_duration_steps_use_config() {
        let mut config = Config::default();
        config.tracker.duration_step = 10;
        config.tracker.duration_max = 25;
        let mut app = App::new(config);
        goto(&mut app, TrackerRow::Field(DraftField::Duration));
        handle_key(&mut app, ch('+'));
        assert_eq!(app.page.episodes.draft().duration, Some(10));
        handle_key(&mut app, ch('+'));
        handle_key(&mut app, ch('+'));
        assert_eq!(app.page.episodes.draft().duration, Some(25));
        handle_key(&mut app, ch('-'));
        assert_eq!(app.page.episodes.draft().duration, Some(15));
    }

    #[test]
    fn test_record_on_invalid_draft_is_silent() {
        let mut app = app();
        goto(&mut app, TrackerRow::Record);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.page.episodes.episodes().is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_reflection_edit_and_save() {
        let mut app = app();
        handle_key(&mut app, ch('2'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Edit);
        for c in "after lunch".chars() {
            handle_key(&mut app, ch(c));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.page.reflection.answers().get(ReflectionField::PatternsNoticed),
            "after lunch"
        );
        handle_key(&mut app, ch('G')); // not bound in reflection view
        for _ in 0..4 {
            handle_key(&mut app, ch('j'));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.submissions.saved.len(), 1);
        assert_eq!(app.submissions.saved[0].patterns_noticed, "after lunch");
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, ch('?'));
        assert!(app.show_help);
        handle_key(&mut app, ch('j'));
        assert_eq!(app.tracker_cursor, 0);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
