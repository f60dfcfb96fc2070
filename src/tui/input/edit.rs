use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => app.commit_edit(),
        (_, KeyCode::Esc) => app.cancel_edit(),

        // Word and line deletion
        (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
            let start = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.replace_range(start..app.edit_cursor, "");
            app.edit_cursor = start;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }

        // Cursor movement
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => app.edit_cursor = 0,
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len()
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_cursor = next;
            }
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}
