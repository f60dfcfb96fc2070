use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::Config;
use crate::model::episode::DraftField;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App with one recorded episode
pub fn app_with_episode(description: &str, triggers: &[&str], duration: i64) -> App {
    let mut app = App::new(Config::default());
    let store = &mut app.page.episodes;
    store.update_draft_field(DraftField::Description, description);
    store.update_draft_field(DraftField::EmotionalStateBefore, "restless");
    store.update_draft_field(DraftField::EmotionalStateAfter, "settled");
    store.set_duration(duration);
    for t in triggers {
        store.toggle_trigger(t);
    }
    store.commit_episode().unwrap();
    app
}
