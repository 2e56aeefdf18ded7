//! Event handler for the TUI
//!
//! Routes key events to focus changes, field edits and controller calls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;
use crate::api::BudgetApi;
use crate::controller::PendingUpload;

/// Handle an incoming event
///
/// Returns a pending upload when Enter was pressed on the file field, so the
/// caller can draw the "Uploading..." status before sending the request.
pub fn handle_event<A: BudgetApi>(app: &mut App<A>, event: Event) -> Option<PendingUpload> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => None,
    }
}

/// Handle a key event
fn handle_key_event<A: BudgetApi>(app: &mut App<A>, key: KeyEvent) -> Option<PendingUpload> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),

        KeyCode::Char('r') if ctrl => {
            let _ = app.client.refresh();
        }
        KeyCode::F(5) => {
            let _ = app.client.refresh();
        }

        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),

        KeyCode::Enter => {
            if app.focus == Focus::ReceiptFile {
                return app.client.begin_upload();
            }
            app.submit_budget();
        }

        KeyCode::Backspace => app.focused_field_mut().backspace(),
        KeyCode::Delete => app.focused_field_mut().delete(),
        KeyCode::Left => app.focused_field_mut().move_left(),
        KeyCode::Right => app.focused_field_mut().move_right(),
        KeyCode::Home => app.focused_field_mut().move_start(),
        KeyCode::End => app.focused_field_mut().move_end(),

        KeyCode::Char(c) if !ctrl => app.focused_field_mut().insert(c),

        _ => {}
    }

    None
}
