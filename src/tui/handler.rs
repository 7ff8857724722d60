//! Event handler for the TUI
//!
//! Routes keyboard events to the error popup or the focused field.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

const PAGE_ROWS: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_error() {
        return handle_error_key(app, key);
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => {
            app.clear_status();
            app.submit();
        }
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_ROWS),
        KeyCode::PageDown => app.scroll_down(PAGE_ROWS),
        _ => handle_editing_key(app, key),
    }

    Ok(())
}

/// Enter or Esc closes the popup, everything else is swallowed
fn handle_error_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_error();
    }
    Ok(())
}

/// Handle keys that edit the focused field
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    let focus = app.focus;
    let input = app.focused_input_mut();

    match key.code {
        KeyCode::Char(c) => {
            if focus.is_amount() && !(c.is_ascii_digit() || c == '.') {
                return;
            }
            input.insert(c);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return,
    }

    if focus == Focus::Search {
        app.reset_scroll();
    }
}
