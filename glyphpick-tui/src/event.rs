//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::mode::AppMode;
use crate::ui::{HitMap, HitTarget};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event. `columns` is the width of the glyph grid as last drawn.
pub fn handle_key(app: &mut App, key: KeyEvent, columns: usize) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        AppMode::Browse => handle_browse_mode(app, key, columns),
        AppMode::Search => handle_search_mode(app, key),
    }
}

/// Handle keys while moving over the grid
fn handle_browse_mode(app: &mut App, key: KeyEvent, columns: usize) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,

        KeyCode::Char('/') => app.enter_search(),

        // Grid movement
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0, columns),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0, columns),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1, columns),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1, columns),

        // Pick
        KeyCode::Enter | KeyCode::Char(' ') => app.click_focused(),

        // Paging
        KeyCode::PageUp | KeyCode::Char('[') => {
            app.previous_page();
        }
        KeyCode::PageDown | KeyCode::Char(']') => {
            app.next_page();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.first_page();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.last_page();
        }

        // Escape drops the filter
        KeyCode::Esc => app.clear_search(),

        _ => {}
    }
    HandleResult::Continue
}

/// Handle keys in search mode
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => app.exit_mode(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_search();
        }
        KeyCode::Backspace => app.search_backspace(),
        // Unbound Ctrl/Alt chords are not text
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.search_insert(c)
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a mouse event against the regions of the last frame
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, hits: &HitMap) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.target_at(mouse.column, mouse.row) {
                Some(HitTarget::Glyph(index)) => {
                    app.cursor = index;
                    app.click_focused();
                }
                Some(HitTarget::Control(control)) => {
                    app.activate(control);
                }
                Some(HitTarget::Search) => app.enter_search(),
                None => {}
            }
        }
        MouseEventKind::ScrollDown => {
            app.next_page();
        }
        MouseEventKind::ScrollUp => {
            app.previous_page();
        }
        _ => {}
    }
}
