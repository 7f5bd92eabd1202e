//! Core application state

use std::sync::Arc;

use glyphpick_core::{
    GlyphCache, GlyphRegistry, GlyphSize, HostPage, PageControl, SelectorPanel,
};
use tracing::debug;

use crate::mode::AppMode;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: AppMode,

    /// Search, paging and highlight state
    pub panel: SelectorPanel,

    /// Owner of the picked glyph
    pub host: HostPage,

    /// Shared glyph cache for every renderer
    pub cache: GlyphCache,

    /// Focused button, as an index into the page window
    pub cursor: usize,

    /// Status message (shown in the hint bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,

    /// Current placeholder shade
    pub pulse_phase: bool,

    /// Something changed since the last draw
    dirty: bool,
}

impl App {
    /// Create a new App over `registry`
    pub fn new(registry: Arc<GlyphRegistry>) -> Self {
        Self {
            mode: AppMode::Browse,
            panel: SelectorPanel::new(registry.catalog()),
            host: HostPage::new(),
            cache: GlyphCache::new(registry),
            cursor: 0,
            status_message: None,
            should_quit: false,
            pulse_phase: false,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a redraw is due; clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn enter_search(&mut self) {
        self.mode = AppMode::Search;
        self.dirty = true;
    }

    pub fn exit_mode(&mut self) {
        self.mode = AppMode::Browse;
        self.dirty = true;
    }

    /// Replace the search text (resets to page 1)
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.panel.set_search_term(text);
        self.cursor = 0;
        self.dirty = true;
    }

    /// Add text to the search input
    pub fn search_insert(&mut self, c: char) {
        let mut term = self.panel.search_term().to_string();
        term.push(c);
        self.set_search_term(term);
    }

    /// Delete the last search character
    pub fn search_backspace(&mut self) {
        let mut term = self.panel.search_term().to_string();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    pub fn clear_search(&mut self) {
        if !self.panel.search_term().is_empty() {
            self.set_search_term(String::new());
        }
    }

    /// Jump to `page`; returns true when the page changed
    pub fn set_page(&mut self, page: usize) -> bool {
        let before = self.panel.current_page();
        let changed = self.panel.set_page(page) != before;
        self.after_page_change(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.panel.previous_page();
        self.after_page_change(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.panel.next_page();
        self.after_page_change(changed)
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        let last = self.panel.total_pages();
        self.set_page(last)
    }

    /// Press a pagination control
    pub fn activate(&mut self, control: PageControl) -> bool {
        let changed = self.panel.activate(control);
        self.after_page_change(changed)
    }

    fn after_page_change(&mut self, changed: bool) -> bool {
        if changed {
            debug!(page = self.panel.current_page(), "page changed");
            let len = self.panel.page_window().len();
            self.cursor = self.cursor.min(len.saturating_sub(1));
            self.dirty = true;
        }
        changed
    }

    /// Move the grid cursor; `dy` moves by whole rows of `columns`
    pub fn move_cursor(&mut self, dx: isize, dy: isize, columns: usize) {
        let len = self.panel.page_window().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + dx + dy * columns.max(1) as isize;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
        self.dirty = true;
    }

    /// Name under the grid cursor
    pub fn focused_name(&self) -> Option<&str> {
        self.panel.page_window().get(self.cursor).copied()
    }

    /// Press the focused glyph button
    pub fn click_focused(&mut self) {
        if let Some(name) = self.focused_name().map(str::to_string) {
            self.click(&name);
        }
    }

    /// Press the glyph button for `name`
    pub fn click(&mut self, name: &str) {
        self.panel.select_name(name, &mut self.host);
        self.status_message = Some(format!("Selected {}", name));
        self.dirty = true;
    }

    /// The host's confirmed selection
    pub fn selected(&self) -> Option<&str> {
        self.host.selected()
    }

    /// Resolve every glyph about to be drawn, starting loads as needed
    pub fn resolve_visible(&mut self) {
        for name in self.panel.page_window() {
            self.cache.resolve(name, GlyphSize::BUTTON);
        }
        if let Some(preview) = self.host.preview() {
            self.cache.resolve(preview.name, preview.size);
        }
    }

    /// Apply finished glyph loads
    pub fn poll_loads(&mut self) {
        if self.cache.poll_completed() > 0 {
            self.dirty = true;
        }
    }

    /// Whether any visible glyph is still a placeholder
    pub fn placeholders_visible(&self) -> bool {
        self.panel
            .page_window()
            .iter()
            .any(|name| self.cache.is_loading(name))
            || self
                .host
                .selected()
                .is_some_and(|name| self.cache.is_loading(name))
    }

    /// Advance the placeholder pulse
    pub fn pulse(&mut self) {
        if self.placeholders_visible() {
            self.pulse_phase = !self.pulse_phase;
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphpick_core::{Manifest, Renderable};
    use std::time::Duration;

    fn app() -> App {
        let manifest = Manifest::builtin().unwrap();
        App::new(Arc::new(GlyphRegistry::from_manifest(&manifest, Duration::ZERO)))
    }

    #[test]
    fn test_typing_resets_page_and_cursor() {
        let mut app = app();
        app.next_page();
        app.move_cursor(3, 0, 10);
        assert_eq!(app.panel.current_page(), 2);

        app.search_insert('a');
        assert_eq!(app.panel.search_term(), "a");
        assert_eq!(app.panel.current_page(), 1);
        assert_eq!(app.cursor, 0);

        app.search_backspace();
        assert_eq!(app.panel.search_term(), "");
    }

    #[test]
    fn test_cursor_clamps_to_window() {
        let mut app = app();
        app.set_search_term("arrow-up");
        let len = app.panel.page_window().len();
        app.move_cursor(0, 5, 10);
        assert_eq!(app.cursor, len - 1);
        app.move_cursor(-50, 0, 10);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_click_focused_updates_panel_and_host() {
        let mut app = app();
        app.set_search_term("house");
        app.click_focused();

        assert_eq!(app.selected(), Some("house"));
        assert_eq!(app.panel.selected(), Some("house"));
        assert_eq!(app.status_message.as_deref(), Some("Selected house"));
    }

    #[test]
    fn test_page_bounds() {
        let mut app = app();
        assert!(!app.previous_page());
        assert!(app.last_page());
        assert_eq!(app.panel.current_page(), app.panel.total_pages());
        assert!(!app.next_page());
        assert!(app.first_page());
    }

    #[test]
    fn test_take_dirty() {
        let mut app = app();
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        app.next_page();
        assert!(app.take_dirty());
    }

    #[tokio::test]
    async fn test_resolve_visible_loads_page_once() {
        let mut app = app();
        app.resolve_visible();
        let started = app.cache.loads_started();
        assert_eq!(started, app.panel.page_window().len());
        assert!(app.placeholders_visible());

        app.resolve_visible();
        assert_eq!(app.cache.loads_started(), started);

        app.cache.settle().await;
        assert!(!app.placeholders_visible());
        let first = app.panel.page_window()[0].to_string();
        assert!(matches!(
            app.cache.peek(&first, GlyphSize::BUTTON),
            Renderable::Glyph { .. }
        ));
    }

    #[tokio::test]
    async fn test_loads_for_pages_left_behind_are_kept() {
        let mut app = app();
        app.resolve_visible();
        let first_page: Vec<String> = app
            .panel
            .page_window()
            .iter()
            .map(|name| name.to_string())
            .collect();

        // Leave page 1 before anything finishes loading
        assert!(app.next_page());
        app.resolve_visible();
        app.cache.settle().await;
        let started = app.cache.loads_started();

        assert!(app.first_page());
        app.resolve_visible();
        assert_eq!(app.cache.loads_started(), started);
        for name in &first_page {
            assert!(matches!(
                app.cache.peek(name, GlyphSize::BUTTON),
                Renderable::Glyph { .. }
            ));
        }
        assert!(!app.placeholders_visible());
    }

    #[tokio::test]
    async fn test_pulse_only_while_placeholders_visible() {
        let mut app = app();
        app.take_dirty();

        // Nothing requested yet: no placeholders in flight, no pulse
        app.pulse();
        assert!(!app.pulse_phase);
        assert!(!app.take_dirty());

        app.resolve_visible();
        app.pulse();
        assert!(app.pulse_phase);
        assert!(app.take_dirty());
        app.pulse();
        assert!(!app.pulse_phase);

        app.cache.settle().await;
        app.take_dirty();
        app.pulse();
        assert!(!app.pulse_phase);
        assert!(!app.take_dirty());
    }
}
