pub mod glyph_grid;
pub mod hint_bar;
pub mod layout;
pub mod pagination_bar;
pub mod preview;
pub mod search_bar;
pub mod status_bar;

use glyphpick_core::PageControl;
use ratatui::{
    layout::{Position, Rect},
    style::Color,
    Frame,
};

use crate::app::App;

/// Primary accent color
pub const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
pub const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the selected glyph
pub const HIGHLIGHT: Color = Color::Yellow;
/// Placeholder shades, alternated by the pulse
pub const PULSE_DIM: Color = Color::DarkGray;
pub const PULSE_BRIGHT: Color = Color::Gray;

/// Placeholder color for the current pulse phase
pub fn pulse_color(app: &App) -> Color {
    if app.pulse_phase {
        PULSE_BRIGHT
    } else {
        PULSE_DIM
    }
}

/// Clickable thing drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Glyph button, by index into the page window
    Glyph(usize),
    /// Pagination control
    Control(PageControl),
    /// The search field
    Search,
}

/// Screen regions of the last frame, for mouse hit testing
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Topmost target under the given cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Main UI renderer
#[derive(Debug)]
pub struct UI {
    hits: HitMap,
    columns: usize,
}

impl UI {
    /// Create a new UI
    pub fn new() -> Self {
        Self {
            hits: HitMap::default(),
            columns: glyph_grid::MAX_COLUMNS,
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        self.hits.clear();

        let (status_area, search_area, content_area, hint_area) = layout::Layout::main(f.area());
        let (grid_column, preview_area) = layout::Layout::content(content_area);
        let (grid_area, pagination_area) = layout::Layout::grid(grid_column);

        status_bar::render(f, status_area, app);
        search_bar::render(f, search_area, app, &mut self.hits);
        self.columns = glyph_grid::render(f, grid_area, app, &mut self.hits);
        pagination_bar::render(f, pagination_area, app, &mut self.hits);
        preview::render(f, preview_area, app);
        hint_bar::render(f, hint_area, app);
    }

    /// Regions drawn in the last frame
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Glyph grid columns in the last frame
    pub fn grid_columns(&self) -> usize {
        self.columns
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{contains, draw};
    use super::*;
    use glyphpick_core::{GlyphRegistry, Manifest};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        let manifest = Manifest::builtin().unwrap();
        App::new(Arc::new(GlyphRegistry::from_manifest(&manifest, Duration::ZERO)))
    }

    #[test]
    fn test_hit_map_lookup() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 2), HitTarget::Search);
        hits.push(Rect::new(2, 1, 3, 1), HitTarget::Glyph(4));

        assert_eq!(hits.target_at(3, 1), Some(HitTarget::Glyph(4)));
        assert_eq!(hits.target_at(0, 0), Some(HitTarget::Search));
        assert_eq!(hits.target_at(20, 0), None);
    }

    #[test]
    fn test_full_frame() {
        let app = app();
        let mut ui = UI::new();
        let buffer = draw(&mut ui, &app, 100, 30);

        assert!(contains(&buffer, "Search icons..."));
        assert!(contains(&buffer, "BROWSE"));
        assert!(contains(&buffer, "Next ›"));
        assert!(!contains(&buffer, "Selected Icon:"));
        assert_eq!(ui.grid_columns(), 10);

        let glyphs = (0..40).filter(|i| ui.hits().regions.iter().any(|(_, t)| *t == HitTarget::Glyph(*i)));
        assert_eq!(glyphs.count(), 40);
    }

    #[test]
    fn test_frame_after_pick() {
        let mut app = app();
        app.set_search_term("house");
        app.click_focused();

        let mut ui = UI::new();
        let buffer = draw(&mut ui, &app, 100, 30);
        assert!(contains(&buffer, "Selected Icon: house"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app();
        let mut ui = UI::new();
        draw(&mut ui, &app, 12, 6);
        draw(&mut ui, &app, 1, 1);
    }
}
