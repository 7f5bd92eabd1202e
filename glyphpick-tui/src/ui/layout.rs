use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, search field, content area
    /// and hint bar
    ///
    /// Returns: (status_area, search_area, content_area, hint_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Length(3), // Search field
                Constraint::Min(0),    // Grid + preview
                Constraint::Length(1), // Hint bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Split content into the glyph column (left) and preview (right)
    ///
    /// Returns: (grid_column, preview_area)
    pub fn content(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(70), // Glyph grid + pagination
                Constraint::Percentage(30), // Preview
            ])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Split the glyph column into the grid and the pagination row
    ///
    /// Returns: (grid_area, pagination_area)
    pub fn grid(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Grid
                Constraint::Length(1), // Pagination
            ])
            .split(area);

        (chunks[0], chunks[1])
    }
}
