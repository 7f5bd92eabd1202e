/// Input modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Move over the glyph grid, page, pick
    #[default]
    Browse,

    /// Typing into the search field
    Search,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Browse => "BROWSE",
            AppMode::Search => "SEARCH",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Browse => Color::Cyan,
            AppMode::Search => Color::Yellow,
        }
    }

    /// Key hints for the bottom bar
    pub fn hints(&self) -> &'static str {
        match self {
            AppMode::Browse => {
                "/: search | arrows: move | Enter: pick | [ ]: page | Home/End: first/last | q: quit"
            }
            AppMode::Search => "type to filter | Enter/Esc: back to grid | Ctrl-u: clear",
        }
    }
}
