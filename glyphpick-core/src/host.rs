//! Host page: owns the confirmed selection

use crate::glyph::GlyphSize;
use crate::selector::SelectionSink;

/// Top-level owner of the selected glyph name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPage {
    selected: Option<String>,
}

/// What the host shows once something is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    pub name: &'a str,
    pub size: GlyphSize,
}

impl Preview<'_> {
    /// Confirmation line shown above the preview glyph
    pub fn caption(&self) -> String {
        format!("Selected Icon: {}", self.name)
    }
}

impl HostPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Preview for the current selection; nothing until a glyph is picked
    pub fn preview(&self) -> Option<Preview<'_>> {
        self.selected.as_deref().map(|name| Preview {
            name,
            size: GlyphSize::PREVIEW,
        })
    }
}

impl SelectionSink for HostPage {
    fn on_select_icon(&mut self, name: &str) {
        self.selected = Some(name.to_string());
    }
}
