//! Glyph data and its renderable forms
//!
//! A [`Glyph`] is the resolved drawing of one named icon: a single-cell
//! symbol for buttons plus optional multi-row art for the larger preview.
//! [`Renderable`] is what the resolver hands to renderers, either the real
//! glyph or a stand-in of the same size.

use std::sync::Arc;

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::error::{GlyphError, Result};

/// Placeholder fill while a glyph is loading
pub const PLACEHOLDER_CELL: char = '▒';

/// Symbol shown for glyphs whose load failed
pub const UNKNOWN_SYMBOL: &str = "?";

/// Render size in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphSize {
    pub width: u16,
    pub height: u16,
}

impl GlyphSize {
    /// Size of the glyph inside a grid button
    pub const BUTTON: GlyphSize = GlyphSize {
        width: 1,
        height: 1,
    };

    /// Fixed size of the selection preview
    pub const PREVIEW: GlyphSize = GlyphSize {
        width: 11,
        height: 5,
    };

    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Drawing instructions as they appear in a manifest entry or glyph file
#[derive(Debug, Clone, Deserialize)]
pub struct GlyphSpec {
    /// Single-cell symbol
    pub symbol: String,

    /// Optional rows of art for sizes larger than one cell
    #[serde(default)]
    pub art: Vec<String>,
}

/// A fully loaded glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub name: String,
    pub symbol: String,
    pub art: Vec<String>,
}

impl Glyph {
    /// Validate drawing instructions and build the glyph
    pub fn from_spec(name: &str, spec: GlyphSpec) -> Result<Self> {
        if spec.symbol.chars().count() != 1 || spec.symbol.width() != 1 {
            return Err(GlyphError::invalid_glyph(
                name,
                format!("symbol must be one single-cell character, got {:?}", spec.symbol),
            ));
        }

        let max = GlyphSize::PREVIEW;
        if spec.art.len() > max.height as usize {
            return Err(GlyphError::invalid_glyph(
                name,
                format!("art has {} rows, at most {} allowed", spec.art.len(), max.height),
            ));
        }
        if let Some(row) = spec
            .art
            .iter()
            .find(|row| row.width() > max.width as usize)
        {
            return Err(GlyphError::invalid_glyph(
                name,
                format!("art row {:?} is wider than {} cells", row, max.width),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            symbol: spec.symbol,
            art: spec.art,
        })
    }

    /// Draw the glyph into exactly `size.height` rows of `size.width` cells.
    ///
    /// Art is used when it fits the requested size, otherwise the symbol is
    /// centered.
    pub fn rows(&self, size: GlyphSize) -> Vec<String> {
        let fits = !self.art.is_empty()
            && self.art.len() <= size.height as usize
            && self
                .art
                .iter()
                .all(|row| row.width() <= size.width as usize);

        if fits {
            block_rows(&self.art, size)
        } else {
            block_rows(&[self.symbol.clone()], size)
        }
    }
}

/// What a renderer receives for a glyph name
#[derive(Debug, Clone)]
pub enum Renderable {
    /// Load in flight; a block of the requested size
    Placeholder(GlyphSize),
    /// Loaded glyph at the requested size
    Glyph { glyph: Arc<Glyph>, size: GlyphSize },
    /// Load failed or name not in the catalog
    Unknown(GlyphSize),
}

impl Renderable {
    pub fn size(&self) -> GlyphSize {
        match self {
            Renderable::Placeholder(size) | Renderable::Unknown(size) => *size,
            Renderable::Glyph { size, .. } => *size,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Renderable::Placeholder(_))
    }

    /// The loaded glyph, if any
    pub fn glyph(&self) -> Option<&Arc<Glyph>> {
        match self {
            Renderable::Glyph { glyph, .. } => Some(glyph),
            _ => None,
        }
    }

    /// Cell rows for this renderable at its size
    pub fn rows(&self) -> Vec<String> {
        match self {
            Renderable::Placeholder(size) => {
                let row: String = std::iter::repeat(PLACEHOLDER_CELL)
                    .take(size.width as usize)
                    .collect();
                vec![row; size.height as usize]
            }
            Renderable::Glyph { glyph, size } => glyph.rows(*size),
            Renderable::Unknown(size) => block_rows(&[UNKNOWN_SYMBOL.to_string()], *size),
        }
    }
}

/// Center `lines` inside a `size` block, padding with spaces
fn block_rows(lines: &[String], size: GlyphSize) -> Vec<String> {
    let height = size.height as usize;
    let width = size.width as usize;
    let top = height.saturating_sub(lines.len()) / 2;

    (0..height)
        .map(|row| {
            let line = row
                .checked_sub(top)
                .and_then(|idx| lines.get(idx))
                .map(String::as_str)
                .unwrap_or("");
            center(line, width)
        })
        .collect()
}

fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(symbol: &str, art: &[&str]) -> GlyphSpec {
        GlyphSpec {
            symbol: symbol.to_string(),
            art: art.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_spec_rejects_bad_symbol() {
        assert!(Glyph::from_spec("empty", spec("", &[])).is_err());
        assert!(Glyph::from_spec("two", spec("ab", &[])).is_err());
        assert!(Glyph::from_spec("ok", spec("★", &[])).is_ok());
    }

    #[test]
    fn test_from_spec_rejects_double_width_symbol() {
        let err = Glyph::from_spec("alarm", spec("⏰", &[])).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidGlyph { .. }));
        assert!(Glyph::from_spec("cjk", spec("漢", &[])).is_err());
    }

    #[test]
    fn test_art_width_counts_cells() {
        // Five double-width chars are 10 cells: fits
        assert!(Glyph::from_spec("ok", spec("x", &["漢漢漢漢漢"])).is_ok());
        // Six are 12 cells: too wide, though only 6 chars
        assert!(Glyph::from_spec("wide", spec("x", &["漢漢漢漢漢漢"])).is_err());
    }

    #[test]
    fn test_from_spec_rejects_oversized_art() {
        let wide = "x".repeat(GlyphSize::PREVIEW.width as usize + 1);
        assert!(Glyph::from_spec("wide", spec("x", &[wide.as_str()])).is_err());

        let tall = vec!["x"; GlyphSize::PREVIEW.height as usize + 1];
        assert!(Glyph::from_spec("tall", spec("x", &tall)).is_err());
    }

    #[test]
    fn test_button_rows_use_symbol() {
        let glyph = Glyph::from_spec("star", spec("★", &[" * ", "***", " * "])).unwrap();
        assert_eq!(glyph.rows(GlyphSize::BUTTON), vec!["★".to_string()]);
    }

    #[test]
    fn test_preview_rows_center_art() {
        let glyph = Glyph::from_spec("plus", spec("+", &[" | ", "-+-", " | "])).unwrap();
        let rows = glyph.rows(GlyphSize::new(5, 5));
        assert_eq!(
            rows,
            vec!["     ", "  |  ", " -+- ", "  |  ", "     "]
        );
    }

    #[test]
    fn test_placeholder_matches_requested_size() {
        let size = GlyphSize::new(4, 2);
        let rows = Renderable::Placeholder(size).rows();
        assert_eq!(rows, vec!["▒▒▒▒".to_string(), "▒▒▒▒".to_string()]);
    }

    #[test]
    fn test_unknown_renders_question_mark() {
        let rows = Renderable::Unknown(GlyphSize::new(3, 1)).rows();
        assert_eq!(rows, vec![" ? ".to_string()]);
    }
}
