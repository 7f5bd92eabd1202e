//! Glyph manifests
//!
//! A manifest lists glyph names in catalog order together with the raw,
//! not yet validated drawing instructions for each one. Only the names are
//! inspected at startup; the instructions are decoded by a loader the first
//! time a glyph is resolved.
//!
//! ```toml
//! [[glyph]]
//! name = "house"
//! symbol = "⌂"
//! art = ["  /\\  ", " /  \\ ", " |[]| "]
//! ```

use serde::Deserialize;
use tracing::warn;

use crate::error::{GlyphError, Result};

/// Manifest shipped with the binary
const BUILTIN_MANIFEST: &str = include_str!("../assets/glyphs.toml");

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    glyph: Vec<toml::Table>,
}

/// One named entry with its undecoded drawing instructions
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub name: String,
    pub instructions: toml::Table,
}

/// Ordered list of glyph entries
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// The manifest compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse("built-in", BUILTIN_MANIFEST)
    }

    /// Parse manifest text. `origin` only feeds error messages.
    ///
    /// Duplicate names keep their first position and drawing; later
    /// duplicates are dropped with a warning.
    pub fn parse(origin: &str, text: &str) -> Result<Self> {
        let raw: RawManifest =
            toml::from_str(text).map_err(|e| GlyphError::manifest_parse(origin, e))?;

        let mut entries: Vec<ManifestEntry> = Vec::with_capacity(raw.glyph.len());
        for (index, mut table) in raw.glyph.into_iter().enumerate() {
            let name = match table.remove("name") {
                Some(toml::Value::String(name)) if !name.is_empty() => name,
                _ => {
                    return Err(GlyphError::invalid_glyph(
                        format!("#{}", index),
                        format!("entry in {} manifest has no name", origin),
                    ))
                }
            };

            if entries.iter().any(|e| e.name == name) {
                warn!(glyph = %name, origin, "duplicate glyph name in manifest, keeping first");
                continue;
            }

            entries.push(ManifestEntry {
                name,
                instructions: table,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
