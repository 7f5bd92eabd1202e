/// Structured error types for glyphpick-core.
///
/// Library consumers get `GlyphError`; the `glyphpick` binary wraps these in
/// `anyhow` with context at the call sites.

use std::io;
use thiserror::Error;

/// Main error type for glyphpick-core operations
#[derive(Error, Debug)]
pub enum GlyphError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// A glyph manifest (built-in or on disk) is not valid TOML
    #[error("Failed to parse glyph manifest {origin}: {source}")]
    ManifestParse {
        origin: String,
        source: toml::de::Error,
    },

    /// A manifest entry or glyph file has unusable drawing instructions
    #[error("Invalid glyph '{name}': {reason}")]
    InvalidGlyph { name: String, reason: String },

    /// Name is not part of the catalog
    #[error("Unknown glyph: {name}")]
    UnknownGlyph { name: String },

    /// Loader could not produce the glyph
    #[error("Failed to load glyph '{name}': {reason}")]
    LoadFailed { name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for glyphpick-core operations
pub type Result<T> = std::result::Result<T, GlyphError>;

impl GlyphError {
    /// Create a manifest parse error
    pub fn manifest_parse(origin: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ManifestParse {
            origin: origin.into(),
            source,
        }
    }

    /// Create an invalid glyph error
    pub fn invalid_glyph(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGlyph {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown glyph error
    pub fn unknown_glyph(name: impl Into<String>) -> Self {
        Self::UnknownGlyph { name: name.into() }
    }

    /// Create a load failure
    pub fn load_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GlyphError::invalid_glyph("house", "symbol is empty");
        assert_eq!(err.to_string(), "Invalid glyph 'house': symbol is empty");

        let err = GlyphError::unknown_glyph("no-such-icon");
        assert_eq!(err.to_string(), "Unknown glyph: no-such-icon");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let glyph_err: GlyphError = io_err.into();

        assert!(matches!(glyph_err, GlyphError::Io { .. }));
    }
}
