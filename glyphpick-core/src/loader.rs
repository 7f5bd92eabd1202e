//! Loader capabilities for glyph drawing instructions
//!
//! Every catalog name maps to one [`GlyphLoader`]. Loading is asynchronous
//! so that slow sources (large glyph packs on disk, an artificial delay)
//! never stall the UI loop.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{GlyphError, Result};
use crate::glyph::{Glyph, GlyphSpec};

/// Produces the glyph for one catalog name
#[async_trait]
pub trait GlyphLoader: Send + Sync + fmt::Debug {
    /// Load and validate the glyph called `name`
    async fn load(&self, name: &str) -> Result<Glyph>;

    /// Short description of where the glyph comes from (for logs)
    fn origin(&self) -> String;
}

/// Decodes instructions carried by a manifest entry
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    instructions: toml::Table,
    delay: Duration,
}

impl ManifestLoader {
    pub fn new(instructions: toml::Table) -> Self {
        Self {
            instructions,
            delay: Duration::ZERO,
        }
    }

    /// Add latency before each load
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl GlyphLoader for ManifestLoader {
    async fn load(&self, name: &str) -> Result<Glyph> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let spec: GlyphSpec = toml::Value::Table(self.instructions.clone())
            .try_into()
            .map_err(|e: toml::de::Error| GlyphError::invalid_glyph(name, e.message()))?;

        Glyph::from_spec(name, spec)
    }

    fn origin(&self) -> String {
        "manifest".to_string()
    }
}

/// Reads a `<name>.toml` file from a glyph pack directory
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    delay: Duration,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Add latency before each load
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GlyphLoader for FileLoader {
    async fn load(&self, name: &str) -> Result<Glyph> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| GlyphError::load_failed(name, format!("{}: {}", self.path.display(), e)))?;

        let spec: GlyphSpec = toml::from_str(&text)
            .map_err(|e| GlyphError::invalid_glyph(name, e.message()))?;

        Glyph::from_spec(name, spec)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}
