//! Name -> loader registry
//!
//! Built once at startup from the manifest (and an optional glyph pack
//! directory), then shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::error::{GlyphError, Result};
use crate::loader::{FileLoader, GlyphLoader, ManifestLoader};
use crate::manifest::Manifest;

/// Ordered map from glyph name to its loader
#[derive(Debug, Default)]
pub struct GlyphRegistry {
    names: Vec<String>,
    loaders: HashMap<String, Arc<dyn GlyphLoader>>,
}

impl GlyphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with one [`ManifestLoader`] per manifest entry
    pub fn from_manifest(manifest: &Manifest, delay: Duration) -> Self {
        let mut registry = Self::new();
        for entry in manifest.entries() {
            let loader = ManifestLoader::new(entry.instructions.clone()).with_delay(delay);
            registry.insert(entry.name.clone(), Arc::new(loader));
        }
        registry
    }

    /// Register `loader` for `name`.
    ///
    /// New names are appended to the catalog. An existing name keeps its
    /// position and gets the new loader. Returns true when the name is new.
    pub fn insert(&mut self, name: impl Into<String>, loader: Arc<dyn GlyphLoader>) -> bool {
        let name = name.into();
        let is_new = !self.loaders.contains_key(&name);
        if is_new {
            self.names.push(name.clone());
        }
        self.loaders.insert(name, loader);
        is_new
    }

    /// Register every `<name>.toml` file directly inside `dir`.
    ///
    /// Files are added in name order so the catalog is stable across runs.
    /// Returns the number of files registered.
    pub fn add_glyph_dir(&mut self, dir: &Path, delay: Duration) -> Result<usize> {
        if !dir.is_dir() {
            return Err(GlyphError::config(format!(
                "glyph directory {} does not exist",
                dir.display()
            )));
        }

        let mut count = 0;
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| GlyphError::Io {
                source: e.into(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("toml")
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let replaced = !self.insert(name, Arc::new(FileLoader::new(path).with_delay(delay)));
            debug!(glyph = name, path = %path.display(), replaced, "registered glyph file");
            count += 1;
        }

        info!(dir = %dir.display(), count, "loaded glyph pack");
        Ok(count)
    }

    pub fn loader(&self, name: &str) -> Option<Arc<dyn GlyphLoader>> {
        self.loaders.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Snapshot of the registered names as a catalog
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.names.clone())
    }
}
