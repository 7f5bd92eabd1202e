use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::manifest::Manifest;
use crate::registry::GlyphRegistry;

/// User configuration, read from ~/.glyphpick/config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphpickConfig {
    /// Extra glyph pack: one `<name>.toml` file per glyph
    pub glyph_dir: Option<PathBuf>,

    /// Artificial latency added to every glyph load
    pub load_delay_ms: u64,

    /// Log destination for interactive sessions
    pub log_file: Option<PathBuf>,
}

impl GlyphpickConfig {
    /// Load the default config file; a missing file yields defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load an explicit config file; it must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config not found at {:?}", path);
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
    }

    /// Parse config text and expand `${VAR}` references in paths
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).context("Failed to parse config file (invalid TOML)")?;
        config.expand_variables();
        Ok(config)
    }

    /// Config directory: ~/.glyphpick
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".glyphpick")
    }

    /// Config file path: ~/.glyphpick/config.toml
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Where interactive sessions write their log
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("glyphpick.log"))
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Build the glyph registry: built-in manifest, then the glyph pack
    pub fn build_registry(&self) -> Result<GlyphRegistry> {
        let manifest = Manifest::builtin().context("Built-in glyph manifest is invalid")?;
        let mut registry = GlyphRegistry::from_manifest(&manifest, self.load_delay());

        if let Some(dir) = &self.glyph_dir {
            registry
                .add_glyph_dir(dir, self.load_delay())
                .context(format!("Failed to read glyph pack {:?}", dir))?;
        }

        Ok(registry)
    }

    fn expand_variables(&mut self) {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), env::var("HOME").unwrap_or_default());
        vars.insert(
            "GLYPHPICK_HOME".to_string(),
            Self::data_dir().display().to_string(),
        );

        if let Some(ref dir) = self.glyph_dir {
            self.glyph_dir = Some(Self::expand_path(dir, &vars));
        }
        if let Some(ref log_file) = self.log_file {
            self.log_file = Some(Self::expand_path(log_file, &vars));
        }
    }

    fn expand_path(path: &Path, vars: &HashMap<String, String>) -> PathBuf {
        PathBuf::from(Self::expand_string(&path.to_string_lossy(), vars))
    }

    fn expand_string(value: &str, vars: &HashMap<String, String>) -> String {
        let mut result = value.to_string();
        for (key, val) in vars {
            result = result.replace(&format!("${{{}}}", key), val);
        }
        result
    }
}
