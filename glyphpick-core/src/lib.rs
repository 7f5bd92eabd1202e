pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod glyph;
pub mod host;
pub mod loader;
pub mod manifest;
pub mod pagination;
pub mod registry;
pub mod selector;

pub use cache::GlyphCache;
pub use catalog::Catalog;
pub use config::GlyphpickConfig;
pub use error::{GlyphError, Result};
pub use glyph::{Glyph, GlyphSize, GlyphSpec, Renderable};
pub use host::{HostPage, Preview};
pub use loader::{FileLoader, GlyphLoader, ManifestLoader};
pub use manifest::{Manifest, ManifestEntry};
pub use pagination::{page_controls, total_pages, PageControl, PAGE_SIZE};
pub use registry::GlyphRegistry;
pub use selector::{GlyphButton, SelectionSink, SelectorPanel};
