//! Glyph render cache and resolver
//!
//! `GlyphCache` is created once by the top-level app and passed by
//! reference to whatever draws glyphs. The first `resolve` of a name spawns
//! its loader on the tokio runtime and returns a placeholder. Finished
//! loads come back over a channel and are applied by the owner through
//! [`GlyphCache::poll_completed`], so the entry map is only touched from the
//! thread that owns the cache.
//!
//! Entries are written once per name and never evicted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::glyph::{Glyph, GlyphSize, Renderable};
use crate::registry::GlyphRegistry;

#[derive(Debug)]
enum Entry {
    Loading,
    Ready(Arc<Glyph>),
    Failed(String),
}

#[derive(Debug)]
struct LoadOutcome {
    name: String,
    result: Result<Glyph>,
}

/// Lazily populated name -> glyph cache
#[derive(Debug)]
pub struct GlyphCache {
    registry: Arc<GlyphRegistry>,
    entries: HashMap<String, Entry>,
    tx: mpsc::UnboundedSender<LoadOutcome>,
    rx: mpsc::UnboundedReceiver<LoadOutcome>,
    pending: usize,
    loads_started: usize,
}

impl GlyphCache {
    pub fn new(registry: Arc<GlyphRegistry>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            registry,
            entries: HashMap::new(),
            tx,
            rx,
            pending: 0,
            loads_started: 0,
        }
    }

    pub fn registry(&self) -> &Arc<GlyphRegistry> {
        &self.registry
    }

    /// Renderable for `name` at `size`, starting a load on first request.
    ///
    /// Must be called from within a tokio runtime for the load to start;
    /// without one the glyph resolves as unknown.
    pub fn resolve(&mut self, name: &str, size: GlyphSize) -> Renderable {
        if let Some(renderable) = self.lookup(name, size) {
            return renderable;
        }
        self.start_load(name);
        self.lookup(name, size)
            .unwrap_or(Renderable::Placeholder(size))
    }

    /// Renderable for `name` without ever starting a load.
    ///
    /// Used for static output; names that were never resolved show the
    /// placeholder.
    pub fn peek(&self, name: &str, size: GlyphSize) -> Renderable {
        self.lookup(name, size)
            .unwrap_or(Renderable::Placeholder(size))
    }

    /// Apply every finished load without waiting. Returns how many landed.
    pub fn poll_completed(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next load to finish and apply it.
    ///
    /// Returns the glyph name, or `None` when nothing is in flight.
    pub async fn next_completed(&mut self) -> Option<String> {
        if self.pending == 0 {
            return None;
        }
        let outcome = self.rx.recv().await?;
        let name = outcome.name.clone();
        self.apply(outcome);
        Some(name)
    }

    /// Wait until every in-flight load has been applied
    pub async fn settle(&mut self) {
        while self.next_completed().await.is_some() {}
    }

    /// Resolve `name` and wait for its load to finish
    pub async fn resolve_settled(&mut self, name: &str, size: GlyphSize) -> Renderable {
        self.resolve(name, size);
        while self.is_loading(name) {
            if self.next_completed().await.is_none() {
                break;
            }
        }
        self.peek(name, size)
    }

    pub fn is_loading(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Entry::Loading))
    }

    /// Why `name` resolves as unknown, if it does
    pub fn failure(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(Entry::Failed(reason)) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Loads currently in flight
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Loads started since creation
    pub fn loads_started(&self) -> usize {
        self.loads_started
    }

    /// Names with an entry (loading, ready or failed)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, name: &str, size: GlyphSize) -> Option<Renderable> {
        self.entries.get(name).map(|entry| match entry {
            Entry::Loading => Renderable::Placeholder(size),
            Entry::Ready(glyph) => Renderable::Glyph {
                glyph: Arc::clone(glyph),
                size,
            },
            Entry::Failed(_) => Renderable::Unknown(size),
        })
    }

    fn start_load(&mut self, name: &str) {
        let Some(loader) = self.registry.loader(name) else {
            warn!(glyph = name, "glyph is not in the catalog");
            self.entries
                .insert(name.to_string(), Entry::Failed("not in catalog".to_string()));
            return;
        };

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                warn!(glyph = name, error = %err, "no runtime to load glyph on");
                self.entries
                    .insert(name.to_string(), Entry::Failed(err.to_string()));
                return;
            }
        };

        debug!(glyph = name, origin = %loader.origin(), "loading glyph");
        self.entries.insert(name.to_string(), Entry::Loading);
        self.pending += 1;
        self.loads_started += 1;

        let tx = self.tx.clone();
        let name = name.to_string();
        handle.spawn(async move {
            let result = loader.load(&name).await;
            // Send only fails once the cache itself is gone
            let _ = tx.send(LoadOutcome { name, result });
        });
    }

    fn apply(&mut self, outcome: LoadOutcome) {
        self.pending = self.pending.saturating_sub(1);
        let entry = match outcome.result {
            Ok(glyph) => {
                debug!(glyph = %outcome.name, "glyph loaded");
                Entry::Ready(Arc::new(glyph))
            }
            Err(err) => {
                warn!(glyph = %outcome.name, error = %err, "glyph load failed");
                Entry::Failed(err.to_string())
            }
        };
        self.entries.insert(outcome.name, entry);
    }
}
