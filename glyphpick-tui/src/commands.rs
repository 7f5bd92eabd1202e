//! Non-interactive subcommands: page listing and glyph display

use glyphpick_core::{
    page_controls, Catalog, GlyphCache, GlyphError, GlyphSize, PageControl, Renderable,
    SelectorPanel,
};
use serde::Serialize;

/// One page of a search, as printed by `glyphpick list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    pub search: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub glyphs: Vec<String>,
    pub controls: Vec<ControlView>,
}

/// Serializable form of a pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub kind: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    pub active: bool,
    pub enabled: bool,
}

impl From<PageControl> for ControlView {
    fn from(control: PageControl) -> Self {
        let (kind, active, enabled) = match control {
            PageControl::Previous { enabled, .. } => ("previous", false, enabled),
            PageControl::Page { active, .. } => ("page", active, true),
            PageControl::Ellipsis => ("ellipsis", false, false),
            PageControl::Next { enabled, .. } => ("next", false, enabled),
        };
        Self {
            kind,
            label: control.label(),
            target: control.target(),
            active,
            enabled,
        }
    }
}

/// Filter `catalog` by `search` and cut out `page` (clamped to the valid range)
pub fn list_page(catalog: Catalog, search: &str, page: usize) -> ListReport {
    let mut panel = SelectorPanel::new(catalog);
    panel.set_search_term(search);
    let page = panel.set_page(page);

    let total_pages = panel.total_pages();
    ListReport {
        search: search.to_string(),
        page,
        total_pages,
        total_matches: panel.filtered_view().len(),
        glyphs: panel.page_window().into_iter().map(str::to_string).collect(),
        controls: page_controls(page, total_pages)
            .into_iter()
            .map(ControlView::from)
            .collect(),
    }
}

/// Plain-text rendering of a [`ListReport`]
pub fn render_list_text(report: &ListReport) -> String {
    let mut out = String::new();
    if report.glyphs.is_empty() {
        out.push_str(&format!("No icons match \"{}\"\n", report.search));
    }
    for name in &report.glyphs {
        out.push_str(name);
        out.push('\n');
    }

    let row: Vec<String> = report
        .controls
        .iter()
        .map(|c| if c.active { format!("[{}]", c.label) } else { c.label.clone() })
        .collect();
    out.push_str(&format!(
        "\n{} matches, page {}/{}\n{}\n",
        report.total_matches,
        report.page,
        report.total_pages,
        row.join("  ")
    ));
    out
}

/// Load `name` through `cache` and draw it as the host preview would
pub async fn show_glyph(cache: &mut GlyphCache, name: &str) -> Result<String, GlyphError> {
    if !cache.registry().contains(name) {
        return Err(GlyphError::unknown_glyph(name));
    }

    let renderable = cache.resolve_settled(name, GlyphSize::PREVIEW).await;
    if let Renderable::Unknown(_) = renderable {
        let reason = cache.failure(name).unwrap_or("load did not finish");
        return Err(GlyphError::load_failed(name, reason));
    }

    let mut out = format!("Selected Icon: {}\n\n", name);
    for row in renderable.rows() {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphpick_core::{GlyphRegistry, Manifest, ManifestLoader};
    use std::sync::Arc;
    use std::time::Duration;

    fn numbered(count: usize) -> Catalog {
        (0..count).map(|i| format!("glyph-{:03}", i)).collect()
    }

    #[test]
    fn test_list_second_page() {
        let report = list_page(numbered(85), "", 2);
        assert_eq!(report.page, 2);
        assert_eq!(report.total_pages, 3);
        assert_eq!(report.total_matches, 85);
        assert_eq!(report.glyphs.len(), 40);
        assert_eq!(report.glyphs[0], "glyph-040");
        assert_eq!(report.glyphs[39], "glyph-079");
    }

    #[test]
    fn test_list_clamps_page() {
        let report = list_page(numbered(85), "", 99);
        assert_eq!(report.page, 3);
        assert_eq!(report.glyphs.len(), 5);

        let report = list_page(numbered(85), "", 0);
        assert_eq!(report.page, 1);
    }

    #[test]
    fn test_list_controls_view() {
        let report = list_page(numbered(85), "", 1);
        let first = &report.controls[0];
        assert_eq!(first.kind, "previous");
        assert!(!first.enabled);
        assert_eq!(first.target, None);

        let active: Vec<_> = report.controls.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "1");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["controls"][0]["kind"], "previous");
        assert!(json["controls"][0].get("target").is_none());
    }

    #[test]
    fn test_text_listing() {
        let report = list_page(numbered(85), "glyph-08", 1);
        let text = render_list_text(&report);
        assert!(text.contains("glyph-080\n"));
        assert!(text.contains("5 matches, page 1/1"));
        assert!(text.contains("[1]"));

        let empty = render_list_text(&list_page(numbered(3), "zzz", 1));
        assert!(empty.contains("No icons match \"zzz\""));
    }

    #[tokio::test]
    async fn test_show_builtin_glyph() {
        let manifest = Manifest::builtin().unwrap();
        let registry = GlyphRegistry::from_manifest(&manifest, Duration::ZERO);
        let mut cache = GlyphCache::new(Arc::new(registry));

        let out = show_glyph(&mut cache, "house").await.unwrap();
        assert!(out.starts_with("Selected Icon: house\n"));
        assert!(out.contains("/\\"));
    }

    #[tokio::test]
    async fn test_show_errors() {
        let mut broken = toml::Table::new();
        broken.insert("symbol".into(), toml::Value::String("too long".into()));
        let mut registry = GlyphRegistry::new();
        registry.insert("broken", Arc::new(ManifestLoader::new(broken)));
        let mut cache = GlyphCache::new(Arc::new(registry));

        let err = show_glyph(&mut cache, "missing").await.unwrap_err();
        assert!(matches!(err, GlyphError::UnknownGlyph { .. }));

        let err = show_glyph(&mut cache, "broken").await.unwrap_err();
        assert!(matches!(err, GlyphError::LoadFailed { .. }));
    }
}
