use glyphpick_core::PageControl;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{HitMap, HitTarget, ACCENT, SECONDARY};
use crate::app::App;

const GAP: u16 = 1;

/// Render the page control row, centered under the grid
pub fn render(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let controls = app.panel.page_controls();

    let mut spans = Vec::with_capacity(controls.len() * 2);
    let mut placed = Vec::with_capacity(controls.len());
    let mut offset: u16 = 0;
    for control in &controls {
        if !spans.is_empty() {
            spans.push(Span::raw(" ".repeat(GAP as usize)));
            offset = offset.saturating_add(GAP);
        }
        let span = Span::styled(format!(" {} ", control.label()), style_for(control));
        let width = span.width() as u16;
        placed.push((offset, width, *control));
        offset = offset.saturating_add(width);
        spans.push(span);
    }

    let left = area.x + area.width.saturating_sub(offset) / 2;
    let row = Rect::new(left, area.y, offset.min(area.width), area.height.min(1));
    f.render_widget(Paragraph::new(Line::from(spans)), row);

    for (start, width, control) in placed {
        if control.target().is_none() || start >= row.width {
            continue;
        }
        let width = width.min(row.width - start);
        hits.push(Rect::new(row.x + start, row.y, width, row.height), HitTarget::Control(control));
    }
}

fn style_for(control: &PageControl) -> Style {
    match *control {
        PageControl::Page { active: true, .. } => Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        PageControl::Page { .. } => Style::default().fg(Color::White),
        PageControl::Previous { enabled, .. } | PageControl::Next { enabled, .. } if enabled => {
            Style::default().fg(ACCENT)
        }
        _ => Style::default().fg(SECONDARY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{contains, draw};
    use crate::ui::UI;
    use glyphpick_core::{GlyphRegistry, Manifest};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        let manifest = Manifest::builtin().unwrap();
        App::new(Arc::new(GlyphRegistry::from_manifest(&manifest, Duration::ZERO)))
    }

    fn control_targets(ui: &UI) -> Vec<PageControl> {
        ui.hits()
            .regions
            .iter()
            .filter_map(|(_, target)| match target {
                HitTarget::Control(control) => Some(*control),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_inert_previous_has_no_hit_region() {
        let app = app();
        let mut ui = UI::new();
        let buffer = draw(&mut ui, &app, 100, 30);

        assert!(contains(&buffer, "‹ Previous"));
        let controls = control_targets(&ui);
        assert!(!controls
            .iter()
            .any(|c| matches!(c, PageControl::Previous { .. })));
        assert!(controls.iter().any(|c| matches!(c, PageControl::Next { enabled: true, .. })));
    }

    #[test]
    fn test_clicking_page_region_changes_page() {
        let mut app = app();
        let mut ui = UI::new();
        draw(&mut ui, &app, 100, 30);

        let (area, target) = ui
            .hits()
            .regions
            .iter()
            .find(|(_, t)| *t == HitTarget::Control(PageControl::Page { number: 2, active: false }))
            .copied()
            .expect("page 2 control");
        assert_eq!(ui.hits().target_at(area.x, area.y), Some(target));

        if let HitTarget::Control(control) = target {
            app.activate(control);
        }
        assert_eq!(app.panel.current_page(), 2);
    }
}
