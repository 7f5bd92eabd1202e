use glyphpick_core::Renderable;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{pulse_color, HIGHLIGHT, SECONDARY};
use crate::app::App;

/// Render the host preview; empty until something is picked
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(SECONDARY));

    let Some(preview) = app.host.preview() else {
        f.render_widget(block, area);
        return;
    };

    let renderable = app.cache.peek(preview.name, preview.size);
    let glyph_style = match renderable {
        Renderable::Placeholder(_) => Style::default().fg(pulse_color(app)),
        Renderable::Unknown(_) => Style::default().fg(Color::Red),
        Renderable::Glyph { .. } => Style::default().fg(HIGHLIGHT),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            preview.caption(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(
        renderable
            .rows()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, glyph_style))),
    );
    if let Some(reason) = app.cache.failure(preview.name) {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(SECONDARY),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
