use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{HitMap, HitTarget, SECONDARY};
use crate::app::App;
use crate::mode::AppMode;

pub const PLACEHOLDER: &str = "Search icons...";

/// Render the search field
pub fn render(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let searching = app.mode == AppMode::Search;
    let term = app.panel.search_term();

    let border_color = if searching { app.mode.color() } else { SECONDARY };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    let content = if searching {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Yellow)),
            Span::raw(term),
            Span::styled("_", Style::default().fg(Color::Green)), // Cursor
        ])
    } else if term.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(SECONDARY)),
            Span::raw(term),
        ])
    };

    f.render_widget(Paragraph::new(content).block(block), area);
    hits.push(area, HitTarget::Search);
}
