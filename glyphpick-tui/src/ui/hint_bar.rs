use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the hint bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
        spans.push(Span::raw("  "));
    } else if app.mode == AppMode::Browse {
        if let Some(name) = app.focused_name() {
            spans.push(Span::styled(
                format!("▸ {}", name),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw("  "));
        }
    }

    spans.push(Span::styled(
        app.mode.hints(),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
