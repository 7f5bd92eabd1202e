use glyphpick_core::{GlyphSize, Renderable};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{pulse_color, HitMap, HitTarget, ACCENT, HIGHLIGHT, SECONDARY};
use crate::app::App;
use crate::mode::AppMode;

/// Cells per glyph button: "[ x ]"
pub const BUTTON_WIDTH: u16 = 5;
/// Lines per grid row (button + gap)
pub const ROW_HEIGHT: u16 = 2;
/// Widest grid
pub const MAX_COLUMNS: usize = 10;

/// Grid columns for a given inner width: 10, 8 or 4 buttons, fewer only
/// when not even four fit.
pub fn columns_for(width: u16) -> usize {
    let fit = (width / BUTTON_WIDTH) as usize;
    match fit {
        f if f >= MAX_COLUMNS => MAX_COLUMNS,
        f if f >= 8 => 8,
        f if f >= 4 => 4,
        f => f.max(1),
    }
}

/// Render the glyph buttons of the current page; returns the column count
pub fn render(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) -> usize {
    let matches = app.panel.filtered_view().len();
    let border_color = if app.mode == AppMode::Browse {
        app.mode.color()
    } else {
        SECONDARY
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Icons ({}) ", matches))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = columns_for(inner.width);
    let buttons = app.panel.buttons();

    if buttons.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("No icons match \"{}\"", app.panel.search_term()),
            Style::default().fg(SECONDARY),
        )))
        .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return columns;
    }

    let rows_needed = buttons.len().div_ceil(columns);
    let row_height = if rows_needed * ROW_HEIGHT as usize <= inner.height as usize {
        ROW_HEIGHT
    } else {
        1
    };
    let rows_fit = (inner.height / row_height) as usize;

    // Too short even when packed: keep the cursor row on screen and give
    // the last line to a marker for the hidden buttons
    let (first_row, shown_rows) = if rows_needed > rows_fit {
        let shown_rows = rows_fit.saturating_sub(1);
        let cursor_row = app.cursor / columns;
        (cursor_row.saturating_sub(shown_rows.saturating_sub(1)), shown_rows)
    } else {
        (0, rows_needed)
    };

    let mut drawn = 0;
    for (index, button) in buttons.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + shown_rows {
            continue;
        }
        let col = (index % columns) as u16;
        let x = inner.x + col * BUTTON_WIDTH;
        let y = inner.y + (row - first_row) as u16 * row_height;
        if x + BUTTON_WIDTH > inner.right() {
            continue;
        }
        let rect = Rect::new(x, y, BUTTON_WIDTH, 1);

        let renderable = app.cache.peek(button.name, GlyphSize::BUTTON);
        let focused = index == app.cursor && app.mode == AppMode::Browse;
        f.render_widget(
            Paragraph::new(button_line(&renderable, button.selected, focused, app)),
            rect,
        );
        hits.push(rect, HitTarget::Glyph(index));
        drawn += 1;
    }

    let hidden = buttons.len() - drawn;
    if hidden > 0 && rows_fit > 0 {
        let y = inner.y + (rows_fit - 1) as u16 * row_height;
        let marker = Paragraph::new(Span::styled(
            format!("+{} more", hidden),
            Style::default().fg(SECONDARY),
        ));
        f.render_widget(marker, Rect::new(inner.x, y, inner.width, 1));
    }

    columns
}

/// One button: brackets plus the glyph cell
fn button_line(
    renderable: &Renderable,
    selected: bool,
    focused: bool,
    app: &App,
) -> Line<'static> {
    let mut bracket = if selected {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SECONDARY)
    };

    let mut symbol = match renderable {
        Renderable::Placeholder(_) => Style::default().fg(pulse_color(app)),
        Renderable::Unknown(_) => Style::default().fg(Color::Red),
        Renderable::Glyph { .. } if selected => {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        }
        Renderable::Glyph { .. } => Style::default().fg(Color::White),
    };

    if focused {
        bracket = bracket.fg(ACCENT).add_modifier(Modifier::REVERSED);
        symbol = symbol.add_modifier(Modifier::REVERSED);
    }

    let cell = renderable.rows().into_iter().next().unwrap_or_default();
    Line::from(vec![
        Span::styled("[ ", bracket),
        Span::styled(cell, symbol),
        Span::styled(" ]", bracket),
    ])
}
