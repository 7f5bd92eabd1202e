//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use glyphpick_core::GlyphRegistry;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::app::App;
use crate::event::{handle_key, handle_mouse, poll_event, HandleResult};
use crate::ui::UI;

/// Input poll timeout; also bounds how late a finished load is drawn
const TICK: Duration = Duration::from_millis(50);
/// Placeholder pulse period
const PULSE: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the interactive picker; returns the name picked last, if any.
///
/// Must be called inside a tokio runtime: glyph loads are spawned on it.
pub fn run(registry: Arc<GlyphRegistry>) -> Result<Option<String>> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(registry);
    info!(glyphs = app.panel.catalog().len(), "picker started");

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result.map(|()| app.selected().map(str::to_string))
}

/// Main event loop
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut ui = UI::new();
    let mut last_pulse = Instant::now();

    loop {
        app.poll_loads();
        app.resolve_visible();

        if app.take_dirty() {
            terminal.draw(|frame| ui.render(frame, app))?;
        }

        if let Some(event) = poll_event(TICK)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.status_message = None;
                    app.mark_dirty();
                    if handle_key(app, key, ui.grid_columns()) == HandleResult::Quit {
                        app.should_quit = true;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse, ui.hits()),
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }

        if last_pulse.elapsed() >= PULSE {
            app.pulse();
            last_pulse = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
