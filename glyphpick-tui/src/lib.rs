//! glyphpick terminal front end
//!
//! Interactive glyph picker built on ratatui, plus the scripted
//! `list`/`show` subcommands used by the `glyphpick` binary.

pub mod app;
pub mod commands;
pub mod event;
pub mod mode;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;

pub use app::App;
pub use commands::{list_page, render_list_text, show_glyph, ControlView, ListReport};
pub use mode::AppMode;
pub use terminal::run;
pub use tracing_setup::TracingConfig;
