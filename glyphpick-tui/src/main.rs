//! glyphpick - terminal icon picker
//!
//! Without a subcommand the interactive picker opens; the name picked last
//! is printed on exit. `list` and `show` give the same search, paging and
//! preview without a terminal UI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use glyphpick_core::{GlyphCache, GlyphpickConfig};
use glyphpick_tui::{commands, terminal, tracing_setup, TracingConfig};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "glyphpick",
    author,
    version,
    about = "Searchable, paginated icon picker for the terminal"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.glyphpick/config.toml)
    #[arg(long, global = true, env = "GLYPHPICK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive picker (default)
    Pick,

    /// Print one page of icon names matching a search
    List(ListArgs),

    /// Load one icon and print its preview
    Show {
        /// Icon name
        name: String,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive substring filter
    #[arg(long, short, default_value = "")]
    search: String,

    /// Page number, starting at 1
    #[arg(long, short, default_value_t = 1)]
    page: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GlyphpickConfig::load_from(path)?,
        None => GlyphpickConfig::load()?,
    };

    let interactive = matches!(cli.command, None | Some(Commands::Pick));
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        log_file: interactive.then(|| config.log_file_path()),
    })?;
    debug!(?config, "configuration loaded");

    match cli.command {
        None | Some(Commands::Pick) => run_picker(&config)?,
        Some(Commands::List(args)) => run_list(&config, args)?,
        Some(Commands::Show { name }) => run_show(&config, &name).await?,
        Some(Commands::Config { command }) => run_config(&cli.config, &config, command)?,
    }

    Ok(())
}

fn run_picker(config: &GlyphpickConfig) -> Result<()> {
    let registry = Arc::new(config.build_registry()?);
    info!(glyphs = registry.len(), "registry built");

    if let Some(name) = terminal::run(registry)? {
        println!("{}", name);
    }
    Ok(())
}

fn run_list(config: &GlyphpickConfig, args: ListArgs) -> Result<()> {
    let registry = config.build_registry()?;
    let report = commands::list_page(registry.catalog(), &args.search, args.page);

    match args.format {
        OutputFormat::Text => print!("{}", commands::render_list_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize listing")?
        ),
    }
    Ok(())
}

async fn run_show(config: &GlyphpickConfig, name: &str) -> Result<()> {
    let registry = Arc::new(config.build_registry()?);
    let mut cache = GlyphCache::new(registry);
    let out = commands::show_glyph(&mut cache, name).await?;
    print!("{}", out);
    Ok(())
}

fn run_config(
    explicit: &Option<PathBuf>,
    config: &GlyphpickConfig,
    command: ConfigCommands,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            let path = explicit
                .clone()
                .unwrap_or_else(GlyphpickConfig::config_path);
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
            print!("{}", text);
        }
    }
    Ok(())
}
