//! Rolefolio CLI - render role-scoped profile pages from fixtures
//!
//! This CLI lets developers check what a profile page would show:
//! - Render a subject's page for an anonymous or signed-in viewer
//! - Inspect the tab map for every role
//! - Print the effective configuration

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use commands::render::{settle_page, RenderArgs, RenderedPage};
pub use commands::tabs::{tab_map, RoleTabs};
pub use config::{load_config, load_document};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Rolefolio CLI application
#[derive(Parser)]
#[command(name = "rolefolio")]
#[command(about = "Rolefolio - role-scoped profile viewer CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "ROLEFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Render a profile page
    Render(RenderArgs),

    /// Show the tabs offered for each role
    Tabs,

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing; a second run in the same process keeps the first subscriber
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => commands::render::execute(args, &config, cli.output).await,
        Commands::Tabs => commands::tabs::execute(cli.output),
        Commands::Config => show_config(&config, cli.output),
    }
}

fn show_config(config: &rolefolio_types::LensConfig, format: OutputFormat) -> CliResult<()> {
    if output::print_structured(config, format)? {
        return Ok(());
    }
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::Config(e.to_string()))?;
    output::print_heading("Rolefolio configuration");
    println!("{rendered}");
    Ok(())
}
