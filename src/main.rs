//! Midshift dashboard - CLI entry point
//!
//! Launches the terminal dashboard, prints a summary of one view, or
//! manages the configuration file.

use clap::{Parser, Subcommand};
use midshift_dashboard::{
    config::{default, loader::ConfigLoader, schema::Config, xdg},
    dashboard::{DashboardView, Palette},
    dataset::loader::DatasetLoader,
    logging::{self, LogTarget},
    summary::{self, OutputFormat},
    tui::app::App,
    AppError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Midshift MPL dashboard
#[derive(Parser)]
#[command(name = "midshift")]
#[command(version, about = "Monthly log dashboard for the Midshift roster")]
struct Cli {
    /// Configuration file (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the midshift CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Dataset file (overrides `data.path`; built-in data when neither is set)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Print the totals and best/worst months of one view
    Summary {
        /// Dataset file (overrides `data.path`; built-in data when neither is set)
        #[arg(long)]
        data: Option<PathBuf>,
        /// View to print: dashboard, a roster name or first name, or special
        #[arg(long, default_value = "dashboard")]
        view: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Tui { data } => run_tui(config_path, data.as_deref()),
        Commands::Summary { data, view, format } => {
            run_summary(config_path, data.as_deref(), &view, format)
        }
        Commands::Config { action } => run_config_command(config_path, action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads config, starts logging, and builds the view over the chosen dataset.
///
/// `owns_terminal` keeps log lines off stderr while the TUI draws.
fn prepare(
    config_path: Option<&Path>,
    data: Option<&Path>,
    owns_terminal: bool,
) -> Result<(Config, DashboardView), AppError> {
    let config = ConfigLoader::load(config_path)?;
    let target = LogTarget::select(config.logging.file().as_deref(), owns_terminal);
    logging::init(&config.logging.level, &target)?;

    let data_path = data.map(Path::to_path_buf).or_else(|| config.data.path());
    let dataset = DatasetLoader::load_or_builtin(data_path.as_deref())?;
    let palette = Palette::from_strs(&config.tui.palette)?;
    tracing::info!(
        "loaded {} people over {} months",
        dataset.roster().len(),
        dataset.months().len()
    );
    Ok((config, DashboardView::new(dataset, palette)))
}

fn run_tui(config_path: Option<&Path>, data: Option<&Path>) -> Result<(), AppError> {
    let (config, view) = prepare(config_path, data, true)?;
    let tick_rate = config.tui.tick_rate()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut app = App::new(view, tick_rate);
        app.run().await
    })?;
    Ok(())
}

fn run_summary(
    config_path: Option<&Path>,
    data: Option<&Path>,
    view_name: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_, mut view) = prepare(config_path, data, false)?;
    let selection = view.resolve(view_name)?;
    view.select(selection)?;
    print!("{}", summary::render(&view, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn run_config_command(config_path: Option<&Path>, action: ConfigAction) -> Result<(), AppError> {
    match action {
        ConfigAction::Init { force } => {
            let path = match config_path {
                Some(path) => {
                    default::create_default_config_at(path, force)?;
                    path.to_path_buf()
                }
                None => default::create_default_config(force)?,
            };
            println!("Created configuration at {}", path.display());
        }
        ConfigAction::Path => {
            let path = config_path.map_or_else(xdg::config_path, Path::to_path_buf);
            println!("{}", path.display());
        }
        ConfigAction::Validate => {
            let config = ConfigLoader::load(config_path)?;
            config.tui.tick_rate()?;
            Palette::from_strs(&config.tui.palette)?;
            println!("Configuration is valid");
            println!("{config:#?}");
        }
    }
    Ok(())
}
