//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use staffquery_core::render;
use staffquery_core::{ReportPlan, load_roster, run_report};
use staffquery_shared::{AppConfig, OutputFormat, RunSettings, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// StaffQuery — filter, sort, group and aggregate an employee roster.
#[derive(Parser)]
#[command(
    name = "staffquery",
    version,
    about = "Run the employee query report over a roster.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run every query and print the results.
    Report {
        /// JSON roster file (defaults to the configured roster, then the built-in sample).
        #[arg(short, long, env = "STAFFQUERY_ROSTER")]
        roster: Option<PathBuf>,

        /// Output format: text or json (defaults to the configured format).
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print the roster being queried.
    Roster {
        /// JSON roster file (defaults to the configured roster, then the built-in sample).
        #[arg(short, long, env = "STAFFQUERY_ROSTER")]
        roster: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout carries only results.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "staffquery=info",
        1 => "staffquery=debug",
        _ => "staffquery=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report { roster, format } => cmd_report(roster, format),
        Command::Roster { roster } => cmd_roster(roster),
        Command::Config { action } => match action {
            ConfigAction::Init { force } => cmd_config_init(force),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Merge config file values with CLI overrides.
fn resolve_settings(format: Option<OutputFormat>, roster: Option<PathBuf>) -> Result<RunSettings> {
    let config = load_config()?;
    Ok(RunSettings::from(&config).with_overrides(format, roster))
}

fn cmd_report(roster: Option<PathBuf>, format: Option<OutputFormat>) -> Result<()> {
    let settings = resolve_settings(format, roster)?;
    let roster = load_roster(settings.roster_path.as_deref())?;

    info!(
        employees = roster.len(),
        format = ?settings.format,
        "running report"
    );

    let report = run_report(&roster, &ReportPlan::default());
    let output = render::render(&report, settings.format)?;
    print!("{output}");

    Ok(())
}

fn cmd_roster(roster: Option<PathBuf>) -> Result<()> {
    let settings = resolve_settings(None, roster)?;
    let roster = load_roster(settings.roster_path.as_deref())?;

    info!(employees = roster.len(), "listing roster");

    for employee in roster.employees() {
        println!("{employee}");
    }

    Ok(())
}

fn cmd_config_init(force: bool) -> Result<()> {
    let path = init_config(force)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
