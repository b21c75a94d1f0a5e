//! rpnc - translate calculator statements into postfix records.
//!
//! Statements come from the command line, from a file or from standard
//! input, one per line. Records go to standard output; diagnostics and logs
//! go to standard error.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rpnc_drv::{Config, DriverError, Emit, Result, Session, Summary};

/// rpnc - translate calculator statements into postfix records
#[derive(Parser, Debug)]
#[command(name = "rpnc")]
#[command(author = "rpnc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate calculator statements into postfix records", long_about = None)]
struct Cli {
    /// Statements to translate; standard input is read when none are given
    #[arg(value_name = "STATEMENT", allow_hyphen_values = true)]
    statements: Vec<String>,

    /// Read statements from a file instead of standard input
    #[arg(short, long, conflicts_with = "statements")]
    file: Option<PathBuf>,

    /// Output form (overrides the configuration file)
    #[arg(short, long, value_enum)]
    emit: Option<Emit>,

    /// Tab width used for error columns (overrides the configuration file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    tab_width: Option<u32>,

    /// Enable verbose output
    #[arg(short, long, env = "RPNC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "RPNC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "RPNC_NO_COLOR")]
    no_color: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    apply_overrides(&cli, &mut config);

    init_logging(&config, cli.verbose, cli.no_color)?;
    let session = Session::new(config);
    debug!(config = ?session.config(), "starting");

    let summary = run(&cli, &session)?;

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize the logging system.
///
/// `--verbose` wins over `RPNC_LOG`, which wins over the configured level.
fn init_logging(config: &Config, verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RPNC_LOG").unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(emit) = cli.emit {
        config.emit = emit;
    }
    if let Some(tab_width) = cli.tab_width {
        config.tab_width = tab_width;
    }
}

fn run(cli: &Cli, session: &Session) -> Result<Summary> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diagnostics = stderr.lock();

    if !cli.statements.is_empty() {
        return session.run_statements(&cli.statements, &mut out, &mut diagnostics);
    }

    match &cli.file {
        Some(path) => {
            let file = File::open(path)?;
            session.run_lines(BufReader::new(file), &mut out, &mut diagnostics)
        },
        None => session.run_lines(io::stdin().lock(), &mut out, &mut diagnostics),
    }
}
