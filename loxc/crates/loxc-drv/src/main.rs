//! loxc - command-line scanner for the Lox language.
//!
//! With a script argument, scans the file and prints its tokens. Without
//! one, starts an interactive prompt that scans each line as it is entered.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxc_drv::error::{EX_DATAERR, EX_USAGE};
use loxc_drv::{Config, Driver, DriverError, EmitKind, Result};

/// loxc - scan Lox source into tokens
///
/// Reads a script, or lines from an interactive prompt, and prints one
/// token per line. Lexical errors are reported on stderr.
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Script to scan (omit for an interactive prompt)
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOXC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOXC_NO_COLOR")]
    no_color: bool,

    /// Token output format
    #[arg(long, value_enum)]
    emit: Option<EmitKind>,

    /// Do not print the EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Main entry point for the loxc CLI.
///
/// Exit status is 0 on success, 64 on a usage error, 65 when the script has
/// lexical errors, 74 when the script cannot be read and 1 otherwise.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also land here, on stdout.
            let code = if err.use_stderr() { EX_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        },
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<DriverError>()
                .map_or(1, DriverError::exit_code);
            ExitCode::from(code)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.scripts.len() > 1 {
        return Err(DriverError::Usage("loxc [script]".to_string()).into());
    }

    let config = load_config(&cli).context("failed to load configuration")?;
    init_logging(config.verbose, cli.no_color)?;

    let driver = Driver::new(config);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match cli.scripts.first() {
        Some(path) => {
            let outcome = driver.run_file(path, &mut out, &mut err)?;
            if outcome.has_errors() {
                return Ok(ExitCode::from(EX_DATAERR));
            }
        },
        None => {
            driver.run_prompt(io::stdin().lock(), &mut out, &mut err)?;
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

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
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Load configuration from file or defaults, then apply command-line
/// overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    config.verbose |= cli.verbose;
    if let Some(emit) = cli.emit {
        config.output.emit = emit;
    }
    if cli.no_eof {
        config.output.show_eof = false;
    }

    Ok(config)
}
