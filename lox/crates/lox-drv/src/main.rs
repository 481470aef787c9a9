//! Lox CLI - scan a Lox script, or lines typed at a prompt, into tokens.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_drv::{Config, Repl, Session};

/// Lox - scanner for the Lox scripting language
///
/// With a script path, scans the file and prints its tokens. Without one,
/// starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOX_NO_COLOR")]
    no_color: bool,

    /// Print the token stream, overriding the configuration
    #[arg(long, overrides_with = "no_tokens")]
    tokens: bool,

    /// Do not print the token stream, overriding the configuration
    #[arg(long, overrides_with = "tokens")]
    no_tokens: bool,

    /// Script to scan (starts the interactive prompt when omitted)
    script: Option<PathBuf>,
}

impl Cli {
    fn token_override(&self) -> Option<bool> {
        if self.tokens {
            Some(true)
        } else if self.no_tokens {
            Some(false)
        } else {
            None
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("lox: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(print_tokens) = cli.token_override() {
        config.print_tokens = print_tokens;
    }
    debug!(?config, "configuration loaded");

    let session = Session::new(config);

    match cli.script {
        Some(path) => {
            session.run_file(&path)?;
            Ok(exit_status(&session))
        },
        None => {
            let mut repl = Repl::new(session)?;
            repl.run()?;
            Ok(exit_status(repl.session()))
        },
    }
}

/// Status 1 if the session still holds an error, 0 otherwise.
///
/// The prompt resets the flag after every line, so only file runs fail here.
fn exit_status(session: &Session) -> ExitCode {
    if session.had_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
