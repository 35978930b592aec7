//! CLI entry point for devkit.
//!
//! This binary provides the command-line interface for the devkit terminal
//! multi-tool: an interactive TUI shell plus one-shot counterparts of the
//! tool pages.
//!
//! # Usage
//!
//! ```bash
//! devkit [OPTIONS] <COMMAND>
//!
//! # Interactive shell, starting on the landing page
//! devkit open
//!
//! # Interactive shell, starting on a specific route
//! devkit open --route /json
//!
//! # Print the route table
//! devkit routes
//!
//! # One-shot JSON formatting (file or stdin)
//! devkit format input.json
//! cat input.json | devkit format --minify
//!
//! # One-shot digest
//! devkit hash --algorithm sha256 "some text"
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{Read, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use dk_core::{ColorScheme, Config, HashAlgorithm};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Terminal multi-tool: JSON formatter and hash calculator behind a
/// path-based router.
#[derive(Parser)]
#[command(name = "devkit", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    ///
    /// Missing fields fall back to their defaults.
    #[arg(short, long, global = true, env = "DEVKIT_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive TUI shell.
    Open {
        /// Route to open first (e.g. `/json`).
        ///
        /// An unregistered route fails before the terminal is entered.
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Color scheme override.
        #[arg(long, value_enum)]
        color_scheme: Option<SchemeArg>,
    },

    /// Print the route table.
    Routes,

    /// Format a JSON document from a file or stdin.
    Format {
        /// Input file (stdin if omitted).
        input: Option<Utf8PathBuf>,

        /// Indent width override.
        #[arg(short, long)]
        indent: Option<usize>,

        /// Emit the most compact form instead of pretty output.
        #[arg(short, long)]
        minify: bool,
    },

    /// Compute a hex digest of text, a file, or stdin.
    Hash {
        /// Text to hash (reads the file or stdin if omitted).
        text: Option<String>,

        /// Input file (used when no text is given).
        #[arg(short, long)]
        file: Option<Utf8PathBuf>,

        /// Digest algorithm.
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,
    },
}

/// Color scheme argument.
#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    /// Follow the terminal (resolves to dark).
    Auto,
    /// Light color scheme.
    Light,
    /// Dark color scheme.
    Dark,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Auto => Self::Auto,
            SchemeArg::Light => Self::Light,
            SchemeArg::Dark => Self::Dark,
        }
    }
}

/// Digest algorithm argument.
#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    /// SHA-256.
    Sha256,
    /// SHA-1.
    Sha1,
    /// SHA-512.
    Sha512,
}

impl From<AlgorithmArg> for HashAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha256 => Self::Sha256,
            AlgorithmArg::Sha1 => Self::Sha1,
            AlgorithmArg::Sha512 => Self::Sha512,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Loads the configuration file when `--config` is given; defaults
/// otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load {}: {}", path, e))?,
        None => Config::default(),
    };
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive TUI shell.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `route` - The route to open first
///
/// # Errors
///
/// Returns an error if the route does not resolve or the TUI fails.
async fn run_open(config: Config, route: &str) -> color_eyre::Result<()> {
    info!(route, "Starting TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = dk_tui::run(config, route) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        dk_tui::run(config, route)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Prints the route table.
///
/// # Errors
///
/// Returns an error if the route table fails validation.
fn run_routes() -> color_eyre::Result<()> {
    let router = dk_nav::Router::new(dk_tui::route_table())
        .map_err(|e| color_eyre::eyre::eyre!("Invalid route table: {}", e))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for route in router.routes() {
        writeln!(
            handle,
            "{:<8} {:<16} {}",
            route.path(),
            route.name(),
            route.component().title()
        )?;
    }

    Ok(())
}

/// Formats a JSON document from a file or stdin.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `input` - Input file path (stdin if `None`)
/// * `indent` - Indent width override
/// * `minify` - Emit compact output instead
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid JSON.
fn run_format(
    config: &Config,
    input: Option<&Utf8PathBuf>,
    indent: Option<usize>,
    minify: bool,
) -> color_eyre::Result<()> {
    let source = read_input(input)?;
    let indent = indent.unwrap_or(config.format.indent_width);

    let output = if minify {
        dk_core::minify_json(&source)?
    } else {
        dk_core::format_json(&source, indent)?
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{output}")?;

    Ok(())
}

/// Computes a hex digest of text, a file, or stdin.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `text` - Literal text to hash
/// * `file` - Input file (used when no text is given)
/// * `algorithm` - Algorithm override
///
/// # Errors
///
/// Returns an error if the input cannot be read.
fn run_hash(
    config: &Config,
    text: Option<&str>,
    file: Option<&Utf8PathBuf>,
    algorithm: Option<HashAlgorithm>,
) -> color_eyre::Result<()> {
    let algorithm = algorithm.unwrap_or(config.hash.default_algorithm);

    let bytes = match (text, file) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => std::fs::read(path.as_std_path())?,
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };

    let digest = dk_core::digest_hex(algorithm, &bytes);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{digest}")?;

    Ok(())
}

// =============================================================================
// INPUT HELPERS
// =============================================================================

/// Reads the whole input from a file or stdin.
fn read_input(input: Option<&Utf8PathBuf>) -> color_eyre::Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path.as_std_path())?),
        None => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Open {
            route,
            color_scheme,
        } => {
            let mut config = build_config(&cli)?;
            if let Some(scheme) = color_scheme {
                config.tui.color_scheme = (*scheme).into();
            }
            run_open(config, route).await
        }
        Commands::Routes => run_routes(),
        Commands::Format {
            input,
            indent,
            minify,
        } => {
            let config = build_config(&cli)?;
            run_format(&config, input.as_ref(), *indent, *minify)
        }
        Commands::Hash {
            text,
            file,
            algorithm,
        } => {
            let config = build_config(&cli)?;
            run_hash(
                &config,
                text.as_deref(),
                file.as_ref(),
                algorithm.map(Into::into),
            )
        }
    }
}
