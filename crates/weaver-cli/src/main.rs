use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weaver_build::{Dispatcher, SystemRunner};
use weaver_config::{Config, ConfigLoader};

mod command_line;
mod config;
mod reporter;

use reporter::{ColorGuard, ConsoleReporter};

/// Weaver - build orchestrator for a UI binding library and its examples.
///
/// Options go before a `--` separator; the build command follows it. Without
/// a separator every argument is part of the build command.
///
/// COMMANDS:
///     --lib                  Build the library
///     --example              List example programs
///     --example --all        Build every example
///     --example <name>       Build one example
///     --all                  Build the library, then every example
///     --build <file>         Build a file as a console executable
///     --demo1                Build the demo with its icon
///
/// EXAMPLES:
///     weaver --lib
///     weaver -v --strict -- --example --all
///
/// ENVIRONMENT VARIABLES:
///     WEAVER_COMPILER   Compiler program (default: fsc)
///     WEAVER_STRICT     Set to '1' to exit non-zero on failures
///     NO_COLOR          Set to disable colored output
#[derive(Parser, Debug)]
#[command(name = "weaver")]
#[command(version)]
#[command(override_usage = "weaver [OPTIONS] -- <COMMAND>...\n       weaver <COMMAND>...")]
struct Cli {
    /// Layout file (default: nearest weaver.toml above the current directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with status 1 when any target failed or the command was invalid
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    let argv: Vec<String> = env::args().collect();
    let (options, tokens) = command_line::split_command_line(&argv);
    let cli = Cli::parse_from(options);
    let env_config = config::Config::from_env();

    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let strict = cli.strict || config.layout.behavior.strict;

    let _colors = ColorGuard::acquire(cli.no_color || env_config.no_color);
    let mut dispatcher = Dispatcher::new(
        config,
        SystemRunner::new(),
        ConsoleReporter::stdio(cli.verbose),
    );
    let report = dispatcher.dispatch(tokens);

    if strict && report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loader = ConfigLoader::new();
    match explicit {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("Failed to load layout file {}", path.display())),
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            loader
                .load_from_directory(&cwd)
                .context("Failed to load project layout")
        }
    }
}
