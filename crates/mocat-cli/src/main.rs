//! mocat CLI entry point.
//!
//! Provides command-line tools for working with binary message catalogs:
//! - `mocat inspect` - Show a catalog's header and entries
//! - `mocat lookup` - Translate a message through a locale directory
//! - `mocat plural` - Tabulate a plural-form expression
//! - `mocat check` - Validate catalog files

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_inspect, run_lookup, run_plural, CheckArgs, InspectArgs, LookupArgs, PluralArgs,
};
use tracing_subscriber::EnvFilter;

/// Binary message catalog tools.
#[derive(Debug, Parser)]
#[command(name = "mocat")]
#[command(about = "Binary message catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a catalog's header, plural rule and entries
    Inspect(InspectArgs),
    /// Translate a message using a locale directory
    Lookup(LookupArgs),
    /// Evaluate a plural-form expression over a range of counts
    Plural(PluralArgs),
    /// Check that catalog files decode
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Inspect(args) => run_inspect(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Plural(args) => run_plural(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
