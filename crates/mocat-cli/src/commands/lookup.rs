//! Implementation of the `mocat lookup` command.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, Result};
use mocat::{Registry, RegistryConfig};

/// Arguments for the lookup command.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Base directory containing <locale>/LC_MESSAGES/<domain>.mo
    #[arg(long, env = "MOCAT_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Message domain
    #[arg(long, required = true)]
    pub domain: String,

    /// Locale name (e.g., de, pt_BR)
    #[arg(long, required = true)]
    pub locale: String,

    /// Message to translate
    pub msgid: String,

    /// Plural form of the message; requires --count
    #[arg(long, requires = "count")]
    pub plural: Option<String>,

    /// Count used to select the plural form
    #[arg(long, short = 'n', requires = "plural")]
    pub count: Option<u64>,

    /// Fail if the catalog cannot be loaded instead of echoing the message
    #[arg(long)]
    pub strict: bool,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs) -> Result<i32> {
    let registry = Registry::new(
        RegistryConfig::builder()
            .base_dir(args.dir)
            .domain(args.domain)
            .locale(args.locale)
            .build(),
    );

    if args.strict {
        if let Err(e) = registry.load("", "") {
            eprintln!("{e}");
            return Ok(exitcode::NOINPUT);
        }
    }

    let translator = registry.translator("", "");
    let translated = match (&args.plural, args.count) {
        (Some(plural), Some(n)) => translator
            .plural(&args.msgid, plural, n)
            .map_err(|e| miette!("{e}"))?,
        _ => translator.singular(&args.msgid),
    };
    println!("{translated}");
    Ok(exitcode::OK)
}
