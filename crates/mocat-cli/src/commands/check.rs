//! Implementation of the `mocat check` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use mocat::load_catalog;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::table::{format_check_table, CheckRow};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files to check (.mo)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let results: Vec<CheckJson> = args
        .files
        .iter()
        .map(|file| match load_catalog(file) {
            Ok(catalog) => CheckJson {
                file: file.display().to_string(),
                ok: true,
                messages: Some(catalog.len()),
                error: None,
            },
            Err(e) => CheckJson {
                file: file.display().to_string(),
                ok: false,
                messages: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    let any_failed = results.iter().any(|r| !r.ok);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        let rows: Vec<CheckRow> = results
            .iter()
            .map(|r| CheckRow {
                file: r.file.clone(),
                status: if r.ok {
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
                } else {
                    "failed"
                        .if_supports_color(Stream::Stdout, |t| t.red())
                        .to_string()
                },
                messages: r.messages,
            })
            .collect();
        println!("{}", format_check_table(&rows));

        for result in results.iter().filter(|r| !r.ok) {
            if let Some(error) = &result.error {
                eprintln!("{error}");
            }
        }
    }

    if any_failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
