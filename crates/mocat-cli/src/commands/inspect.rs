//! Implementation of the `mocat inspect` command.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use mocat::{load_catalog, Catalog};
use serde::Serialize;

use crate::output::table::{format_header_table, format_message_table, MessageRow};

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Catalog file (.mo)
    pub file: PathBuf,

    /// Also list every message
    #[arg(long)]
    pub messages: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one catalog entry.
#[derive(Debug, Serialize)]
struct MessageJson {
    singular: String,
    plural: String,
    variants: Vec<String>,
}

/// JSON output for the inspect command.
#[derive(Debug, Serialize)]
struct InspectJson {
    file: String,
    entries: usize,
    nplurals: Option<usize>,
    plural_rule: String,
    header: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<Vec<MessageJson>>,
}

/// Collect entries sorted by source text, header excluded.
fn message_rows(catalog: &Catalog) -> Vec<MessageRow> {
    let mut rows: Vec<MessageRow> = catalog
        .messages()
        .filter(|m| !(m.singular.is_empty() && m.plural.is_empty()))
        .map(|m| MessageRow {
            singular: String::from_utf8_lossy(m.singular).into_owned(),
            plural: String::from_utf8_lossy(m.plural).into_owned(),
            variants: m
                .variants
                .iter()
                .map(|v| String::from_utf8_lossy(v).into_owned())
                .collect(),
        })
        .collect();
    rows.sort_by(|a, b| (&a.singular, &a.plural).cmp(&(&b.singular, &b.plural)));
    rows
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> Result<i32> {
    let catalog = load_catalog(&args.file).map_err(|e| miette!("{e}"))?;
    let rows = args.messages.then(|| message_rows(&catalog));

    if args.json {
        let output = InspectJson {
            file: args.file.display().to_string(),
            entries: catalog.len(),
            nplurals: catalog.header().nplurals(),
            plural_rule: catalog.plural_rule().to_string(),
            header: catalog
                .header()
                .fields()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            messages: rows.map(|rows| {
                rows.into_iter()
                    .map(|row| MessageJson {
                        singular: row.singular,
                        plural: row.plural,
                        variants: row.variants,
                    })
                    .collect()
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!("{}", args.file.display());
    println!("  entries:     {}", catalog.len());
    if let Some(nplurals) = catalog.header().nplurals() {
        println!("  nplurals:    {nplurals}");
    }
    println!("  plural rule: {}", catalog.plural_rule());

    if !catalog.header().is_empty() {
        println!("\n{}", format_header_table(catalog.header().fields()));
    }
    if let Some(rows) = rows {
        println!("\n{}", format_message_table(&rows));
    }
    Ok(exitcode::OK)
}
