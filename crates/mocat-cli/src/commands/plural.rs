//! Implementation of the `mocat plural` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use mocat::PluralRule;
use serde::Serialize;

use crate::output::table::format_plural_table;
use crate::output::ExpressionDiagnostic;

/// Arguments for the plural command.
#[derive(Debug, Args)]
pub struct PluralArgs {
    /// Plural-form expression, e.g. "n != 1"
    pub expression: String,

    /// First count to evaluate
    #[arg(long, default_value_t = 0)]
    pub from: u64,

    /// Last count to evaluate (inclusive)
    #[arg(long, default_value_t = 20)]
    pub to: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one evaluated count.
#[derive(Debug, Serialize)]
struct FormJson {
    n: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> Result<i32> {
    let rule = PluralRule::compile(&args.expression).map_err(|e| {
        ExpressionDiagnostic::from_expression_error("<expression>", &args.expression, &e)
    })?;

    let results: Vec<(u64, Result<u64, String>)> = (args.from..=args.to)
        .map(|n| (n, rule.select(n).map_err(|e| e.to_string())))
        .collect();
    let any_failed = results.iter().any(|(_, r)| r.is_err());

    if args.json {
        let output: Vec<FormJson> = results
            .into_iter()
            .map(|(n, result)| match result {
                Ok(form) => FormJson {
                    n,
                    form: Some(form),
                    error: None,
                },
                Err(error) => FormJson {
                    n,
                    form: None,
                    error: Some(error),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{rule}");
        let rows: Vec<(u64, String)> = results
            .into_iter()
            .map(|(n, result)| (n, result.map_or_else(|e| e, |form| form.to_string())))
            .collect();
        println!("{}", format_plural_table(&rows));
    }

    if any_failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
