//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Create a table with the shared style.
fn styled_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format header fields as a two-column table.
pub fn format_header_table<'a>(fields: impl Iterator<Item = (&'a str, &'a str)>) -> Table {
    let mut table = styled_table(vec!["Field", "Value"]);
    for (name, value) in fields {
        table.add_row(vec![name, value]);
    }
    table
}

/// One catalog entry as displayed by `inspect --messages`.
pub struct MessageRow {
    pub singular: String,
    pub plural: String,
    pub variants: Vec<String>,
}

/// Format catalog entries.
pub fn format_message_table(rows: &[MessageRow]) -> Table {
    let mut table = styled_table(vec!["Message", "Plural", "Translations"]);
    for row in rows {
        table.add_row(vec![
            row.singular.clone(),
            row.plural.clone(),
            row.variants.join("\n"),
        ]);
    }
    table
}

/// Format the selected index for each count.
pub fn format_plural_table(rows: &[(u64, String)]) -> Table {
    let mut table = styled_table(vec!["n", "Form"]);
    for (n, form) in rows {
        table.add_row(vec![n.to_string(), form.clone()]);
    }
    table
}

/// Result of checking one catalog file.
pub struct CheckRow {
    pub file: String,
    pub status: String,
    pub messages: Option<usize>,
}

/// Format check results.
pub fn format_check_table(rows: &[CheckRow]) -> Table {
    let mut table = styled_table(vec!["File", "Status", "Messages"]);
    for row in rows {
        table.add_row(vec![
            row.file.clone(),
            row.status.clone(),
            row.messages.map_or_else(|| "-".to_string(), |n| n.to_string()),
        ]);
    }
    table
}
