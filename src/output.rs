//! Rendering of lookup results for the terminal.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::types::MonsterData;

const INDEX_HEADER: &str = "(index)";
const VALUE_HEADER: &str = "Values";

/// Render a monster in the configured format.
pub fn render(monster: &MonsterData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(monster)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(monster).context("Failed to serialise monster")
        }
    }
}

/// Two-column box table, one row per field.
pub fn render_table(monster: &MonsterData) -> String {
    let rows = monster.fields();
    let key_w = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(INDEX_HEADER.len()))
        .max()
        .unwrap_or(0);
    let val_w = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };
    let row = |k: &str, v: &str| format!("│ {k:<key_w$} │ {v:<val_w$} │");

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(row(INDEX_HEADER, VALUE_HEADER));
    lines.push(rule("├", "┼", "┤"));
    for (k, v) in rows {
        lines.push(row(k, v));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}
