//! Output formats shared by the subcommands.

use clap::ValueEnum;
use serde::Serialize;

/// How a subcommand prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Render rows as left-aligned columns separated by two spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = line(headers.iter().copied(), &widths);
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let mut s = padded.join("  ").trim_end().to_string();
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_pads_columns() {
        let out = render_table(
            &["Code", "Name"],
            &[
                vec!["VND001".into(), "PT Mitra Sejahtera".into()],
                vec!["VND2".into(), "CV".into()],
            ],
        );
        assert_eq!(
            out,
            "Code    Name\nVND001  PT Mitra Sejahtera\nVND2    CV\n"
        );
    }

    #[test]
    fn test_to_json_ends_with_newline() {
        let out = to_json(&serde_json::json!({"a": 1})).unwrap();
        assert!(out.ends_with("}\n"));
    }
}
