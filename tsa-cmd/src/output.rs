//! Rendering a [`Table`] to the terminal as text, JSON or CSV.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text columns
    Table,
    /// JSON array of objects keyed by header
    Json,
    /// CSV with a header row
    Csv,
}

/// A rectangular result: headers plus rows of display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

pub fn write_table<W: Write>(w: &mut W, table: &Table, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => write_text(w, table)?,
        OutputFormat::Json => {
            let objects: Vec<serde_json::Map<String, serde_json::Value>> = table
                .rows
                .iter()
                .map(|row| {
                    table
                        .headers
                        .iter()
                        .cloned()
                        .zip(row.iter().map(|v| serde_json::Value::String(v.clone())))
                        .collect()
                })
                .collect();
            serde_json::to_writer_pretty(&mut *w, &objects)?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(w);
            wtr.write_record(&table.headers)?;
            for row in &table.rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(w: &mut W, table: &Table) -> std::io::Result<()> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(w, "{}", line(&table.headers))?;
    let rule: Vec<String> = widths.iter().map(|n| "-".repeat(*n)).collect();
    writeln!(w, "{}", line(&rule))?;
    for row in &table.rows {
        writeln!(w, "{}", line(row))?;
    }
    Ok(())
}
