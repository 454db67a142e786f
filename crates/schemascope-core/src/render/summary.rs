//! Textual schema summary

use std::io::Write;

use crate::error::RenderError;
use crate::schema::{Column, Schema, Table};

/// Write a human-readable summary: each table with its columns and
/// constraint annotations, then its outgoing foreign keys as
/// `table.column -> table.column` lines.
pub fn write_summary<W: Write>(schema: &Schema, out: &mut W) -> Result<(), RenderError> {
    if schema.tables.is_empty() {
        writeln!(out, "No tables found.")?;
        return Ok(());
    }
    for (i, table) in schema.tables.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_table(table, out)?;
    }
    Ok(())
}

fn write_table<W: Write>(table: &Table, out: &mut W) -> Result<(), RenderError> {
    writeln!(out, "Table: {}", table.name)?;
    for column in &table.columns {
        writeln!(
            out,
            "  - {}: {}{}",
            column.name,
            column.data_type,
            annotations(column)
        )?;
    }
    for fk in &table.foreign_keys {
        writeln!(
            out,
            "  References: {}.{} -> {}.{}",
            table.name, fk.column, fk.references_table, fk.references_column
        )?;
    }
    Ok(())
}

/// Annotation suffix for a column. A primary key is implicitly unique, so
/// UNIQUE is shown only on non-key columns.
fn annotations(column: &Column) -> String {
    let mut out = String::new();
    if column.primary_key {
        out.push_str(" (PK)");
    }
    if column.unique && !column.primary_key {
        out.push_str(" (UNIQUE)");
    }
    if column.not_null {
        out.push_str(" (NOT NULL)");
    }
    out
}
