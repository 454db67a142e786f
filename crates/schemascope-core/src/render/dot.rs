//! Graphviz DOT rendering of the schema as an entity-relationship diagram

use std::io::Write;

use indexmap::IndexSet;

use crate::error::RenderError;
use crate::schema::{Column, Schema, Table};

/// Write the schema as a Graphviz `digraph`: one node per table listing its
/// columns with PK/UQ/NN markers, one edge per foreign key. Edges whose
/// target table is absent from the schema are skipped.
pub fn write_dot<W: Write>(schema: &Schema, out: &mut W) -> Result<(), RenderError> {
    writeln!(out, "digraph schema {{")?;
    writeln!(out, "  rankdir=LR;")?;
    writeln!(out, "  node [shape=plain, fontname=\"Helvetica\"];")?;
    for table in &schema.tables {
        write_node(table, out)?;
    }
    let known: IndexSet<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    for table in &schema.tables {
        for fk in &table.foreign_keys {
            if !known.contains(fk.references_table.as_str()) {
                continue;
            }
            writeln!(
                out,
                "  \"{}\" -> \"{}\" [label=\"{} -> {}\"];",
                table.name, fk.references_table, fk.column, fk.references_column
            )?;
        }
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_node<W: Write>(table: &Table, out: &mut W) -> Result<(), RenderError> {
    writeln!(out, "  \"{}\" [label=<", table.name)?;
    writeln!(
        out,
        "    <TABLE BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\">"
    )?;
    writeln!(
        out,
        "    <TR><TD BGCOLOR=\"#EEF2FF\"><B>{}</B></TD></TR>",
        escape_html(&table.name)
    )?;
    for column in &table.columns {
        writeln!(
            out,
            "    <TR><TD ALIGN=\"LEFT\">{}</TD></TR>",
            column_cell(column)
        )?;
    }
    writeln!(out, "    </TABLE>>];")?;
    Ok(())
}

fn column_cell(column: &Column) -> String {
    let mut cell = format!(
        "{}: {}",
        escape_html(&column.name),
        escape_html(&column.data_type)
    );
    if column.primary_key {
        cell.push_str(" PK");
    }
    if column.unique && !column.primary_key {
        cell.push_str(" UQ");
    }
    if column.not_null {
        cell.push_str(" NN");
    }
    cell
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, ForeignKey, Table};

    fn render(schema: &Schema) -> String {
        let mut buf = Vec::new();
        write_dot(schema, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Schema {
        let mut users = Table::new("users");
        users.columns.push(Column::new("id", "SERIAL").primary_key());
        let mut posts = Table::new("posts");
        posts
            .columns
            .push(Column::new("author_id", "INT").not_null());
        posts
            .foreign_keys
            .push(ForeignKey::new("author_id", "users", "id"));
        posts
            .foreign_keys
            .push(ForeignKey::new("tag_id", "tags", "id"));
        Schema {
            tables: vec![users, posts],
        }
    }

    #[test]
    fn test_edges_to_known_tables_only() {
        let out = render(&sample());
        assert!(out.contains("\"posts\" -> \"users\" [label=\"author_id -> id\"];"));
        // tags is not in the schema, so that edge is dropped.
        assert!(!out.contains("tags"));
    }

    #[test]
    fn test_one_node_per_table_occurrence() {
        let mut schema = sample();
        schema.tables.push(Table::new("users"));
        let out = render(&schema);
        assert_eq!(out.matches("\"users\" [label=<").count(), 2);
    }

    #[test]
    fn test_markers_in_cells() {
        let out = render(&sample());
        assert!(out.contains("id: SERIAL PK"));
        assert!(out.contains("author_id: INT NN"));
    }

    #[test]
    fn test_html_escaping() {
        let mut table = Table::new("t");
        table.columns.push(Column::new("x", "MAP<INT>"));
        let out = render(&Schema {
            tables: vec![table],
        });
        assert!(out.contains("MAP&lt;INT&gt;"));
    }
}
