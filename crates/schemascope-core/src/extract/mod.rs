//! DDL schema extraction - best-effort parsing of `CREATE TABLE` text
//!
//! The extractor is deliberately permissive: it is meant to run on every
//! edit of a buffer the user is still typing into, so statements or clauses
//! that do not match the supported grammar are skipped silently instead of
//! failing the whole input. Nothing in this module returns an error or
//! panics, whatever the input.

mod clause;
mod statement;
mod text;

use tracing::{debug, trace};

use crate::schema::{Schema, Table};

use clause::Clause;
use text::{eat_delimited_ident, eat_keyword_seq, eat_ws1, find_keyword_seq, skip_ws};

/// Extract a [`Schema`] from raw DDL text.
///
/// Every statement matching the supported `CREATE TABLE` subset yields one
/// table, in statement order; everything else is skipped. Duplicate table
/// names are retained as distinct entries. Given the same input, the result
/// is always structurally equal.
pub fn extract_schema(input: &str) -> Schema {
    let cleaned = statement::normalize(input);
    let mut tables = Vec::new();
    for stmt in statement::split_statements(&cleaned) {
        match match_table_header(stmt) {
            Some((name, body)) => tables.push(build_table(name, body)),
            None => debug!("skipping statement without a CREATE TABLE header"),
        }
    }
    Schema { tables }
}

/// Match `CREATE TABLE [IF NOT EXISTS] name ( body )` at the first position
/// in the statement where the whole header shape holds. The body runs to
/// the last closing parenthesis in the statement, so parenthesized type
/// arguments inside it never cut the capture short.
fn match_table_header(stmt: &str) -> Option<(String, &str)> {
    let bytes = stmt.as_bytes();
    let mut from = 0;
    loop {
        let (at, end) = find_keyword_seq(bytes, from, &["create", "table"])?;
        if let Some(found) = finish_table_header(stmt, end) {
            return Some(found);
        }
        from = at + 1;
    }
}

fn finish_table_header(stmt: &str, pos: usize) -> Option<(String, &str)> {
    let bytes = stmt.as_bytes();
    let pos = eat_ws1(bytes, pos)?;
    let pos = eat_keyword_seq(bytes, pos, &["if", "not", "exists"])
        .and_then(|p| eat_ws1(bytes, p))
        .unwrap_or(pos);
    let (pos, name) = eat_delimited_ident(bytes, pos)?;
    let open = skip_ws(bytes, pos);
    if open >= bytes.len() || bytes[open] != b'(' {
        return None;
    }
    let close = stmt.rfind(')')?;
    if close <= open {
        return None;
    }
    Some((stmt[name].to_string(), &stmt[open + 1..close]))
}

/// Build one table from its body: split the clause list, classify each
/// clause in a single left-to-right pass, then apply the table-level
/// primary-key set to the columns it names.
fn build_table(name: String, body: &str) -> Table {
    let mut table = Table::new(name);
    let mut table_pk: Vec<String> = Vec::new();
    for raw in clause::split_clauses(body) {
        match clause::classify(raw) {
            Some(Clause::PrimaryKey(columns)) => table_pk.extend(columns),
            Some(Clause::ForeignKey(edges)) => table.foreign_keys.extend(edges),
            Some(Clause::Column { column, references }) => {
                if let Some(edge) = references {
                    table.foreign_keys.push(edge);
                }
                table.columns.push(column);
            }
            None => trace!(clause = %raw, "dropping unrecognized clause"),
        }
    }
    for column in &mut table.columns {
        if table_pk.iter().any(|pk| pk == &column.name) {
            column.primary_key = true;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_basic() {
        let (name, body) = match_table_header("CREATE TABLE users (id INT)").unwrap();
        assert_eq!(name, "users");
        assert_eq!(body, "id INT");
    }

    #[test]
    fn test_header_if_not_exists() {
        let (name, _) = match_table_header("create table if not exists t (x INT)").unwrap();
        assert_eq!(name, "t");
    }

    #[test]
    fn test_header_quoted_names() {
        for stmt in [
            "CREATE TABLE `users` (id INT)",
            "CREATE TABLE \"users\" (id INT)",
            "CREATE TABLE [users] (id INT)",
        ] {
            let (name, _) = match_table_header(stmt).unwrap();
            assert_eq!(name, "users", "failed for {stmt}");
        }
    }

    #[test]
    fn test_header_body_runs_to_last_paren() {
        let (_, body) = match_table_header("CREATE TABLE t (name VARCHAR(255))").unwrap();
        assert_eq!(body, "name VARCHAR(255)");
    }

    #[test]
    fn test_header_rejects_other_statements() {
        assert!(match_table_header("DROP TABLE users").is_none());
        assert!(match_table_header("CREATE INDEX idx ON users (id)").is_none());
        assert!(match_table_header("CREATE TABLE t").is_none());
        assert!(match_table_header("CREATE TABLE t (id INT").is_none());
    }

    #[test]
    fn test_table_level_pk_applied_after_columns() {
        let table = build_table(
            "t".to_string(),
            "id INT, name TEXT, PRIMARY KEY (id)",
        );
        assert!(table.column("id").unwrap().primary_key);
        assert!(!table.column("name").unwrap().primary_key);
    }

    #[test]
    fn test_pk_clause_before_columns_still_applies() {
        let table = build_table("t".to_string(), "PRIMARY KEY (id), id INT");
        assert!(table.column("id").unwrap().primary_key);
    }

    #[test]
    fn test_foreign_keys_in_scan_order() {
        let table = build_table(
            "posts".to_string(),
            "author_id INT REFERENCES users(id), FOREIGN KEY (editor_id) REFERENCES users (id)",
        );
        let sources: Vec<&str> = table
            .foreign_keys
            .iter()
            .map(|fk| fk.column.as_str())
            .collect();
        assert_eq!(sources, vec!["author_id", "editor_id"]);
    }
}
