//! Clause splitting and classification for a table body.
//!
//! A clause is one comma-separated segment of the body: either a column
//! definition or a table-level constraint. Classification tries the
//! table-level shapes first and falls back to a column definition; text
//! matching none of the shapes is dropped.

use crate::schema::{Column, ForeignKey};

use super::text::{
    clean_list_entry, eat_delimited_ident, eat_keyword, eat_ws1, find_keyword_seq, is_ident_byte,
    is_type_byte, skip_ws,
};

/// One classified clause of a table body.
pub(crate) enum Clause {
    /// Table-level `PRIMARY KEY (...)` column-name list.
    PrimaryKey(Vec<String>),
    /// Table-level `FOREIGN KEY (...) REFERENCES ... (...)` edges.
    ForeignKey(Vec<ForeignKey>),
    /// A column definition, possibly carrying an inline `REFERENCES` edge.
    Column {
        column: Column,
        references: Option<ForeignKey>,
    },
}

/// Split a table body on commas that are not nested inside parentheses, so
/// `DECIMAL(10,2)` and `FOREIGN KEY (a, b)` stay intact. Parentheses are
/// retained in the clause text. Clauses are trimmed, a stray leading or
/// trailing comma is dropped, and empty clauses are discarded.
pub(crate) fn split_clauses(body: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, &b) in body.as_bytes().iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                push_clause(&mut clauses, &body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_clause(&mut clauses, &body[start..]);
    clauses
}

fn push_clause<'a>(clauses: &mut Vec<&'a str>, raw: &'a str) {
    let mut clause = raw.trim();
    clause = clause.strip_prefix(',').unwrap_or(clause);
    clause = clause.strip_suffix(',').unwrap_or(clause);
    if !clause.is_empty() {
        clauses.push(clause);
    }
}

/// Classify a clause. Matchers are tried in priority order; the first that
/// matches consumes the clause. `None` means the clause is dropped.
pub(crate) fn classify(clause: &str) -> Option<Clause> {
    if let Some(columns) = match_table_primary_key(clause) {
        return Some(Clause::PrimaryKey(columns));
    }
    if let Some(edges) = match_table_foreign_key(clause) {
        return Some(Clause::ForeignKey(edges));
    }
    match_column(clause).map(|(column, references)| Clause::Column { column, references })
}

/// `PRIMARY KEY ( col[, col...] )`, searched anywhere in the clause so a
/// leading `CONSTRAINT name` prefix does not defeat it.
fn match_table_primary_key(clause: &str) -> Option<Vec<String>> {
    let bytes = clause.as_bytes();
    let mut from = 0;
    while let Some((at, end)) = find_keyword_seq(bytes, from, &["primary", "key"]) {
        if let Some((_, list)) = eat_paren_list(clause, end) {
            let columns = list
                .split(',')
                .map(clean_list_entry)
                .filter(|c| !c.is_empty())
                .collect();
            return Some(columns);
        }
        from = at + 1;
    }
    None
}

/// `FOREIGN KEY ( col[, col...] ) REFERENCES target ( col[, col...] )`.
/// One edge per source-list entry, paired position-wise with the target
/// list.
fn match_table_foreign_key(clause: &str) -> Option<Vec<ForeignKey>> {
    let bytes = clause.as_bytes();
    let mut from = 0;
    while let Some((at, end)) = find_keyword_seq(bytes, from, &["foreign", "key"]) {
        if let Some(edges) = finish_table_foreign_key(clause, end) {
            return Some(edges);
        }
        from = at + 1;
    }
    None
}

fn finish_table_foreign_key(clause: &str, pos: usize) -> Option<Vec<ForeignKey>> {
    let bytes = clause.as_bytes();
    let (pos, source_list) = eat_paren_list(clause, pos)?;
    let pos = skip_ws(bytes, pos);
    let pos = eat_keyword(bytes, pos, "references")?;
    let pos = eat_ws1(bytes, pos)?;
    let (pos, table) = eat_delimited_ident(bytes, pos)?;
    let (_, target_list) = eat_paren_list(clause, pos)?;

    let table = &clause[table];
    // The source list is not filtered for empties; every entry yields an
    // edge, matching the permissive pairing rule.
    let targets: Vec<String> = target_list.split(',').map(clean_list_entry).collect();
    let edges = source_list
        .split(',')
        .map(clean_list_entry)
        .enumerate()
        .map(|(i, column)| ForeignKey {
            column,
            references_table: table.to_string(),
            references_column: pick_target(&targets, i),
        })
        .collect();
    Some(edges)
}

/// Position-wise target column, falling back to the first entry when the
/// position has no non-empty target.
fn pick_target(targets: &[String], i: usize) -> String {
    targets
        .get(i)
        .filter(|c| !c.is_empty())
        .unwrap_or(&targets[0])
        .clone()
}

/// A column definition: optionally delimited name, one type token, then
/// free modifier text scanned case-insensitively for `PRIMARY KEY`,
/// `NOT NULL`, whole-word `UNIQUE` and an inline `REFERENCES` edge.
fn match_column(clause: &str) -> Option<(Column, Option<ForeignKey>)> {
    let bytes = clause.as_bytes();
    let (pos, name) = eat_delimited_ident(bytes, 0)?;
    let pos = eat_ws1(bytes, pos)?;
    let type_end = eat_type_token(bytes, pos)?;

    let name = clause[name].to_string();
    let rest = &clause[type_end..];
    let column = Column {
        name: name.clone(),
        data_type: clause[pos..type_end].to_string(),
        primary_key: contains_seq(rest, &["primary", "key"]),
        not_null: contains_seq(rest, &["not", "null"]),
        unique: contains_word(rest, "unique"),
    };
    let references = match_inline_references(rest).map(|(table, to_column)| ForeignKey {
        column: name,
        references_table: table,
        references_column: to_column,
    });
    Some((column, references))
}

fn eat_type_token(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end < bytes.len() && is_type_byte(bytes[end]) {
        end += 1;
    }
    if end > pos {
        Some(end)
    } else {
        None
    }
}

/// `REFERENCES target ( col[, ...] )` anywhere in the modifier text. Only
/// the first target column is used even if several are listed.
fn match_inline_references(rest: &str) -> Option<(String, String)> {
    let bytes = rest.as_bytes();
    let mut from = 0;
    while let Some((at, end)) = find_keyword_seq(bytes, from, &["references"]) {
        if let Some(found) = finish_inline_references(rest, end) {
            return Some(found);
        }
        from = at + 1;
    }
    None
}

fn finish_inline_references(rest: &str, pos: usize) -> Option<(String, String)> {
    let bytes = rest.as_bytes();
    let pos = eat_ws1(bytes, pos)?;
    let (pos, table) = eat_delimited_ident(bytes, pos)?;
    let (_, list) = eat_paren_list(rest, pos)?;
    let to_column = clean_list_entry(list.split(',').next().unwrap_or(""));
    Some((rest[table].to_string(), to_column))
}

/// `( ... )` after optional whitespace, with the contents running to the
/// next closing parenthesis. Returns the position after the close and the
/// raw contents.
fn eat_paren_list(text: &str, pos: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    let open = skip_ws(bytes, pos);
    if open >= bytes.len() || bytes[open] != b'(' {
        return None;
    }
    let close = text[open + 1..].find(')')? + open + 1;
    Some((close + 1, &text[open + 1..close]))
}

/// Case-insensitive keyword sequence anywhere in the text, no boundaries
/// required.
fn contains_seq(text: &str, words: &[&str]) -> bool {
    find_keyword_seq(text.as_bytes(), 0, words).is_some()
}

/// Case-insensitive whole-word occurrence: both neighbors, when present,
/// must not be identifier characters.
fn contains_word(text: &str, word: &str) -> bool {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some((at, end)) = find_keyword_seq(bytes, from, &[word]) {
        let left_ok = at == 0 || !is_ident_byte(bytes[at - 1]);
        let right_ok = end == bytes.len() || !is_ident_byte(bytes[end]);
        if left_ok && right_ok {
            return true;
        }
        from = at + 1;
    }
    false
}
