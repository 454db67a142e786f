//! Comment stripping and statement splitting.

use super::text::{eat_keyword, eat_ws1, skip_ws};

/// Normalization applied before statement splitting: line comments removed,
/// block comments removed, newline runs collapsed.
pub(crate) fn normalize(input: &str) -> String {
    collapse_newlines(&strip_block_comments(&strip_line_comments(input)))
}

/// Remove `--` comments up to the end of their line. The line break itself
/// is kept.
fn strip_line_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, line) in input.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find("--") {
            Some(at) => out.push_str(&line[..at]),
            None => out.push_str(line),
        }
    }
    out
}

/// Remove `/* ... */` comments, pairing each opener with the nearest
/// following close, across line boundaries. A single space is left in place
/// so the tokens on either side never merge. An unterminated opener is left
/// as ordinary text.
fn strip_block_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("/*") {
        match rest[open + 2..].find("*/") {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push(' ');
                rest = &rest[open + 2 + close + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Collapse runs of line feeds into a single one.
fn collapse_newlines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_newline = false;
    for c in input.chars() {
        if c == '\n' {
            if !prev_newline {
                out.push(c);
            }
            prev_newline = true;
        } else {
            out.push(c);
            prev_newline = false;
        }
    }
    out
}

/// Split normalized text into candidate statements on semicolons that are
/// followed, after optional whitespace, by `CREATE TABLE` or by end of
/// input. A semicolon inside a statement body (e.g. in a default
/// expression) stays put because what follows it is not a table header.
/// Candidates are trimmed; empty ones are dropped.
pub(crate) fn split_statements(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut statements = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b';' {
            let after = skip_ws(bytes, i + 1);
            if after == bytes.len() || table_header_ahead(bytes, after) {
                push_trimmed(&mut statements, &input[start..i]);
                start = after;
                i = after;
                continue;
            }
        }
        i += 1;
    }
    push_trimmed(&mut statements, &input[start..]);
    statements
}

fn table_header_ahead(bytes: &[u8], pos: usize) -> bool {
    eat_keyword(bytes, pos, "create")
        .and_then(|p| eat_ws1(bytes, p))
        .and_then(|p| eat_keyword(bytes, p, "table"))
        .is_some()
}

fn push_trimmed<'a>(statements: &mut Vec<&'a str>, raw: &'a str) {
    let stmt = raw.trim();
    if !stmt.is_empty() {
        statements.push(stmt);
    }
}
