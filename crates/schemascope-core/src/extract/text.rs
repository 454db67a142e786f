//! Low-level ASCII scanning helpers for the extractor.
//!
//! Matching is byte-oriented: every structural character the supported
//! grammar cares about is ASCII, so byte positions produced here are always
//! valid `str` slice boundaries, even in the presence of multi-byte text.

use std::ops::Range;

/// True for bytes that may appear in an identifier.
pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// True for bytes that may appear in a type token. Parentheses are part of
/// the token, so `VARCHAR(255)` scans as a single token.
pub(crate) fn is_type_byte(b: u8) -> bool {
    is_ident_byte(b) || b == b'(' || b == b')'
}

/// Closing delimiter paired with an identifier-quoting opener.
pub(crate) fn closing_delimiter(open: u8) -> Option<u8> {
    match open {
        b'`' => Some(b'`'),
        b'"' => Some(b'"'),
        b'[' => Some(b']'),
        _ => None,
    }
}

/// Advance past the ASCII case-insensitive keyword at `pos`, if present.
/// No token boundary is required after the keyword.
pub(crate) fn eat_keyword(bytes: &[u8], pos: usize, word: &str) -> Option<usize> {
    let word = word.as_bytes();
    let end = pos.checked_add(word.len())?;
    if end <= bytes.len() && bytes[pos..end].eq_ignore_ascii_case(word) {
        Some(end)
    } else {
        None
    }
}

/// Advance past any whitespace bytes.
pub(crate) fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Advance past one or more whitespace bytes.
pub(crate) fn eat_ws1(bytes: &[u8], pos: usize) -> Option<usize> {
    let end = skip_ws(bytes, pos);
    if end > pos {
        Some(end)
    } else {
        None
    }
}

/// Advance past a whitespace-separated keyword sequence such as
/// `PRIMARY KEY`, case-insensitively.
pub(crate) fn eat_keyword_seq(bytes: &[u8], pos: usize, words: &[&str]) -> Option<usize> {
    let mut pos = eat_keyword(bytes, pos, words[0])?;
    for word in &words[1..] {
        pos = eat_ws1(bytes, pos)?;
        pos = eat_keyword(bytes, pos, word)?;
    }
    Some(pos)
}

/// Find the first occurrence at or after `from` of a keyword sequence,
/// returning its start and end. The search is unanchored: no token
/// boundaries are required around the match.
pub(crate) fn find_keyword_seq(
    bytes: &[u8],
    from: usize,
    words: &[&str],
) -> Option<(usize, usize)> {
    let first = words[0].as_bytes()[0];
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos].eq_ignore_ascii_case(&first) {
            if let Some(end) = eat_keyword_seq(bytes, pos, words) {
                return Some((pos, end));
            }
        }
        pos += 1;
    }
    None
}

/// Advance past an identifier (`[A-Za-z0-9_]+`).
pub(crate) fn eat_ident(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    if end > pos {
        Some(end)
    } else {
        None
    }
}

/// Advance past an identifier optionally wrapped in a matching delimiter
/// pair (backticks, double quotes, or square brackets). Returns the position
/// after the identifier and its closing delimiter, plus the byte range of
/// the bare identifier.
pub(crate) fn eat_delimited_ident(bytes: &[u8], pos: usize) -> Option<(usize, Range<usize>)> {
    if pos >= bytes.len() {
        return None;
    }
    if let Some(close) = closing_delimiter(bytes[pos]) {
        let start = pos + 1;
        let end = eat_ident(bytes, start)?;
        if end < bytes.len() && bytes[end] == close {
            return Some((end + 1, start..end));
        }
        return None;
    }
    let end = eat_ident(bytes, pos)?;
    Some((end, pos..end))
}

/// Strip identifier-quoting characters and surrounding whitespace from one
/// entry of a constraint column list.
pub(crate) fn clean_list_entry(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '`' | '"' | '[' | ']'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_keyword_case_insensitive() {
        let bytes = b"CrEaTe table";
        assert_eq!(eat_keyword(bytes, 0, "create"), Some(6));
        assert_eq!(eat_keyword(bytes, 0, "table"), None);
    }

    #[test]
    fn test_eat_keyword_seq() {
        let bytes = b"PRIMARY   KEY (id)";
        assert_eq!(eat_keyword_seq(bytes, 0, &["primary", "key"]), Some(13));
        assert_eq!(eat_keyword_seq(b"PRIMARYKEY", 0, &["primary", "key"]), None);
    }

    #[test]
    fn test_find_keyword_seq_unanchored() {
        let bytes = b"id INT not  null";
        let (at, end) = find_keyword_seq(bytes, 0, &["not", "null"]).unwrap();
        assert_eq!(&bytes[at..end], b"not  null");
    }

    #[test]
    fn test_delimited_ident_pairs() {
        let (end, range) = eat_delimited_ident(b"`users` (", 0).unwrap();
        assert_eq!((end, range), (7, 1..6));

        let (end, range) = eat_delimited_ident(b"[users]", 0).unwrap();
        assert_eq!((end, range), (7, 1..6));

        let (end, range) = eat_delimited_ident(b"users", 0).unwrap();
        assert_eq!((end, range), (5, 0..5));

        // Mismatched pair does not parse.
        assert_eq!(eat_delimited_ident(b"[users\"", 0), None);
        // Unterminated opener does not parse.
        assert_eq!(eat_delimited_ident(b"`users", 0), None);
    }

    #[test]
    fn test_clean_list_entry() {
        assert_eq!(clean_list_entry(" `user_id` "), "user_id");
        assert_eq!(clean_list_entry("[id]"), "id");
        assert_eq!(clean_list_entry("  "), "");
    }
}
