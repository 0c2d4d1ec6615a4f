//! Quote-aware whitespace splitting.
//!
//! A token is either a double-quoted span (backslash escapes the next
//! character) or a maximal run of non-whitespace characters. Tokens are
//! returned as raw slices of the input, quotes and escapes included.
//!
//! The scanner is a single left-to-right pass with two states: between tokens,
//! and inside a bare run. Quoted spans are consumed in one step by
//! [`scan_quoted`]; when a quote is never closed the scanner falls back to a
//! bare run starting at the quote.

/// Split `line` into raw tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let len = if rest.starts_with('"') {
            scan_quoted(rest).unwrap_or_else(|| bare_len(rest))
        } else {
            bare_len(rest)
        };
        tokens.push(&rest[..len]);
        rest = &rest[len..];
    }
    tokens
}

/// Byte length of the quoted span at the start of `s` (which must begin with
/// `"`), including both quotes. `None` if the quote is never closed.
pub(crate) fn scan_quoted(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, '"')) => {}
        _ => return None,
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                // A trailing lone backslash leaves the span unterminated.
                chars.next()?;
            }
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Byte length of the run of non-whitespace characters at the start of `s`.
fn bare_len(s: &str) -> usize {
    s.find(char::is_whitespace).unwrap_or(s.len())
}

/// Strip any run of single or double quotes from both ends.
pub fn trim_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}

/// Rebuild a line from field values such that [`tokenize`] yields the same
/// fields back after [`unquote`]: fields that are empty, contain whitespace or
/// start with a quote are quoted, with embedded quotes and backslashes escaped.
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let field = field.as_ref();
        if field.is_empty() || field.starts_with('"') || field.contains(char::is_whitespace) {
            out.push('"');
            for c in field.chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out
}

/// Inverse of the quoting done by [`join_fields`]: strip the surrounding
/// quotes of a quoted token and resolve backslash escapes. Bare tokens are
/// returned unchanged.
pub fn unquote(token: &str) -> String {
    let Some(inner) = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .filter(|_| scan_quoted(token) == Some(token.len()))
    else {
        return token.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
