//! Port listing parser.
//!
//! Turns the line-oriented panel description into a table of [`PortRecord`]s.
//! Sub-modules:
//!
//! - [`tokenizer`] – quote-aware whitespace splitting
//! - [`attributes`] – panel attribute strings (`name="Rack 1" ports=24 …`)
//!
//! Each line has the form
//!
//! ```text
//! <port> <label-or-"quoted label"> [#color] [comment...]
//! ```
//!
//! Lines that do not start with a port number are comments and are skipped.

pub mod attributes;
pub mod tokenizer;

pub use attributes::{ConfigOverrides, parse_attributes, resolve_config};
pub use tokenizer::{join_fields, tokenize, trim_quotes, unquote};

use crate::model::{LineError, LineErrorKind, PortRecord};
use indexmap::IndexMap;
use serde::Serialize;

/// Result of parsing one panel body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedPanel {
    /// Records keyed by port. A port documented twice keeps its first position
    /// in the table but the values of the last line.
    pub records: IndexMap<u32, PortRecord>,
    /// Lines that looked like port lines but could not be parsed, in input order.
    pub errors: Vec<LineError>,
}

impl ParsedPanel {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.errors.is_empty()
    }
}

/// Parse a whole panel body. Never fails; bad lines are collected in
/// [`ParsedPanel::errors`] and the scan continues.
pub fn parse_lines(text: &str) -> ParsedPanel {
    let (first_line, body) = trim_blank_edges(text);
    let mut parsed = ParsedPanel::default();
    if body.is_empty() {
        return parsed;
    }

    for (idx, line) in body.split('\n').enumerate() {
        let line_number = first_line + idx;
        if !starts_with_port_number(line) {
            continue;
        }
        match parse_line(line) {
            Ok(record) => {
                if let Some(previous) = parsed.records.insert(record.port, record) {
                    tracing::debug!(
                        port = previous.port,
                        line = line_number,
                        "port documented more than once, keeping the later line"
                    );
                }
            }
            Err(kind) => {
                tracing::debug!(line = line_number, ?kind, "skipping malformed port line");
                parsed.errors.push(LineError {
                    line_number,
                    line: line.trim_end_matches('\r').to_string(),
                    kind,
                });
            }
        }
    }
    parsed
}

/// Parse a single port line that is already known to start with a digit.
pub fn parse_line(line: &str) -> Result<PortRecord, LineErrorKind> {
    let tokens = tokenize(line);
    let Some((port_token, fields)) = tokens.split_first() else {
        return Err(LineErrorKind::Empty);
    };
    let port: u32 = port_token
        .parse()
        .map_err(|_| LineErrorKind::InvalidPort)?;

    let label = fields.first().map(|t| trim_quotes(t)).unwrap_or_default();

    // The colour is optional and only recognised in third position.
    let (color, comment_tokens) = match fields.get(1) {
        Some(tok) if tok.starts_with('#') => (Some(tok.to_string()), &fields[2..]),
        Some(_) => (None, &fields[1..]),
        None => (None, &fields[..0]),
    };
    let comment = comment_tokens.join(" ");

    Ok(PortRecord {
        port,
        label: label.to_string(),
        color,
        comment: trim_quotes(&comment).to_string(),
    })
}

fn starts_with_port_number(line: &str) -> bool {
    line.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

/// Strip leading whitespace and trailing line breaks. Returns the 1-based
/// number of the first remaining line along with the remaining text.
fn trim_blank_edges(text: &str) -> (usize, &str) {
    let body = text.trim_end_matches(['\r', '\n']);
    let trimmed = body.trim_start();
    let skipped = &body[..body.len() - trimmed.len()];
    let first_line = 1 + skipped.matches('\n').count();
    (first_line, trimmed)
}
