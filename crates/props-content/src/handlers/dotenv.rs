//! Dotenv format handler
//!
//! One `KEY=VALUE` assignment per line. Values may be wrapped in single or
//! double quotes; quoted values understand backslash escapes and may span
//! several lines. Malformed quoting is read leniently and never fails the
//! decode. `${KEY}` references are kept as literal text.

use crate::error::Result;
use crate::format::{Format, FormatHandler};
use crate::mapping::ConfigMapping;

/// Decoder for dotenv files
#[derive(Debug, Default)]
pub struct DotenvHandler;

impl DotenvHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for DotenvHandler {
    fn format(&self) -> Format {
        Format::Dotenv
    }

    fn decode(&self, source: &str) -> Result<ConfigMapping> {
        let lines: Vec<&str> = source.lines().collect();
        let mut mapping = ConfigMapping::new();
        let mut index = 0;

        while index < lines.len() {
            let line_no = index + 1;
            let trimmed = lines[index].trim_start();
            index += 1;
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let assignment = strip_export(trimmed);
            let Some((raw_key, rest)) = assignment.split_once('=') else {
                tracing::debug!(line = line_no, "skipping dotenv line without '='");
                continue;
            };

            let key = raw_key.trim();
            if key.is_empty() {
                tracing::debug!(line = line_no, "skipping dotenv line with empty key");
                continue;
            }

            let rest = rest.trim_start();
            let value = match rest.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let (value, consumed) = quoted_value(rest, quote, &lines[index..], line_no);
                    index += consumed;
                    value
                }
                _ => rest.trim_end().to_string(),
            };

            mapping.insert(key.to_string(), value);
        }

        Ok(mapping)
    }
}

/// Drop a leading `export` keyword as written in shell-sourced files.
fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

/// Byte offset of the first `quote` not preceded by a backslash escape.
fn find_quote(text: &str, quote: char) -> Option<usize> {
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

/// Nothing but whitespace or a `#` comment remains.
fn is_line_tail(text: &str) -> bool {
    let text = text.trim_start();
    text.is_empty() || text.starts_with('#')
}

/// Decode a value that starts with `quote`.
///
/// `rest` is the opening line from the quote on; `following` are the lines
/// after it. Returns the value and how many following lines it used.
///
/// A closing quote only counts when the line ends after it (optionally with
/// a `#` comment). Otherwise the outermost quotes of the line are stripped
/// when it ends in the same quote, or the line is read verbatim. A value
/// spans lines only when the opening line has no closing quote at all and
/// the first quote below it ends its line; no other lines are consumed.
fn quoted_value(rest: &str, quote: char, following: &[&str], line_no: usize) -> (String, usize) {
    let body = &rest[1..];

    if let Some(close) = find_quote(body, quote) {
        if is_line_tail(&body[close + 1..]) {
            return (unescape(&body[..close], quote), 0);
        }
        let whole = rest.trim_end();
        if whole.len() >= 2 && whole.ends_with(quote) {
            return (unescape(&whole[1..whole.len() - 1], quote), 0);
        }
        return (whole.to_string(), 0);
    }

    for (offset, next) in following.iter().enumerate() {
        let Some(close) = find_quote(next, quote) else {
            continue;
        };
        if !is_line_tail(&next[close + 1..]) {
            break;
        }
        let mut raw = body.to_string();
        for line in &following[..offset] {
            raw.push('\n');
            raw.push_str(line);
        }
        raw.push('\n');
        raw.push_str(&next[..close]);
        return (unescape(&raw, quote), offset + 1);
    }

    tracing::debug!(line = line_no, "unterminated {quote}-quoted value, reading it verbatim");
    (rest.trim_end().to_string(), 0)
}

/// Resolve backslash escapes inside a quoted value.
fn unescape(raw: &str, quote: char) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('\\') => value.push('\\'),
            Some(q) if q == quote => value.push(q),
            Some(other) => {
                value.push('\\');
                value.push(other);
            }
            None => value.push('\\'),
        }
    }
    value
}
