//! Java properties format handler
//!
//! Decoding follows the `java.util.Properties` line grammar: `#`/`!`
//! comments, backslash line continuations, `=`/`:`/whitespace separators and
//! backslash escapes including `\uXXXX`. Encoding emits `key=value` lines
//! that decode back to the same mapping.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::mapping::ConfigMapping;

const FORMAT: &str = "properties";

/// Controls how [`PropertiesHandler::stringify_with`] renders text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Emit characters above `unicode_threshold` as `\uXXXX`.
    pub escape_unicode: bool,
    pub unicode_threshold: u32,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            escape_unicode: true,
            unicode_threshold: 0x7E,
        }
    }
}

impl WriterOptions {
    /// Options that leave non-ASCII characters as UTF-8.
    pub fn passthrough() -> Self {
        Self {
            escape_unicode: false,
            ..Self::default()
        }
    }
}

/// Decoder and encoder for `.properties` files
#[derive(Debug, Default)]
pub struct PropertiesHandler;

impl PropertiesHandler {
    pub fn new() -> Self {
        Self
    }

    /// Render a mapping with the default (ASCII-safe) options.
    pub fn stringify(&self, mapping: &ConfigMapping) -> String {
        self.stringify_with(mapping, &WriterOptions::default())
    }

    /// Render a mapping as one `key=value` line per entry, in mapping order.
    pub fn stringify_with(&self, mapping: &ConfigMapping, options: &WriterOptions) -> String {
        let mut out = String::new();
        for (key, value) in mapping {
            escape_into(&mut out, key, true, options);
            out.push('=');
            escape_into(&mut out, value, false, options);
            out.push('\n');
        }
        out
    }
}

impl FormatHandler for PropertiesHandler {
    fn format(&self) -> Format {
        Format::Properties
    }

    fn decode(&self, source: &str) -> Result<ConfigMapping> {
        let mut mapping = ConfigMapping::new();
        for (line_no, logical) in logical_lines(source) {
            let (raw_key, raw_value) = split_key_value(&logical);
            let key = unescape(raw_key, line_no)?;
            let value = unescape(raw_value, line_no)?;
            mapping.insert(key, value);
        }
        Ok(mapping)
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C')
}

/// Split on `\n`, `\r\n` or `\r`.
fn physical_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .flat_map(|l| l.strip_suffix('\r').unwrap_or(l).split('\r'))
}

/// True when the line ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Join continued physical lines and drop blanks and comments.
///
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(source: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in physical_lines(source).enumerate() {
        let line = raw.trim_start_matches(is_blank);

        let (start, mut text) = match pending.take() {
            Some((start, text)) => (start, text),
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if continues(line) {
            text.push_str(&line[..line.len() - 1]);
            pending = Some((start, text));
        } else {
            text.push_str(line);
            result.push((start, text));
        }
    }

    // Continuation on the last line of input
    if let Some(last) = pending {
        result.push(last);
    }
    result
}

/// Split a logical line into its still-escaped key and value.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut separator = None;
    let mut chars = line.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '=' | ':' => {
                key_end = i;
                separator = Some(c);
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    match separator {
        Some(sep) => rest = &rest[sep.len_utf8()..],
        None => {
            rest = rest.trim_start_matches(is_blank);
            if let Some(stripped) = rest.strip_prefix(['=', ':']) {
                rest = stripped;
            }
        }
    }
    (key, rest.trim_start_matches(is_blank))
}

/// Resolve backslash escapes in a key or value.
fn unescape(raw: &str, line: usize) -> Result<String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let unit = read_hex4(&mut chars, line)?;
                out.push(decode_unit(unit, &mut chars, line)?);
            }
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0C'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_hex4(chars: &mut impl Iterator<Item = char>, line: usize) -> Result<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| Error::parse(FORMAT, line, "malformed \\uXXXX escape"))?;
        unit = unit * 16 + digit as u16;
    }
    Ok(unit)
}

/// Turn a UTF-16 unit into a char, consuming the low half of a surrogate pair.
fn decode_unit(unit: u16, chars: &mut impl Iterator<Item = char>, line: usize) -> Result<char> {
    match unit {
        0xD800..=0xDBFF => {
            if chars.next() != Some('\\') || chars.next() != Some('u') {
                return Err(Error::parse(FORMAT, line, "unpaired surrogate in \\u escape"));
            }
            let low = read_hex4(chars, line)?;
            char::decode_utf16([unit, low])
                .next()
                .and_then(|r| r.ok())
                .ok_or_else(|| Error::parse(FORMAT, line, "invalid surrogate pair in \\u escape"))
        }
        0xDC00..=0xDFFF => Err(Error::parse(
            FORMAT,
            line,
            "unpaired surrogate in \\u escape",
        )),
        _ => char::from_u32(u32::from(unit))
            .ok_or_else(|| Error::parse(FORMAT, line, "invalid \\u escape")),
    }
}

/// Append `text` to `out` with properties escaping applied.
fn escape_into(out: &mut String, text: &str, is_key: bool, options: &WriterOptions) {
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0C' => out.push_str("\\f"),
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if is_key && i == 0 => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20
                || (options.escape_unicode && (c as u32) > options.unicode_threshold) =>
            {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_counts_backslashes() {
        assert!(continues("a=b\\"));
        assert!(!continues("a=b\\\\"));
        assert!(continues("a=b\\\\\\"));
        assert!(!continues("a=b"));
    }

    #[test]
    fn test_split_key_value_separators() {
        assert_eq!(split_key_value("a=b"), ("a", "b"));
        assert_eq!(split_key_value("a : b"), ("a", "b"));
        assert_eq!(split_key_value("a b"), ("a", "b"));
        assert_eq!(split_key_value("a\t=\tb"), ("a", "b"));
        assert_eq!(split_key_value("a==b"), ("a", "=b"));
        assert_eq!(split_key_value("a"), ("a", ""));
        assert_eq!(split_key_value(r"a\=b=c"), (r"a\=b", "c"));
    }

    #[test]
    fn test_physical_lines_mixed_terminators() {
        let lines: Vec<_> = physical_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_escape_supplementary_plane_as_surrogates() {
        let mut out = String::new();
        escape_into(&mut out, "😀", false, &WriterOptions::default());
        assert_eq!(out, "\\uD83D\\uDE00");
    }
}
