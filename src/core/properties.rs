//! Properties type.
//!
//! Parses and renders the line-oriented `key=value` format read by
//! `java.util.Properties.load(InputStream)`, which is how Gradle scripts
//! consume `key.properties`.

use std::fmt;
use std::path::Path;

use crate::error::PropertiesError;

/// A parsed properties file.
///
/// Entries keep file order. Lookups return the last assignment of a key,
/// matching how repeated keys overwrite each other on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Read and parse a properties file.
    ///
    /// The file is decoded as ISO-8859-1, the encoding the stream-based
    /// loader assumes. Non-Latin-1 characters must be written as `\uXXXX`.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::ReadFile` if the file cannot be read, or
    /// `PropertiesError::InvalidEscape` on a malformed `\u` escape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropertiesError> {
        let bytes = std::fs::read(path.as_ref()).map_err(PropertiesError::ReadFile)?;
        let contents: String = bytes.iter().map(|&b| char::from(b)).collect();
        Self::parse(&contents)
    }

    /// Parse properties from text.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::InvalidEscape` on a malformed `\u` escape.
    pub fn parse(contents: &str) -> Result<Self, PropertiesError> {
        let mut entries = Vec::new();

        for (line_no, line) in logical_lines(contents) {
            let (key, value) = split_entry(&line);
            entries.push((unescape(key, line_no)?, unescape(value, line_no)?));
        }

        Ok(Self { entries })
    }

    /// Create from raw key-value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in file order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}={}", escape(key, true), escape(value, false))?;
        }
        Ok(())
    }
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split text into natural lines, each ended by `\n`, `\r` or `\r\n`.
fn natural_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(&['\r', '\n'][..]) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Join natural lines into logical lines, dropping blanks and comments.
///
/// Each logical line carries the number of the natural line it starts on.
fn logical_lines(contents: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in natural_lines(contents).enumerate() {
        let line = raw.trim_start_matches(is_blank);

        let (start, mut acc) = match pending.take() {
            Some(open) => open,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        if ends_with_continuation(line) {
            acc.push_str(&line[..line.len() - 1]);
            pending = Some((start, acc));
        } else {
            acc.push_str(line);
            lines.push((start, acc));
        }
    }

    if let Some(open) = pending {
        lines.push(open);
    }

    lines
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut has_separator = false;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                has_separator = true;
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
    // Separator characters are all single-byte.
    let mut rest = line
        .get(key_end + 1..)
        .unwrap_or_default()
        .trim_start_matches(is_blank);

    if !has_separator {
        if let Some(stripped) = rest.strip_prefix(&['=', ':'][..]) {
            rest = stripped.trim_start_matches(is_blank);
        }
    }

    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(decode_unicode(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u32, PropertiesError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PropertiesError::InvalidEscape {
            line,
            reason: format!("malformed \\u escape '\\u{}'", hex),
        });
    }
    u32::from_str_radix(&hex, 16).map_err(|e| PropertiesError::InvalidEscape {
        line,
        reason: e.to_string(),
    })
}

/// Decode the `XXXX` after `\u`, joining UTF-16 surrogate pairs.
fn decode_unicode(chars: &mut std::str::Chars<'_>, line: usize) -> Result<char, PropertiesError> {
    let unit = read_hex4(chars, line)?;

    let code = if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        let low = match (lookahead.next(), lookahead.next()) {
            (Some('\\'), Some('u')) => read_hex4(&mut lookahead, line)?,
            _ => 0,
        };
        if !(0xDC00..0xE000).contains(&low) {
            return Err(PropertiesError::InvalidEscape {
                line,
                reason: format!("unpaired surrogate \\u{:04X}", unit),
            });
        }
        *chars = lookahead;
        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
    } else {
        unit
    };

    char::from_u32(code).ok_or_else(|| PropertiesError::InvalidEscape {
        line,
        reason: format!("invalid code point \\u{:04X}", code),
    })
}

/// Escape a key or value so it loads back unchanged.
///
/// Keys escape every space; values only a leading one. Anything outside
/// printable ASCII is written as `\uXXXX`.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, ch) in text.chars().enumerate() {
        match ch {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }

    out
}
