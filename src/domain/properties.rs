//! Raw key-value properties and the source abstraction that produces them

use crate::shared::error::AppResult;
use serde::Serialize;
use std::collections::HashMap;
use std::str::Chars;
use thiserror::Error;

/// Source of raw property strings
pub trait PropertySource {
    /// Load every key-value pair once
    fn load(&self) -> AppResult<RawProperties>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}

/// Malformed properties content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self { line, reason: reason.into() }
    }
}

/// Immutable key to raw string mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawProperties {
    values: HashMap<String, String>,
}

impl RawProperties {
    /// Parse `key=value` / `key:value` lines.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. A trailing
    /// unescaped backslash joins the next line. Later duplicates win.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut values = HashMap::new();
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let mut lines = content.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let line_number = index + 1;
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while has_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (raw_key, raw_value) = split_entry(&logical)
                .ok_or_else(|| ParseError::new(line_number, "expected a key=value pair"))?;

            let key = unescape(trim_unescaped_end(raw_key)).map_err(|reason| ParseError::new(line_number, reason))?;
            if key.is_empty() {
                return Err(ParseError::new(line_number, "empty property key"));
            }
            let value = unescape(raw_value.trim_start()).map_err(|reason| ParseError::new(line_number, reason))?;

            values.insert(key, value);
        }

        Ok(Self { values })
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some((&line[..i], &line[i + 1..])),
            _ => {}
        }
    }
    None
}

fn trim_unescaped_end(raw: &str) -> &str {
    let mut end = raw.len();
    while let Some(c) = raw[..end].chars().next_back() {
        if !c.is_whitespace() {
            break;
        }
        let start = end - c.len_utf8();
        // `\ ` keeps its space
        if raw[..start].chars().rev().take_while(|c| *c == '\\').count() % 2 == 1 {
            break;
        }
        end = start;
    }
    &raw[..end]
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let unit = read_utf16_unit(&mut chars)?;
                out.push(decode_unicode_escape(unit, &mut chars)?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_utf16_unit(chars: &mut Chars<'_>) -> Result<u16, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\u{} escape", hex));
    }
    u16::from_str_radix(&hex, 16).map_err(|_| format!("malformed \\u{} escape", hex))
}

/// Decode one `\uXXXX` unit, pairing a high surrogate with the escape after it
fn decode_unicode_escape(unit: u16, chars: &mut Chars<'_>) -> Result<char, String> {
    let unpaired = || format!("unpaired surrogate \\u{:04X}", unit);

    if !(0xD800..=0xDBFF).contains(&unit) {
        return char::from_u32(u32::from(unit)).ok_or_else(unpaired);
    }

    let low = match (chars.next(), chars.next()) {
        (Some('\\'), Some('u')) => read_utf16_unit(chars)?,
        _ => return Err(unpaired()),
    };
    char::decode_utf16([unit, low])
        .next()
        .and_then(Result::ok)
        .ok_or_else(unpaired)
}
