//! Line oriented parser for the `[Desktop Entry]` group of a desktop file.

use crate::error::ParseError;
use crate::text::{strip_leading, strip_trailing};

pub const GROUP_HEADER: &str = "[Desktop Entry]";

/// Default cap on pairs per file.
pub const MAX_KEYS: usize = 1000;

/// One `key=value` line, borrowed from the file's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Parsed pairs of one file, in file order. Duplicate keys are kept.
#[derive(Debug, Default)]
pub struct KeyValues<'a> {
    pairs: Vec<KeyValue<'a>>,
}

impl<'a> KeyValues<'a> {
    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs.iter().find(|kv| kv.key == key).map(|kv| kv.value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyValue<'a>> {
        self.pairs.iter()
    }
}

/// Splits `text` into key/value pairs.
///
/// Empty lines and lines starting with `#` are skipped everywhere. The first
/// remaining line must be exactly `[Desktop Entry]`. After it, the first line
/// without a `=` ends the group and parsing stops successfully; this is also
/// how a following `[Desktop Action ...]` group is cut off.
pub fn parse(text: &str, max_keys: usize) -> Result<KeyValues<'_>, ParseError> {
    let mut pairs = Vec::new();
    let mut group_found = false;

    for line in text.split('\n') {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !group_found {
            if line != GROUP_HEADER {
                return Err(ParseError::MissingGroupHeader);
            }
            group_found = true;
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            break;
        };

        if pairs.len() == max_keys {
            return Err(ParseError::TooManyKeys { limit: max_keys });
        }

        pairs.push(KeyValue {
            key: strip_trailing(key),
            value: strip_leading(value),
        });
    }

    if !group_found {
        return Err(ParseError::MissingGroupHeader);
    }

    Ok(KeyValues { pairs })
}
