//! Reading and writing `.properties` files.
//!
//! One `key=value` pair per line with `\n` line endings. `:` and space are
//! escaped in both key and value. There is no comment syntax, no line
//! continuation and no `\uXXXX` escaping.

use crate::encoding::{decode_text, encode_text};
use crate::escape::{escape_property_text, unescape_property_text};
use jasper_common::{JasperError, LanguageSuffix, PropertiesEncoding, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Insertion ordered key/value table with unique keys.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    pairs: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl PropertyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a pair.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(&pos) = self.positions.get(key) {
            self.pairs[pos].1 = value.to_string();
        } else {
            self.positions.insert(key.to_string(), self.pairs.len());
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&pos| self.pairs[pos].1.as_str())
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the table, returning its pairs in order.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Serializes the table as escaped `key=value` lines.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for (key, value) in self.iter() {
            text.push_str(&escape_property_text(key));
            text.push('=');
            text.push_str(&escape_property_text(value));
            text.push('\n');
        }
        text
    }
}

/// A properties file written for one translation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesFile {
    /// Location of the file.
    pub path: PathBuf,
    /// Language tag of the group that produced the file.
    pub language: String,
    /// Unescaped pairs written, in order.
    pub entries: Vec<(String, String)>,
}

/// File name of the properties file for `base` and `language`.
pub fn properties_file_name(base: &str, language: &str, suffix: LanguageSuffix) -> String {
    format!("{}_{}.properties", base, suffix.apply(language))
}

/// Writes property tables using one text encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesWriter {
    encoding: PropertiesEncoding,
}

impl PropertiesWriter {
    /// Creates a writer for `encoding`.
    pub const fn new(encoding: PropertiesEncoding) -> Self {
        Self { encoding }
    }

    /// Encoding used by this writer.
    pub const fn encoding(&self) -> PropertiesEncoding {
        self.encoding
    }

    /// Writes `table` to `path`, replacing any existing file.
    pub fn write(&self, path: &Path, table: &PropertyTable) -> Result<()> {
        let text = table.render();
        let bytes = encode_text(&text, self.encoding)
            .ok_or_else(|| JasperError::encoding(self.encoding.label(), path))?;

        fs::write(path, bytes)?;
        debug!(path = %path.display(), pairs = table.len(), encoding = %self.encoding, "Wrote properties file");
        Ok(())
    }
}

/// Parses properties text into unescaped pairs.
///
/// Each non-empty line is split at its first `=`; a line without `=` yields
/// a key with an empty value.
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            (unescape_property_text(key), unescape_property_text(value))
        })
        .collect()
}

/// Reads a properties file written with `encoding`.
pub fn read_properties(path: &Path, encoding: PropertiesEncoding) -> Result<Vec<(String, String)>> {
    let bytes = fs::read(path)?;
    let text = decode_text(&bytes, encoding)
        .ok_or_else(|| JasperError::encoding(encoding.label(), path))?;
    Ok(parse_properties(&text))
}
