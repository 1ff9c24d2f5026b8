//! Common type definitions shared by the configuration and i18n crates.

use crate::error::JasperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text encoding used when writing `.properties` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertiesEncoding {
    /// UTF-8, the default.
    #[default]
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8")]
    Utf8,
    /// Single byte ISO-8859-1.
    #[serde(rename = "latin1", alias = "latin-1", alias = "iso-8859-1")]
    Latin1,
}

impl PropertiesEncoding {
    /// Canonical label of the encoding.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for PropertiesEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertiesEncoding {
    type Err = JasperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            other => Err(JasperError::config(format!(
                "Unsupported properties encoding: {other}"
            ))),
        }
    }
}

/// How translation entries are split into per-language groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingPolicy {
    /// One group per language, ordered by first appearance.
    #[default]
    ByLanguage,
    /// A new group starts whenever the language differs from the previous
    /// entry, so an unsorted input yields several groups for one language.
    Contiguous,
}

impl FromStr for GroupingPolicy {
    type Err = JasperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "by_language" | "by-language" => Ok(Self::ByLanguage),
            "contiguous" => Ok(Self::Contiguous),
            other => Err(JasperError::config(format!(
                "Unsupported grouping policy: {other}"
            ))),
        }
    }
}

/// Which part of a language tag ends up in a properties file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSuffix {
    /// The complete tag, e.g. `sale_es_ES.properties`.
    #[default]
    Full,
    /// The first two characters, e.g. `sale_es.properties`.
    Primary,
}

impl LanguageSuffix {
    /// Returns the portion of `tag` used in file names.
    pub fn apply(self, tag: &str) -> &str {
        match self {
            Self::Full => tag,
            Self::Primary => match tag.char_indices().nth(2) {
                Some((end, _)) => &tag[..end],
                None => tag,
            },
        }
    }
}

impl FromStr for LanguageSuffix {
    type Err = JasperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "primary" => Ok(Self::Primary),
            other => Err(JasperError::config(format!(
                "Unsupported language suffix: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8".parse::<PropertiesEncoding>().unwrap(), PropertiesEncoding::Utf8);
        assert_eq!(
            "iso-8859-1".parse::<PropertiesEncoding>().unwrap(),
            PropertiesEncoding::Latin1
        );
        assert!("ebcdic".parse::<PropertiesEncoding>().is_err());
    }

    #[test]
    fn test_encoding_serde_labels() {
        let parsed: PropertiesEncoding = serde_json::from_str("\"iso-8859-1\"").unwrap();
        assert_eq!(parsed, PropertiesEncoding::Latin1);
        assert_eq!(
            serde_json::to_string(&PropertiesEncoding::Utf8).unwrap(),
            "\"utf-8\""
        );
    }

    #[test]
    fn test_language_suffix() {
        assert_eq!(LanguageSuffix::Full.apply("es_ES"), "es_ES");
        assert_eq!(LanguageSuffix::Primary.apply("es_ES"), "es");
        assert_eq!(LanguageSuffix::Primary.apply("e"), "e");
        assert_eq!(LanguageSuffix::Primary.apply("ñu_X"), "ñu");
    }

    #[test]
    fn test_grouping_policy_default() {
        assert_eq!(GroupingPolicy::default(), GroupingPolicy::ByLanguage);
        assert_eq!(
            "contiguous".parse::<GroupingPolicy>().unwrap(),
            GroupingPolicy::Contiguous
        );
    }
}
