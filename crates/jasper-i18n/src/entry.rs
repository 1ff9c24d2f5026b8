//! Translation entries as handed over by the report lookup.

use serde::{Deserialize, Serialize};

/// One translated string of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Locale tag, e.g. `en` or `es_ES`.
    pub language: String,
    /// Original string; entries without one are never written.
    #[serde(default)]
    pub source: Option<String>,
    /// Translated string; entries without one are never written.
    #[serde(default)]
    pub value: Option<String>,
}

impl TranslationEntry {
    /// Creates a complete entry.
    pub fn new(
        language: impl Into<String>,
        source: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            source: Some(source.into()),
            value: Some(value.into()),
        }
    }

    /// Creates an entry that may lack its source or value.
    pub fn partial(
        language: impl Into<String>,
        source: Option<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            language: language.into(),
            source,
            value,
        }
    }

    /// The `key=value` pair this entry contributes, if any.
    ///
    /// An empty value falls back to the source string.
    pub fn property(&self) -> Option<(&str, &str)> {
        let source = self.source.as_deref()?;
        let value = self.value.as_deref()?;
        if value.is_empty() {
            Some((source, source))
        } else {
            Some((source, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_requires_source_and_value() {
        assert_eq!(
            TranslationEntry::new("en", "Hello", "Bonjour").property(),
            Some(("Hello", "Bonjour"))
        );
        assert_eq!(
            TranslationEntry::partial("en", None, Some("x".into())).property(),
            None
        );
        assert_eq!(
            TranslationEntry::partial("en", Some("x".into()), None).property(),
            None
        );
    }

    #[test]
    fn test_empty_value_falls_back_to_source() {
        assert_eq!(
            TranslationEntry::new("en", "Invoice", "").property(),
            Some(("Invoice", "Invoice"))
        );
    }

    #[test]
    fn test_deserialize_with_null_fields() {
        let entry: TranslationEntry =
            serde_json::from_str(r#"{"language":"fr","source":null}"#).unwrap();
        assert_eq!(entry.language, "fr");
        assert!(entry.source.is_none());
        assert!(entry.value.is_none());
    }
}
