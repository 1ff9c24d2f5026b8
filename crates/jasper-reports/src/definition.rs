//! Report definitions supplied by the report lookup.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A stored report template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Identity of the report, used as the cache key.
    pub name: String,
    /// Raw template content.
    pub content: Vec<u8>,
    /// Name of the template file; only its last path component is used.
    pub file_name: String,
}

impl ReportDefinition {
    /// Creates a definition.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            file_name: file_name.into(),
        }
    }

    /// Whether there is any template content.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Content as text, replacing invalid UTF-8.
    pub fn content_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// File name the template is written under, e.g. `sale.jrxml` for
    /// `reports/sale.jrxml`.
    pub fn template_file_name(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
    }

    /// Prefix of the properties files: the template file name up to its
    /// first `.`.
    pub fn base_name(&self) -> Option<&str> {
        self.template_file_name()
            .and_then(|name| name.split('.').next())
    }
}
