//! # Jasper I18n
//!
//! Translation tables for Jasper report templates.
//!
//! Translations are supplied as `(language, source, value)` entries, split
//! into per-language groups and written next to the report template as Java
//! `.properties` files:
//!
//! ```rust
//! use jasper_i18n::{escape_property_text, group_translations, TranslationEntry};
//! use jasper_common::GroupingPolicy;
//!
//! let entries = vec![
//!     TranslationEntry::new("en", "Total due:", "Amount due:"),
//!     TranslationEntry::new("fr", "Total due:", "Montant dû :"),
//! ];
//! let groups = group_translations(&entries, GroupingPolicy::ByLanguage);
//! assert_eq!(groups.len(), 2);
//! assert_eq!(escape_property_text("Total due:"), "Total\\ due\\:");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod encoding;
pub mod entry;
pub mod escape;
pub mod grouping;
pub mod properties;

pub use encoding::{decode_text, encode_text};
pub use entry::TranslationEntry;
pub use escape::{escape_property_text, unescape_property_text};
pub use grouping::{group_translations, TranslationGroup};
pub use properties::{
    parse_properties, properties_file_name, read_properties, PropertiesFile, PropertiesWriter,
    PropertyTable,
};
