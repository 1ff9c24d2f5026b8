//! Splitting translation entries into per-language groups.

use crate::entry::TranslationEntry;
use crate::properties::PropertyTable;
use jasper_common::GroupingPolicy;
use std::collections::HashMap;
use tracing::warn;

/// Entries sharing one language, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationGroup<'a> {
    /// Language tag of every entry in the group.
    pub language: &'a str,
    /// Entries of the group, including ones that will be filtered out.
    pub entries: Vec<&'a TranslationEntry>,
}

impl<'a> TranslationGroup<'a> {
    fn new(language: &'a str) -> Self {
        Self {
            language,
            entries: Vec::new(),
        }
    }

    /// Builds the key/value table for this group.
    ///
    /// Entries without a source or value are skipped. When a source string
    /// repeats, its last value wins.
    pub fn properties(&self) -> PropertyTable {
        let mut table = PropertyTable::new();
        for (source, value) in self.entries.iter().filter_map(|e| e.property()) {
            table.insert(source, value);
        }
        table
    }
}

/// Groups `entries` by language according to `policy`.
///
/// Entries with an empty language tag cannot name a properties file and are
/// dropped with a warning.
pub fn group_translations(
    entries: &[TranslationEntry],
    policy: GroupingPolicy,
) -> Vec<TranslationGroup<'_>> {
    let mut groups: Vec<TranslationGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let language = entry.language.as_str();
        if language.is_empty() {
            warn!(source = ?entry.source, "Skipping translation without language");
            continue;
        }

        match policy {
            GroupingPolicy::Contiguous => {
                let starts_group = groups.last().map_or(true, |g| g.language != language);
                if starts_group {
                    groups.push(TranslationGroup::new(language));
                }
                if let Some(group) = groups.last_mut() {
                    group.entries.push(entry);
                }
            }
            GroupingPolicy::ByLanguage => {
                let slot = *index.entry(language).or_insert_with(|| {
                    groups.push(TranslationGroup::new(language));
                    groups.len() - 1
                });
                groups[slot].entries.push(entry);
            }
        }
    }

    groups
}
