//! Integration tests for jasper-i18n crate.
//!
//! These tests write real properties files and read them back.

use jasper_common::test_utils::{init_test_logging, translation_fixtures};
use jasper_common::{GroupingPolicy, PropertiesEncoding};
use jasper_i18n::{
    escape_property_text, group_translations, read_properties, unescape_property_text,
    PropertiesWriter, PropertyTable, TranslationEntry,
};
use proptest::prelude::*;
use std::fs;

fn to_entries(raw: Vec<(&str, &str, &str)>) -> Vec<TranslationEntry> {
    raw.into_iter()
        .map(|(l, s, v)| TranslationEntry::new(l, s, v))
        .collect()
}

#[test]
fn test_group_written_and_read_back() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let entries = to_entries(translation_fixtures::sorted_by_language());
    let groups = group_translations(&entries, GroupingPolicy::ByLanguage);
    let writer = PropertiesWriter::new(PropertiesEncoding::Utf8);

    let en_path = dir.path().join("sale_en.properties");
    writer.write(&en_path, &groups[0].properties()).unwrap();

    assert_eq!(
        fs::read_to_string(&en_path).unwrap(),
        "Hello=Bonjour\nBye=Au\\ revoir\n"
    );
    assert_eq!(
        read_properties(&en_path, PropertiesEncoding::Utf8).unwrap(),
        vec![
            ("Hello".to_string(), "Bonjour".to_string()),
            ("Bye".to_string(), "Au revoir".to_string()),
        ]
    );
}

#[test]
fn test_latin1_file_is_single_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sale_fr.properties");
    let mut table = PropertyTable::new();
    table.insert("Total", "Total dû");

    PropertiesWriter::new(PropertiesEncoding::Latin1)
        .write(&path, &table)
        .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"Total=Total\\ d\xFB\n".to_vec());
    assert_eq!(
        read_properties(&path, PropertiesEncoding::Latin1).unwrap(),
        vec![("Total".to_string(), "Total dû".to_string())]
    );
}

#[test]
fn test_entries_without_source_or_value_are_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let entries = vec![
        TranslationEntry::new("en", "Kept", "Yes"),
        TranslationEntry::partial("en", None, Some("orphan".into())),
        TranslationEntry::partial("en", Some("Untranslated".into()), None),
    ];
    let groups = group_translations(&entries, GroupingPolicy::ByLanguage);
    let path = dir.path().join("r_en.properties");
    PropertiesWriter::default()
        .write(&path, &groups[0].properties())
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Kept=Yes\n");
    assert!(!text.contains("orphan"));
    assert!(!text.contains("Untranslated"));
}

proptest! {
    #[test]
    fn prop_escape_round_trip(s in "[a-zA-Z0-9 :\\\\éü]{0,40}") {
        prop_assert_eq!(unescape_property_text(&escape_property_text(&s)), s);
    }

    #[test]
    fn prop_file_round_trip(
        key in "[a-zA-Z0-9 :]{1,20}",
        value in "[a-zA-Z0-9 :=]{1,20}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p_en.properties");
        let mut table = PropertyTable::new();
        table.insert(&key, &value);
        PropertiesWriter::new(PropertiesEncoding::Utf8).write(&path, &table).unwrap();

        let pairs = read_properties(&path, PropertiesEncoding::Utf8).unwrap();
        prop_assert_eq!(pairs, vec![(key, value)]);
    }
}
