use safeincloud2pass::*;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Recording store standing in for pass; clones share the same entry list.
#[derive(Default, Clone)]
struct RecordingStore {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl SecretStore for RecordingStore {
    fn insert(&self, path: &str, entry: &str) -> ImportResult<()> {
        self.entries.borrow_mut().push((path.to_string(), entry.to_string()));
        Ok(())
    }
}

const EXPORT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<database>
    <label id="L1" name="Finance"/>
    <label id="L2" name="Web Sites"/>
    <card title="Bank (Sample)" template="false" deleted="false">
        <label_id>L1</label_id>
        <field name="Login" type="text">demo</field>
        <field name="Password" type="password">demo-pass</field>
    </card>
    <card title="My Bank" template="false" deleted="false">
        <label_id>L1</label_id>
        <field name="Login" type="text">alice</field>
        <field name="Password" type="password">s3cr3t</field>
        <field name="URL" type="website">https://bank.example</field>
    </card>
    <card title="Email" label_id="L9">
        <field name="User" type="text">bob</field>
        <field name="Pass" type="password">hunter2</field>
        <field name="Pass2" type="password">hunter2</field>
    </card>
    <card title="Login Template" template="true"/>
    <card title="Old Site" deleted="true">
        <field name="Password" type="password">gone</field>
    </card>
</database>"#;

#[test]
fn test_default_run_imports_only_real_live_cards() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let store = RecordingStore::default();
    let summary = ImportService::new(store.clone(), ImportOptions::default()).run(&db);

    assert_eq!(summary.total, 5);
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.failed, 0);

    let entries = store.entries.borrow();
    let paths: Vec<_> = entries.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["Finance/My_Bank", "Email"]);
}

#[test]
fn test_sample_card_never_reaches_the_store() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let store = RecordingStore::default();
    ImportService::new(store.clone(), ImportOptions::default()).run(&db);

    let entries = store.entries.borrow();
    assert!(
        entries.iter().all(|(p, e)| !p.contains("Sample") && !e.contains("demo-pass")),
        "sample card leaked into the store: {:?}",
        entries
    );
}

#[test]
fn test_labeled_card_gets_group_prefixed_path() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let card = db.cards.iter().find(|c| c.title == "My Bank").unwrap();

    assert_eq!(converter::resolve_path(card, &db.labels), "Finance/My_Bank");
    assert_eq!(
        converter::format_entry(card),
        "s3cr3t\nLogin: alice\nURL: https://bank.example\n"
    );
}

#[test]
fn test_unresolved_label_falls_back_to_bare_title() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let card = db.cards.iter().find(|c| c.title == "Email").unwrap();

    // label_id L9 matches nothing in the label set
    assert_eq!(converter::resolve_path(card, &db.labels), "Email");
}

#[test]
fn test_duplicate_value_password_is_dropped_from_entry() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let card = db.cards.iter().find(|c| c.title == "Email").unwrap();

    assert_eq!(converter::format_entry(card), "hunter2\nUser: bob\n");
}

#[test]
fn test_include_flags_import_everything() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let options = ImportOptions {
        include_samples: true,
        include_templates: true,
        include_deleted: true,
        dry_run: false,
    };
    let store = RecordingStore::default();
    let summary = ImportService::new(store.clone(), options).run(&db);

    assert_eq!(summary.imported, 5);
    assert_eq!(summary.skipped, 0);
    assert_eq!(store.entries.borrow().len(), 5);
}

#[test]
fn test_dry_run_reports_without_storing() {
    let db = xml_parser::parse_database(EXPORT).unwrap();
    let options = ImportOptions { dry_run: true, ..Default::default() };
    let store = RecordingStore::default();
    let summary = ImportService::new(store.clone(), options).run(&db);

    assert_eq!(summary.planned, 2);
    assert_eq!(summary.imported, 0);
    assert!(store.entries.borrow().is_empty());
}

#[test]
fn test_export_parses_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let db = xml_parser::parse_database(&content).unwrap();
    assert_eq!(db.cards.len(), 5);
    assert_eq!(db.labels.len(), 2);
}

#[test]
fn test_malformed_export_is_a_load_error() {
    let err = xml_parser::parse_database("<database><card></database>").unwrap_err();
    assert!(matches!(err, ImportError::XmlParse(_)));
}
