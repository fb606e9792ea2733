mod common;

use std::fs;

use common::temp_base;
use expense_core::{
    config::{JsonPreferenceStore, PreferenceStore, Preferences},
    currency::Currency,
};

#[test]
fn missing_file_yields_defaults() {
    let store = JsonPreferenceStore::with_base_dir(&temp_base());
    assert_eq!(store.load().unwrap(), Preferences::default());
    assert_eq!(store.currency().unwrap(), Currency::Rupee);
}

#[test]
fn currency_choice_persists_across_instances() {
    let base = temp_base();
    JsonPreferenceStore::with_base_dir(&base)
        .set_currency(Currency::Yen)
        .expect("save currency");

    let reopened = JsonPreferenceStore::with_base_dir(&base);
    assert_eq!(reopened.currency().unwrap(), Currency::Yen);

    let raw = fs::read_to_string(reopened.path()).unwrap();
    assert!(raw.contains("\"YEN\""), "unexpected file contents: {raw}");
    assert!(!reopened.path().with_extension("json.tmp").exists());
}

#[test]
fn generated_user_id_is_stored_once() {
    let base = temp_base();
    let store = JsonPreferenceStore::with_base_dir(&base);
    let first = store.user_id(None).unwrap();
    let second = JsonPreferenceStore::with_base_dir(&base).user_id(None).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.user_id(Some("auth-uid")).unwrap(), "auth-uid");
}

#[test]
fn tampered_currency_value_falls_back() {
    let base = temp_base();
    let store = JsonPreferenceStore::with_base_dir(&base);
    fs::write(store.path(), r#"{"currency": "GOLD"}"#).unwrap();
    assert_eq!(store.currency().unwrap(), Currency::Rupee);
}

#[test]
fn corrupt_file_is_an_error() {
    let base = temp_base();
    let store = JsonPreferenceStore::with_base_dir(&base);
    fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().is_err());
}
