//! Property-based tests for theme persistence
//!
//! For any theme selection, the resolved choice is what gets persisted, and
//! a later read (including a fresh coordinator over the same store) observes
//! it.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use hueshift_storage::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemePreference,
};
use hueshift_themes::{
    all_themes, category_of, is_valid_theme, DocumentRoot, ThemeCategory, ThemeCoordinator,
};

/// Strategy for generating valid theme names
fn valid_theme_strategy() -> impl Strategy<Value = &'static str> {
    let names: Vec<&'static str> = all_themes().map(|t| t.name).collect();
    proptest::sample::select(names)
}

/// Strategy for generating names outside the catalog
fn invalid_theme_strategy() -> impl Strategy<Value = String> {
    "[a-z-]{1,16}".prop_filter("must not be a catalog member", |name| !is_valid_theme(name))
}

proptest! {
    /// Valid selections round-trip through the store
    #[test]
    fn prop_valid_selection_roundtrips(name in valid_theme_strategy()) {
        let store = Arc::new(MemoryPreferenceStore::new());
        let coordinator = ThemeCoordinator::new(store.clone(), Arc::new(DocumentRoot::new()));

        coordinator.set_theme(name);
        prop_assert_eq!(coordinator.current_theme(), name);
        let saved = store.load().unwrap().unwrap();
        prop_assert_eq!(saved.current_theme.as_str(), name);
    }

    /// Invalid selections persist the default, never the raw input
    #[test]
    fn prop_invalid_selection_persists_default(name in invalid_theme_strategy()) {
        let store = Arc::new(MemoryPreferenceStore::new());
        let root = Arc::new(DocumentRoot::new());
        let coordinator = ThemeCoordinator::new(store.clone(), root.clone());

        coordinator.set_theme(&name);
        prop_assert_eq!(coordinator.current_theme(), "light");
        prop_assert_eq!(root.theme_attr(), Some("light"));
        let saved = store.load().unwrap().unwrap();
        prop_assert_eq!(saved.current_theme.as_str(), "light");
    }

    /// A selection survives a full reload of the coordinator
    #[test]
    fn prop_selection_survives_reload(name in valid_theme_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let coordinator = ThemeCoordinator::new(
            Arc::new(FilePreferenceStore::new(temp_dir.path())),
            Arc::new(DocumentRoot::new()),
        );
        coordinator.set_theme(name);
        drop(coordinator);

        let reloaded = ThemeCoordinator::new(
            Arc::new(FilePreferenceStore::new(temp_dir.path())),
            Arc::new(DocumentRoot::new()),
        );
        prop_assert_eq!(reloaded.current_theme(), name);
    }
}

#[test]
fn test_persisted_unknown_name_reads_as_default() {
    let store = Arc::new(MemoryPreferenceStore::new());
    store
        .save(&ThemePreference {
            current_theme: "nonexistent-theme".to_string(),
            last_updated: None,
        })
        .unwrap();

    let coordinator = ThemeCoordinator::new(store, Arc::new(DocumentRoot::new()));
    assert_eq!(coordinator.current_theme(), "light");
}

#[test]
fn test_persisted_dracula_reads_back_as_dark_theme() {
    let store = Arc::new(MemoryPreferenceStore::new());
    store
        .save(&ThemePreference {
            current_theme: "dracula".to_string(),
            last_updated: None,
        })
        .unwrap();

    let coordinator = ThemeCoordinator::new(store, Arc::new(DocumentRoot::new()));
    assert_eq!(coordinator.current_theme(), "dracula");
    assert_eq!(category_of("dracula"), Some(ThemeCategory::Dark));
}

#[test]
fn test_invalid_then_valid_then_toggle_scenario() {
    use std::sync::Mutex;

    let store = Arc::new(MemoryPreferenceStore::new());
    let root = Arc::new(DocumentRoot::new());
    let coordinator = ThemeCoordinator::new(store.clone(), root.clone());

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let _subscription = coordinator.subscribe(move |theme| {
        sink.lock().unwrap().push(theme);
    });

    coordinator.set_theme("not-a-real-theme");
    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.current_theme, "light");

    coordinator.set_theme("dracula");
    assert_eq!(coordinator.current_theme(), "dracula");

    coordinator.toggle_light_dark();
    assert_eq!(coordinator.current_theme(), "light");
    assert_eq!(*received.lock().unwrap(), vec!["light", "dracula", "light"]);
}

#[test]
fn test_set_theme_writes_rfc3339_timestamp() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let coordinator = ThemeCoordinator::new(store.clone(), Arc::new(DocumentRoot::new()));

    coordinator.set_theme("nord");
    let stamp = store.load().unwrap().unwrap().last_updated.unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
}

#[test]
fn test_preference_file_is_plain_json() {
    let temp_dir = TempDir::new().unwrap();
    let coordinator = ThemeCoordinator::new(
        Arc::new(FilePreferenceStore::new(temp_dir.path())),
        Arc::new(DocumentRoot::new()),
    );
    coordinator.set_theme("coffee");

    let content = std::fs::read_to_string(temp_dir.path().join("preference.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["current_theme"], "coffee");
}
