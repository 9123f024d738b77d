use super::*;
use crate::theme::memory::{FixedScheme, MemoryStore, MemoryTarget};

fn run(store: &MemoryStore, scheme: &FixedScheme) -> (Resolution, MemoryTarget) {
    let target = MemoryTarget::new();
    let resolution = resolve_theme(store, &target, scheme).unwrap();
    (resolution, target)
}

// =============================================================
// Absent preference
// =============================================================

#[test]
fn absent_preference_is_initialized_to_auto() {
    let store = MemoryStore::new();
    let (resolution, _) = run(&store, &FixedScheme::light());

    assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("auto"));
    assert!(resolution.initialized);
    assert_eq!(resolution.stored, StoredPreference::Known(ThemePreference::Auto));
    assert_eq!(store.reads(), 1);
    assert_eq!(store.writes(), 1);
}

#[test]
fn absent_preference_with_dark_system_sets_dark() {
    let store = MemoryStore::new();
    let (resolution, target) = run(&store, &FixedScheme::dark());

    assert_eq!(resolution.effective, EffectiveTheme::Dark);
    assert_eq!(target.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
}

#[test]
fn absent_preference_with_light_system_leaves_attribute_unset() {
    let store = MemoryStore::new();
    let (resolution, target) = run(&store, &FixedScheme::light());

    assert_eq!(resolution.effective, EffectiveTheme::Light);
    assert_eq!(target.attribute(THEME_ATTRIBUTE), None);
    assert_eq!(target.mutations(), 0);
}

// =============================================================
// Stored preferences
// =============================================================

#[test]
fn stored_dark_always_sets_dark_without_querying_system() {
    for scheme in [FixedScheme::light(), FixedScheme::dark()] {
        let store = MemoryStore::with_value(STORAGE_KEY, "dark");
        let (resolution, target) = run(&store, &scheme);

        assert_eq!(resolution.effective, EffectiveTheme::Dark);
        assert_eq!(target.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
        assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(store.writes(), 0);
        assert_eq!(scheme.queries(), 0);
        assert!(!resolution.initialized);
    }
}

#[test]
fn stored_light_never_sets_attribute() {
    for scheme in [FixedScheme::light(), FixedScheme::dark()] {
        let store = MemoryStore::with_value(STORAGE_KEY, "light");
        let (resolution, target) = run(&store, &scheme);

        assert_eq!(resolution.effective, EffectiveTheme::Light);
        assert_eq!(target.attribute(THEME_ATTRIBUTE), None);
        assert_eq!(target.mutations(), 0);
        assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(store.writes(), 0);
    }
}

#[test]
fn stored_auto_follows_system_signal() {
    let store = MemoryStore::with_value(STORAGE_KEY, "auto");
    let scheme = FixedScheme::dark();
    let (resolution, target) = run(&store, &scheme);
    assert_eq!(resolution.effective, EffectiveTheme::Dark);
    assert_eq!(target.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(scheme.queries(), 1);

    let (resolution, target) = run(&store, &FixedScheme::light());
    assert_eq!(resolution.effective, EffectiveTheme::Light);
    assert_eq!(target.attribute(THEME_ATTRIBUTE), None);

    assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("auto"));
    assert_eq!(store.writes(), 0);
}

#[test]
fn unrecognized_value_renders_light_and_is_preserved() {
    let store = MemoryStore::with_value(STORAGE_KEY, "blue");
    let scheme = FixedScheme::dark();
    let (resolution, target) = run(&store, &scheme);

    assert_eq!(resolution.effective, EffectiveTheme::Light);
    assert_eq!(resolution.stored, StoredPreference::Unrecognized("blue".to_owned()));
    assert_eq!(resolution.preference(), ThemePreference::Light);
    assert_eq!(target.attribute(THEME_ATTRIBUTE), None);
    assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("blue"));
    assert_eq!(store.writes(), 0);
    assert_eq!(scheme.queries(), 0);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn running_twice_matches_running_once() {
    for seed in [None, Some("light"), Some("dark"), Some("auto"), Some("blue")] {
        for prefers_dark in [false, true] {
            let once_store = seed.map_or_else(MemoryStore::new, |v| MemoryStore::with_value(STORAGE_KEY, v));
            let twice_store = seed.map_or_else(MemoryStore::new, |v| MemoryStore::with_value(STORAGE_KEY, v));
            let scheme = FixedScheme::new(prefers_dark);

            let once_target = MemoryTarget::new();
            let once = resolve_theme(&once_store, &once_target, &scheme).unwrap();

            let twice_target = MemoryTarget::new();
            resolve_theme(&twice_store, &twice_target, &scheme).unwrap();
            let twice = resolve_theme(&twice_store, &twice_target, &scheme).unwrap();

            assert_eq!(once_store.value(STORAGE_KEY), twice_store.value(STORAGE_KEY));
            assert_eq!(once_target.attribute(THEME_ATTRIBUTE), twice_target.attribute(THEME_ATTRIBUTE));
            assert_eq!(once.effective, twice.effective);
            assert_eq!(once.stored, twice.stored);
            assert!(!twice.initialized);
        }
    }
}

// =============================================================
// Failures and helpers
// =============================================================

#[test]
fn unavailable_store_propagates_error() {
    let store = MemoryStore::unavailable();
    let target = MemoryTarget::new();
    let err = resolve_theme(&store, &target, &FixedScheme::dark()).unwrap_err();
    assert_eq!(err, ThemeError::StorageUnavailable);
    assert_eq!(target.mutations(), 0);
}

#[test]
fn effective_theme_only_queries_signal_for_auto() {
    let mut asked = false;
    let light = effective_theme(&StoredPreference::Known(ThemePreference::Light), || {
        asked = true;
        true
    });
    assert_eq!(light, EffectiveTheme::Light);
    assert!(!asked);

    let auto = effective_theme(&StoredPreference::Known(ThemePreference::Auto), || true);
    assert_eq!(auto, EffectiveTheme::Dark);
}
