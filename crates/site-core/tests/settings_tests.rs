// Host-side tests for persisted scene and boot preferences.

use site_core::settings::{BOOT_ANIMATION_KEY, SCENE_MODE_KEY};
use site_core::{BootSettings, KeyValueStore, MemoryStore, SceneMode, SceneSettings, StorageError};

/// A store whose reads and writes always fail, like a locked-down browser.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("blocked".into()))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteRejected {
            key: key.into(),
            reason: "quota".into(),
        })
    }
}

#[test]
fn absent_value_defaults_to_off() {
    let s = SceneSettings::load(&MemoryStore::new(), false);
    assert_eq!(s.mode(), SceneMode::Off);
    assert_eq!(s.effective_mode(), SceneMode::Off);
}

#[test]
fn legacy_on_means_3d() {
    let store = MemoryStore::new().with(SCENE_MODE_KEY, "on");
    assert_eq!(SceneSettings::load(&store, false).effective_mode(), SceneMode::ThreeD);
}

#[test]
fn unknown_value_falls_back_to_off() {
    assert_eq!(SceneMode::parse_stored(Some("vaporwave")), SceneMode::Off);
    assert_eq!(SceneMode::parse_stored(Some("3D")), SceneMode::Off);
    assert_eq!(SceneMode::parse_stored(None), SceneMode::Off);
}

#[test]
fn every_mode_name_round_trips() {
    for m in SceneMode::ALL {
        assert_eq!(SceneMode::from_name(m.as_str()), Some(m));
        assert_eq!(m.to_string(), m.as_str());
    }
}

#[test]
fn photo_survives_reload() {
    let mut store = MemoryStore::new();
    let mut s = SceneSettings::load(&store, false);
    s.set_mode(SceneMode::Photo, &mut store).unwrap();
    assert_eq!(store.get(SCENE_MODE_KEY).unwrap().as_deref(), Some("photo"));
    let reloaded = SceneSettings::load(&store, false);
    assert_eq!(reloaded.mode(), SceneMode::Photo);
}

#[test]
fn reduced_motion_ignores_stored_motion_scene() {
    let store = MemoryStore::new().with(SCENE_MODE_KEY, "3d");
    let s = SceneSettings::load(&store, true);
    assert!(s.reduced_motion());
    assert_eq!(s.effective_mode(), SceneMode::Off);
}

#[test]
fn reduced_motion_blocks_motion_even_after_choice() {
    let mut store = MemoryStore::new();
    let mut s = SceneSettings::load(&store, true);
    s.set_mode(SceneMode::Telemetry, &mut store).unwrap();
    assert_eq!(s.mode(), SceneMode::Telemetry);
    assert_eq!(s.effective_mode(), SceneMode::Off);
    s.set_mode(SceneMode::Photo, &mut store).unwrap();
    assert_eq!(s.effective_mode(), SceneMode::Photo);
}

#[test]
fn motion_classification() {
    assert!(!SceneMode::Off.is_motion());
    assert!(!SceneMode::Photo.is_motion());
    assert!(SceneMode::ThreeD.is_motion());
    assert!(SceneMode::Sweep.is_motion());
}

#[test]
fn broken_store_is_tolerated() {
    let mut store = BrokenStore;
    let mut s = SceneSettings::load(&store, false);
    assert_eq!(s.mode(), SceneMode::Off);
    let err = s.set_mode(SceneMode::Ambient, &mut store).unwrap_err();
    assert!(matches!(err, StorageError::WriteRejected { .. }));
    assert_eq!(s.mode(), SceneMode::Ambient);
    assert!(!BootSettings::load(&store).enabled());
}

#[test]
fn boot_flag_defaults_off_and_toggles() {
    let mut store = MemoryStore::new();
    let mut boot = BootSettings::load(&store);
    assert!(!boot.enabled());
    assert!(boot.toggle(&mut store).unwrap());
    assert_eq!(store.get(BOOT_ANIMATION_KEY).unwrap().as_deref(), Some("on"));
    assert!(BootSettings::load(&store).enabled());
    assert!(!boot.toggle(&mut store).unwrap());
    assert_eq!(store.get(BOOT_ANIMATION_KEY).unwrap().as_deref(), Some("off"));
}

#[test]
fn boot_flag_needs_exact_on() {
    let store = MemoryStore::new().with(BOOT_ANIMATION_KEY, "true");
    assert!(!BootSettings::load(&store).enabled());
}

#[test]
fn error_messages() {
    let e = StorageError::WriteRejected {
        key: "k".into(),
        reason: "full".into(),
    };
    assert_eq!(e.to_string(), "write to `k` rejected: full");
}
