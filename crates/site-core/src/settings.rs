//! Persisted visitor preferences: which background scene runs and whether the
//! hero plays its boot animation.

use fnv::FnvHashMap;
use thiserror::Error;

pub const SCENE_MODE_KEY: &str = "tw-scene-3d";
pub const BOOT_ANIMATION_KEY: &str = "tw-boot-animation";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("write to `{key}` rejected: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// String key/value persistence (browser local storage or an in-memory map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneMode {
    #[default]
    Off,
    ThreeD,
    Photo,
    Telemetry,
    DataStream,
    Ambient,
    Calibration,
    Orthogonal,
    Sweep,
}

impl SceneMode {
    pub const ALL: [SceneMode; 9] = [
        SceneMode::Off,
        SceneMode::ThreeD,
        SceneMode::Photo,
        SceneMode::Telemetry,
        SceneMode::DataStream,
        SceneMode::Ambient,
        SceneMode::Calibration,
        SceneMode::Orthogonal,
        SceneMode::Sweep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SceneMode::Off => "off",
            SceneMode::ThreeD => "3d",
            SceneMode::Photo => "photo",
            SceneMode::Telemetry => "telemetry",
            SceneMode::DataStream => "datastream",
            SceneMode::Ambient => "ambient",
            SceneMode::Calibration => "calibration",
            SceneMode::Orthogonal => "orthogonal",
            SceneMode::Sweep => "sweep",
        }
    }

    /// Exact match on a canonical name.
    pub fn from_name(s: &str) -> Option<SceneMode> {
        SceneMode::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Decode a stored value. The legacy `"on"` means the 3D scene; anything
    /// unrecognised falls back to `Off`.
    pub fn parse_stored(raw: Option<&str>) -> SceneMode {
        match raw {
            None => SceneMode::Off,
            Some("on") => SceneMode::ThreeD,
            Some(s) => SceneMode::from_name(s).unwrap_or_else(|| {
                log::warn!("[settings] unknown stored scene mode {s:?}, using off");
                SceneMode::Off
            }),
        }
    }

    /// Whether the scene animates. Static scenes stay available under
    /// reduced motion.
    pub fn is_motion(self) -> bool {
        !matches!(self, SceneMode::Off | SceneMode::Photo)
    }
}

impl std::fmt::Display for SceneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneSettings {
    mode: SceneMode,
    reduced_motion: bool,
}

impl SceneSettings {
    /// Read the stored mode. Under reduced motion the stored value is not
    /// restored at all; a failed read logs and keeps `Off`.
    pub fn load(store: &impl KeyValueStore, reduced_motion: bool) -> Self {
        let mode = if reduced_motion {
            SceneMode::Off
        } else {
            match store.get(SCENE_MODE_KEY) {
                Ok(raw) => SceneMode::parse_stored(raw.as_deref()),
                Err(e) => {
                    log::warn!("[settings] scene mode read failed: {e}");
                    SceneMode::Off
                }
            }
        };
        Self {
            mode,
            reduced_motion,
        }
    }

    #[inline]
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    #[inline]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// The mode to actually mount.
    pub fn effective_mode(&self) -> SceneMode {
        if self.reduced_motion && self.mode.is_motion() {
            SceneMode::Off
        } else {
            self.mode
        }
    }

    /// Apply a user choice and persist it. The in-memory mode changes even if
    /// the write fails.
    pub fn set_mode(
        &mut self,
        mode: SceneMode,
        store: &mut impl KeyValueStore,
    ) -> Result<(), StorageError> {
        self.mode = mode;
        store.set(SCENE_MODE_KEY, mode.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootSettings {
    enabled: bool,
}

impl BootSettings {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let enabled = match store.get(BOOT_ANIMATION_KEY) {
            Ok(raw) => raw.as_deref() == Some("on"),
            Err(e) => {
                log::warn!("[settings] boot flag read failed: {e}");
                false
            }
        };
        Self { enabled }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the flag, persist `"on"`/`"off"`, and return the new value.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> Result<bool, StorageError> {
        self.enabled = !self.enabled;
        store.set(BOOT_ANIMATION_KEY, if self.enabled { "on" } else { "off" })?;
        Ok(self.enabled)
    }
}
