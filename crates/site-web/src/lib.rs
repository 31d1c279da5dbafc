#![cfg(target_arch = "wasm32")]
use crate::backdrop::MountedBackground;
use crate::constants::ILLUSTRATION_ID_PREFIX;
use crate::hero::Hero;
use crate::illustration::MountedIllustration;
use crate::storage::LocalStorage;
use site_core::{BootGate, BootSettings, SceneMode, SceneSettings};
use wasm_bindgen::prelude::*;

mod backdrop;
mod cancel;
mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod illustration;
mod input;
mod render;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
    Ok(())
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Page-level owner of the visitor's preferences and everything mounted on
/// their behalf.
#[wasm_bindgen]
pub struct SiteApp {
    store: LocalStorage,
    scene: SceneSettings,
    boot: BootSettings,
    background: Option<MountedBackground>,
    background_requested: bool,
    hero: Option<Hero>,
    illustrations: Vec<(String, MountedIllustration)>,
    next_illustration: u32,
}

#[wasm_bindgen]
impl SiteApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SiteApp {
        let store = LocalStorage::open();
        let reduced_motion = storage::prefers_reduced_motion();
        let scene = SceneSettings::load(&store, reduced_motion);
        let boot = BootSettings::load(&store);
        log::info!(
            "[app] scene={} effective={} boot={} reduced_motion={}",
            scene.mode(),
            scene.effective_mode(),
            boot.enabled(),
            reduced_motion
        );
        SiteApp {
            store,
            scene,
            boot,
            background: None,
            background_requested: false,
            hero: None,
            illustrations: Vec::new(),
            next_illustration: 0,
        }
    }

    pub fn scene_mode(&self) -> String {
        self.scene.mode().as_str().to_string()
    }

    /// Mode actually mounted; motion scenes read as `"off"` under reduced motion.
    pub fn effective_scene_mode(&self) -> String {
        self.scene.effective_mode().as_str().to_string()
    }

    /// Mode of the background currently on the page.
    pub fn mounted_scene_mode(&self) -> String {
        self.background
            .as_ref()
            .map_or(SceneMode::Off, MountedBackground::mode)
            .as_str()
            .to_string()
    }

    pub fn scene_modes() -> Vec<JsValue> {
        SceneMode::ALL
            .iter()
            .map(|m| JsValue::from_str(m.as_str()))
            .collect()
    }

    /// Switch scenes and persist the choice. The in-memory mode changes and
    /// the background remounts even when the write fails; the failure is
    /// still reported.
    pub fn set_scene_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode = SceneMode::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown scene mode {name:?}")))?;
        let saved = self.scene.set_mode(mode, &mut self.store);
        log::info!("[app] scene mode -> {mode}");
        if self.background_requested {
            self.mount_background()?;
        }
        saved.map_err(js_error)
    }

    pub fn boot_enabled(&self) -> bool {
        self.boot.enabled()
    }

    /// Flip the boot animation flag; returns the new value. Takes effect on
    /// the next hero mount.
    pub fn toggle_boot(&mut self) -> Result<bool, JsValue> {
        self.boot.toggle(&mut self.store).map_err(js_error)
    }

    /// Replace the current background with the effective mode's renderer.
    pub fn mount_background(&mut self) -> Result<(), JsValue> {
        self.background_requested = true;
        self.background = None;
        self.background = backdrop::mount(self.scene.effective_mode()).map_err(|e| {
            log::error!("[app] background mount failed: {:?}", e);
            js_error(e)
        })?;
        Ok(())
    }

    pub fn mount_hero(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.hero = None;
        let gate = BootGate {
            enabled: self.boot.enabled(),
            reduced_motion: self.scene.reduced_motion(),
        };
        self.hero = Some(Hero::mount(element_id, gate).map_err(js_error)?);
        Ok(())
    }

    /// Current boot phase name, if a hero is mounted.
    pub fn hero_phase(&self) -> Option<String> {
        self.hero
            .as_ref()
            .and_then(Hero::phase)
            .map(|p| p.name().to_string())
    }

    /// `kind` is a project slug or `"{slug}-wireframe"`. Replaces whatever
    /// was mounted in the same element.
    pub fn mount_illustration(&mut self, element_id: &str, kind: &str) -> Result<(), JsValue> {
        self.illustrations.retain(|(id, _)| id != element_id);
        let prefix = format!("{ILLUSTRATION_ID_PREFIX}-{}", self.next_illustration);
        self.next_illustration += 1;
        let mounted = MountedIllustration::mount(element_id, kind, prefix, self.scene.reduced_motion())
            .map_err(js_error)?;
        self.illustrations.push((element_id.to_string(), mounted));
        Ok(())
    }

    pub fn unmount_all(&mut self) {
        self.background_requested = false;
        self.background = None;
        self.hero = None;
        self.illustrations.clear();
        log::info!("[app] unmounted all");
    }
}

impl Default for SiteApp {
    fn default() -> Self {
        Self::new()
    }
}
