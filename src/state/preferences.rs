//! Form values remembered between visits (localStorage).
use crate::config::{DEFAULT_PITS, DEFAULT_SHOOT_DIR, DEFAULT_SIZE};
use crate::model::Direction;

const KEY_SIZE: &str = "wump_pref_size";
const KEY_PITS: &str = "wump_pref_pits";
const KEY_SHOOT_DIR: &str = "wump_pref_shoot_dir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Raw text of the size input; forwarded as-is.
    pub size: String,
    pub pits: String,
    pub shoot_dir: Direction,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE.to_string(),
            pits: DEFAULT_PITS.to_string(),
            shoot_dir: DEFAULT_SHOOT_DIR,
        }
    }
}

impl Preferences {
    /// Builds preferences from stored strings, keeping defaults for missing or bad entries.
    pub fn from_stored(size: Option<String>, pits: Option<String>, shoot_dir: Option<String>) -> Self {
        let mut p = Self::default();
        if let Some(v) = size.filter(|v| !v.trim().is_empty()) {
            p.size = v;
        }
        if let Some(v) = pits.filter(|v| !v.trim().is_empty()) {
            p.pits = v;
        }
        if let Some(d) = shoot_dir.and_then(|v| v.parse::<Direction>().ok()) {
            p.shoot_dir = d;
        }
        p
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                return Self::from_stored(
                    store.get_item(KEY_SIZE).ok().flatten(),
                    store.get_item(KEY_PITS).ok().flatten(),
                    store.get_item(KEY_SHOOT_DIR).ok().flatten(),
                );
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.set_item(KEY_SIZE, &self.size);
                let _ = store.set_item(KEY_PITS, &self.pits);
                let _ = store.set_item(KEY_SHOOT_DIR, self.shoot_dir.as_str());
            }
        }
    }
}
