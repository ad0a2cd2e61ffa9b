//! Display preferences and the key-value store they live in.
//!
//! Preferences are read on startup and written back when the user changes
//! them. The store itself belongs to the host (browser local storage, a
//! settings file, ...); this crate only needs string get/set.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::draw::SpreadKind;

pub const THEME_KEY: &str = "tarot-theme";
pub const REDUCE_MOTION_KEY: &str = "tarot-reduce-motion";
pub const SPREAD_KEY: &str = "tarot-spread";
pub const REVERSALS_KEY: &str = "tarot-reversals";

/// Visual palette. Passed through to the view untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// String key-value storage owned by the host.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store, for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// User-facing reading and display preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub reduce_motion: bool,
    pub spread: SpreadKind,
    pub reversals: bool,
}

impl Preferences {
    /// Read preferences, falling back to defaults for missing or malformed
    /// values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            theme: read(store, THEME_KEY, Theme::parse).unwrap_or(defaults.theme),
            reduce_motion: read(store, REDUCE_MOTION_KEY, parse_bool).unwrap_or(defaults.reduce_motion),
            spread: read(store, SPREAD_KEY, SpreadKind::parse).unwrap_or(defaults.spread),
            reversals: read(store, REVERSALS_KEY, parse_bool).unwrap_or(defaults.reversals),
        }
    }

    /// Write every preference to the store.
    pub fn save(&self, store: &mut dyn PreferenceStore) {
        store.set(THEME_KEY, self.theme.as_str().to_string());
        store.set(REDUCE_MOTION_KEY, self.reduce_motion.to_string());
        store.set(SPREAD_KEY, self.spread.as_str().to_string());
        store.set(REVERSALS_KEY, self.reversals.to_string());
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn read<T>(store: &dyn PreferenceStore, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = store.get(key)?;
    let value = parse(&raw);
    if value.is_none() {
        warn!(key, value = %raw, "ignoring malformed preference");
    }
    value
}
