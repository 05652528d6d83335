//! Application Configuration
//!
//! Compiled defaults, optionally overridden by a JSON record stored
//! under [`CONFIG_KEY`].

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, LISTS_KEY};
use crate::voice::VoiceLanguage;

/// Storage key of the optional config override
pub const CONFIG_KEY: &str = "ingredientLists.config";

/// Units offered in pickers and recognized by the voice parser
pub const DEFAULT_UNITS: &[&str] = &[
    "pieces",
    "kg",
    "g",
    "liters",
    "ml",
    "cups",
    "tablespoons",
    "teaspoons",
    "pounds",
    "ounces",
    "quarts",
    "pints",
    "bunches",
    "heads",
    "cloves",
];

const DEFAULT_UNIT: &str = "pieces";
const DEFAULT_ROWS_PER_PAGE: usize = 30;
const DEFAULT_NOTICE_MS: u32 = 6000;
const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Key of the lists record
    pub storage_key: String,
    /// Unit used when none is given or recognized
    pub default_unit: String,
    pub units: Vec<String>,
    pub voice_languages: Vec<VoiceLanguage>,
    /// Table rows per exported page
    pub export_rows_per_page: usize,
    /// How long notices stay visible
    pub notice_duration_ms: u32,
    /// Entries kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: LISTS_KEY.to_string(),
            default_unit: DEFAULT_UNIT.to_string(),
            units: DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
            voice_languages: VoiceLanguage::ALL.to_vec(),
            export_rows_per_page: DEFAULT_ROWS_PER_PAGE,
            notice_duration_ms: DEFAULT_NOTICE_MS,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Parse an override record; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<AppConfig>(json).map(AppConfig::normalized)
    }

    /// Load the override from storage, falling back to defaults
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        match storage.get(CONFIG_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("[CONFIG] Ignoring malformed config override: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] Failed to read config override: {}", e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if self.storage_key.trim().is_empty() {
            self.storage_key = defaults.storage_key;
        }
        self.units.retain(|u| !u.trim().is_empty());
        if self.units.is_empty() {
            self.units = defaults.units;
        }
        if self.default_unit.trim().is_empty() {
            self.default_unit = defaults.default_unit;
        }
        if self.voice_languages.is_empty() {
            self.voice_languages = defaults.voice_languages;
        }
        if self.export_rows_per_page == 0 {
            self.export_rows_per_page = defaults.export_rows_per_page;
        }
        if self.log_capacity == 0 {
            self.log_capacity = defaults.log_capacity;
        }
        self
    }

    /// Case-insensitive lookup in the unit vocabulary
    pub fn known_unit(&self, token: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|u| u.eq_ignore_ascii_case(token))
            .map(String::as_str)
    }
}
