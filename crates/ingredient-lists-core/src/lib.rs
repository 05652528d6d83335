//! Ingredient Lists Core
//!
//! Framework-free domain layer of the ingredient list manager:
//! - model: lists, ingredients and their identifiers
//! - store: the canonical in-memory collection and its mutations
//! - scaling / export: derived quantities and the flattened export rows
//! - voice: cleanup and parsing of recognized speech
//! - persistence / config: key-value storage adapter and settings
//! - dialog: the UI dialog state machine

pub mod clock;
pub mod config;
pub mod dialog;
pub mod error;
pub mod export;
pub mod model;
pub mod persistence;
pub mod scaling;
pub mod store;
pub mod voice;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use dialog::{DeleteTarget, Dialog, DialogEvent, VoiceField, VoiceTarget};
pub use error::{PersistenceError, StoreError, StoreResult};
pub use export::{export_snapshot, ExportRow, ExportSnapshot};
pub use model::{Entity, Ingredient, IngredientId, IngredientKind, IngredientList, IngredientPatch, ListId};
pub use persistence::{KeyValueStore, MemoryStorage};
pub use scaling::{compute_display_quantity, format_quantity, parse_people_count};
pub use store::ListStore;
pub use voice::{clean_transcript, parse_quantity, parse_sub_ingredient, ParsedIngredient, VoiceLanguage, VoiceResult};
