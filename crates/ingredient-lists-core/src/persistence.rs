//! Persistence Adapter
//!
//! The whole list collection is stored as one JSON record in a
//! key-value store (browser localStorage in the app, memory in tests).
//! A record that fails to decode is discarded entirely.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use crate::error::PersistenceError;
use crate::model::{IngredientList, ListId};

/// Default key of the lists record
pub const LISTS_KEY: &str = "ingredientLists";

/// Minimal synchronous key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serialize lists to the stored JSON text
pub fn encode_lists(lists: &[IngredientList]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(lists)?)
}

/// Parse and validate the stored JSON text
pub fn decode_lists(payload: &str) -> Result<Vec<IngredientList>, PersistenceError> {
    let lists: Vec<IngredientList> = serde_json::from_str(payload)?;
    validate(&lists)?;
    Ok(lists)
}

/// Reject records that break store invariants
fn validate(lists: &[IngredientList]) -> Result<(), PersistenceError> {
    let mut seen: HashSet<&ListId> = HashSet::new();
    for list in lists {
        if !seen.insert(&list.id) {
            return Err(PersistenceError::Corrupt(format!("duplicate list id {}", list.id)));
        }
        if let Some(orphan) = list.orphaned_sub_ingredient() {
            return Err(PersistenceError::Corrupt(format!(
                "ingredient {} in list {} references a missing category",
                orphan.id, list.id
            )));
        }
    }
    Ok(())
}

/// Load lists from storage, falling back to an empty collection
///
/// A corrupt record is logged and removed.
pub fn load_lists(storage: &dyn KeyValueStore, key: &str) -> Vec<IngredientList> {
    let payload = match storage.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::error!("[PERSIST] Failed to read {}: {}", key, e);
            return Vec::new();
        }
    };

    match decode_lists(&payload) {
        Ok(lists) => {
            log::info!("[PERSIST] Loaded {} lists", lists.len());
            lists
        }
        Err(e) => {
            log::error!("[PERSIST] Discarding saved lists: {}", e);
            if let Err(e) = storage.remove(key) {
                log::error!("[PERSIST] Failed to remove {}: {}", key, e);
            }
            Vec::new()
        }
    }
}

/// Write lists to storage; an empty collection removes the record
pub fn save_lists(
    storage: &dyn KeyValueStore,
    key: &str,
    lists: &[IngredientList],
) -> Result<(), PersistenceError> {
    if lists.is_empty() {
        return storage.remove(key);
    }
    let payload = encode_lists(lists)?;
    storage.set(key, &payload)?;
    log::debug!("[PERSIST] Saved {} lists", lists.len());
    Ok(())
}
