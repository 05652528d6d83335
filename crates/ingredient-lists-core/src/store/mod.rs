//! List Store
//!
//! Owns every ingredient list plus the active-list selection.
//! Mutations run to completion synchronously; the caller persists with
//! [`ListStore::flush`] after each one.

use crate::clock::{Clock, SystemClock};
use crate::config::CONFIG_KEY;
use crate::error::{PersistenceError, StoreError, StoreResult};
use crate::export::{export_snapshot, ExportSnapshot};
use crate::model::{
    find_by_id, position_by_id, Ingredient, IngredientId, IngredientList, IngredientPatch, ListId,
};
use crate::persistence::{self, KeyValueStore};

#[cfg(test)]
mod tests;

/// Canonical in-memory collection of lists
#[derive(Debug, Clone)]
pub struct ListStore<C = SystemClock> {
    /// Insertion order
    lists: Vec<IngredientList>,
    active: Option<ListId>,
    clock: C,
}

impl ListStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ListStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ListStore<C> {
    /// Empty store, no active list
    pub fn with_clock(clock: C) -> Self {
        Self {
            lists: Vec::new(),
            active: None,
            clock,
        }
    }

    /// Store over existing lists; the first one becomes active
    pub fn from_lists(lists: Vec<IngredientList>, clock: C) -> Self {
        let active = lists.first().map(|l| l.id.clone());
        Self { lists, active, clock }
    }

    /// Load from persistence; a missing or corrupt record yields an empty store
    pub fn init(storage: &dyn KeyValueStore, key: &str, clock: C) -> Self {
        Self::from_lists(persistence::load_lists(storage, key), clock)
    }

    /// Write the whole collection to persistence
    pub fn flush(&self, storage: &dyn KeyValueStore, key: &str) -> Result<(), PersistenceError> {
        persistence::save_lists(storage, key, &self.lists)
    }

    // ========================
    // Queries
    // ========================

    pub fn lists(&self) -> &[IngredientList] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, id: &ListId) -> Option<&IngredientList> {
        find_by_id(&self.lists, id)
    }

    pub fn active_list_id(&self) -> Option<&ListId> {
        self.active.as_ref()
    }

    pub fn active_list(&self) -> Option<&IngredientList> {
        self.active.as_ref().and_then(|id| self.list(id))
    }

    /// Export rows of a list at its current people count
    pub fn export_snapshot(&self, id: &ListId) -> StoreResult<ExportSnapshot<'_>> {
        let list = self.require_list(id)?;
        Ok(export_snapshot(list, list.number_of_people))
    }

    // ========================
    // List Operations
    // ========================

    /// Make `id` the active list
    pub fn select_list(&mut self, id: &ListId) -> StoreResult<()> {
        self.require_list(id)?;
        self.active = Some(id.clone());
        Ok(())
    }

    /// Create an empty list and make it active
    pub fn create_list(&mut self, name: &str) -> StoreResult<&IngredientList> {
        let name = require_name(name, "List name")?;
        let list = IngredientList::new(ListId::generate(), name, self.clock.now());
        log::info!("[STORE] Created list {:?} ({})", list.name, list.id);
        self.active = Some(list.id.clone());
        self.lists.push(list);
        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Replace the list with the same ID wholesale
    ///
    /// Returns Ok(false) (and changes nothing) if no such list exists.
    /// A replacement with a zero people count or a sub-ingredient outside
    /// its categories is rejected, so a saved collection always reloads.
    pub fn update_list(&mut self, mut list: IngredientList) -> StoreResult<bool> {
        let now = self.clock.now();
        let Some(index) = position_by_id(&self.lists, &list.id) else {
            log::debug!("[STORE] update_list: unknown list {}", list.id);
            return Ok(false);
        };
        if list.number_of_people == 0 {
            return Err(StoreError::validation("Number of people must be at least 1"));
        }
        if let Some(orphan) = list.orphaned_sub_ingredient() {
            log::warn!("[STORE] update_list: {:?} has no category in {}", orphan.name, list.id);
            return Err(StoreError::validation(format!(
                "{:?} must belong to a category of the list",
                orphan.name
            )));
        }
        let previous = self.lists[index].updated_at;
        list.updated_at = previous;
        list.touch(now);
        self.lists[index] = list;
        Ok(true)
    }

    /// Rename a list; unknown IDs are ignored
    pub fn rename_list(&mut self, id: &ListId, name: &str) -> StoreResult<()> {
        let name = require_name(name, "List name")?;
        let now = self.clock.now();
        if let Some(list) = self.lists.iter_mut().find(|l| &l.id == id) {
            list.name = name;
            list.touch(now);
        }
        Ok(())
    }

    /// Remove a list; the first remaining list becomes active if it was active
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        let Some(index) = position_by_id(&self.lists, id) else {
            return false;
        };
        let removed = self.lists.remove(index);
        if self.active.as_ref() == Some(&removed.id) {
            self.active = self.lists.first().map(|l| l.id.clone());
        }
        log::info!("[STORE] Deleted list {:?} ({})", removed.name, removed.id);
        true
    }

    /// Remove every list
    pub fn clear_all_lists(&mut self) {
        log::info!("[STORE] Clearing {} lists", self.lists.len());
        self.lists.clear();
        self.active = None;
    }

    /// Clear the store and every key the app owns in storage
    pub fn reset_app(&mut self, storage: &dyn KeyValueStore, key: &str) -> Result<(), PersistenceError> {
        self.clear_all_lists();
        storage.remove(key)?;
        storage.remove(CONFIG_KEY)?;
        Ok(())
    }

    /// Set the scaling multiplier of a list
    pub fn set_number_of_people(&mut self, list_id: &ListId, n: u32) -> StoreResult<()> {
        if n == 0 {
            return Err(StoreError::validation("Number of people must be at least 1"));
        }
        let now = self.clock.now();
        let list = self.require_list_mut(list_id)?;
        list.number_of_people = n;
        list.touch(now);
        Ok(())
    }

    // ========================
    // Ingredient Operations
    // ========================

    /// Append a category; names are unique per list ignoring case
    pub fn add_category(&mut self, list_id: &ListId, name: &str) -> StoreResult<IngredientId> {
        let name = require_name(name, "Category name")?;
        let now = self.clock.now();
        let list = self.require_list_mut(list_id)?;
        if list.has_category_named(&name, None) {
            log::warn!("[STORE] Category {:?} already exists in {}", name, list_id);
            return Err(StoreError::DuplicateName(format!(
                "A category named {:?} already exists",
                name
            )));
        }
        let id = IngredientId::generate();
        list.ingredients.push(Ingredient::category(id.clone(), name));
        list.touch(now);
        Ok(id)
    }

    /// Append a sub-ingredient under an existing category
    pub fn add_sub_ingredient(
        &mut self,
        list_id: &ListId,
        parent_id: &IngredientId,
        name: &str,
        base_quantity: f64,
        base_unit: &str,
    ) -> StoreResult<IngredientId> {
        let now = self.clock.now();
        let list = self.require_list_mut(list_id)?;
        if list.find_category(parent_id).is_none() {
            return Err(StoreError::not_found(format!("category {}", parent_id)));
        }
        let name = require_name(name, "Ingredient name")?;
        let base_quantity = require_quantity(base_quantity)?;

        let id = IngredientId::generate();
        list.ingredients.push(Ingredient::sub_ingredient(
            id.clone(),
            name,
            parent_id.clone(),
            base_quantity,
            base_unit.trim().to_string(),
        ));
        list.touch(now);
        Ok(id)
    }

    /// Apply a partial update; unknown ingredient IDs are ignored
    ///
    /// Quantity and unit changes do not apply to categories.
    pub fn edit_ingredient(
        &mut self,
        list_id: &ListId,
        id: &IngredientId,
        patch: IngredientPatch,
    ) -> StoreResult<()> {
        let now = self.clock.now();
        let list = self.require_list_mut(list_id)?;
        let Some(index) = position_by_id(&list.ingredients, id) else {
            log::debug!("[STORE] edit_ingredient: unknown ingredient {}", id);
            return Ok(());
        };
        let is_category = list.ingredients[index].is_category();

        // Validate everything before touching the record
        let name = patch
            .name
            .as_deref()
            .map(|n| require_name(n, "Ingredient name"))
            .transpose()?;
        if let (true, Some(name)) = (is_category, name.as_deref()) {
            if list.has_category_named(name, Some(id)) {
                return Err(StoreError::DuplicateName(format!(
                    "A category named {:?} already exists",
                    name
                )));
            }
        }
        let base_quantity = match patch.base_quantity {
            Some(q) if !is_category => Some(require_quantity(q)?),
            _ => None,
        };

        let ingredient = &mut list.ingredients[index];
        if let Some(name) = name {
            ingredient.name = name;
        }
        if let Some(q) = base_quantity {
            ingredient.base_quantity = q;
        }
        if let (false, Some(unit)) = (is_category, patch.base_unit) {
            ingredient.base_unit = unit.trim().to_string();
        }
        list.touch(now);
        Ok(())
    }

    /// Remove an ingredient; removing a category also removes its
    /// sub-ingredients. Returns the number of records removed.
    pub fn delete_ingredient(&mut self, list_id: &ListId, id: &IngredientId) -> StoreResult<usize> {
        let now = self.clock.now();
        let list = self.require_list_mut(list_id)?;
        let before = list.ingredients.len();
        list.ingredients
            .retain(|i| &i.id != id && !i.belongs_to(id));
        let removed = before - list.ingredients.len();
        if removed > 0 {
            list.touch(now);
        }
        Ok(removed)
    }

    // ========================
    // Helpers
    // ========================

    fn require_list(&self, id: &ListId) -> StoreResult<&IngredientList> {
        self.list(id)
            .ok_or_else(|| StoreError::not_found(format!("list {}", id)))
    }

    fn require_list_mut(&mut self, id: &ListId) -> StoreResult<&mut IngredientList> {
        self.lists
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| StoreError::not_found(format!("list {}", id)))
    }
}

/// Trimmed, non-empty name
fn require_name(name: &str, what: &str) -> StoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Positive, finite base quantity
fn require_quantity(quantity: f64) -> StoreResult<f64> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(StoreError::validation(format!(
            "Quantity must be greater than zero, got {}",
            quantity
        )))
    }
}
