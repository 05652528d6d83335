//! Ingredient List Entity
//!
//! A named collection of categories and sub-ingredients with a
//! people-count multiplier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{find_by_id, Entity, IngredientId, ListId};
use super::ingredient::Ingredient;

/// A named ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ListRecord")]
pub struct IngredientList {
    pub id: ListId,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Scaling multiplier, always >= 1
    pub number_of_people: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored shape; older records may lack the people count or `updatedAt`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListRecord {
    id: ListId,
    name: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default = "default_people", deserialize_with = "deserialize_people")]
    number_of_people: u32,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<ListRecord> for IngredientList {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            ingredients: record.ingredients,
            number_of_people: record.number_of_people,
            created_at: record.created_at,
            updated_at: record.updated_at.unwrap_or(record.created_at),
        }
    }
}

fn default_people() -> u32 {
    1
}

/// Non-positive counts in stored data collapse to 1
fn deserialize_people<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(u32::try_from(raw).ok().filter(|n| *n > 0).unwrap_or(1))
}

impl IngredientList {
    /// Create an empty list for one person
    pub fn new(id: ListId, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            ingredients: Vec::new(),
            number_of_people: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.is_category())
    }

    /// Sub-ingredients of one category in insertion order
    pub fn sub_ingredients_of<'a>(
        &'a self,
        category_id: &'a IngredientId,
    ) -> impl Iterator<Item = &'a Ingredient> + 'a {
        self.ingredients.iter().filter(move |i| i.belongs_to(category_id))
    }

    pub fn find_ingredient(&self, id: &IngredientId) -> Option<&Ingredient> {
        find_by_id(&self.ingredients, id)
    }

    /// Category lookup (None if missing or not a category)
    pub fn find_category(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.find_ingredient(id).filter(|i| i.is_category())
    }

    /// Case-insensitive, trimmed category name check
    ///
    /// `except` excludes one category, so a rename onto its own name passes.
    pub fn has_category_named(&self, name: &str, except: Option<&IngredientId>) -> bool {
        let wanted = name.trim().to_lowercase();
        self.categories()
            .filter(|c| Some(&c.id) != except)
            .any(|c| c.name.trim().to_lowercase() == wanted)
    }

    /// First sub-ingredient whose parent is not a category of this list
    pub fn orphaned_sub_ingredient(&self) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| {
            i.parent_id()
                .is_some_and(|parent_id| self.find_category(parent_id).is_none())
        })
    }

    pub fn sub_ingredient_count(&self) -> usize {
        self.ingredients.iter().filter(|i| !i.is_category()).count()
    }

    /// Advance `updated_at`, never moving it backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

impl Entity for IngredientList {
    type Id = ListId;

    fn id(&self) -> &ListId {
        &self.id
    }
}
