//! Ingredient Entity
//!
//! An ingredient is either a category (top-level grouping, no quantity)
//! or a sub-ingredient belonging to exactly one category.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, IngredientId};

/// Whether an ingredient groups others or carries an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientKind {
    /// Top-level grouping, zero quantity and empty unit
    Category,
    /// Quantity-bearing entry under a category
    SubIngredient { parent_id: IngredientId },
}

/// A category or sub-ingredient
///
/// Only the per-person base amount is stored; the display amount is
/// always derived from the list's people count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "IngredientRecord", try_from = "IngredientRecord")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub kind: IngredientKind,
    /// Per-person quantity (0 for categories)
    pub base_quantity: f64,
    /// Free-text unit label ("" for categories)
    pub base_unit: String,
}

impl Ingredient {
    /// Create a new category
    pub fn category(id: IngredientId, name: String) -> Self {
        Self {
            id,
            name,
            kind: IngredientKind::Category,
            base_quantity: 0.0,
            base_unit: String::new(),
        }
    }

    /// Create a new sub-ingredient under a category
    pub fn sub_ingredient(
        id: IngredientId,
        name: String,
        parent_id: IngredientId,
        base_quantity: f64,
        base_unit: String,
    ) -> Self {
        Self {
            id,
            name,
            kind: IngredientKind::SubIngredient { parent_id },
            base_quantity,
            base_unit,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self.kind, IngredientKind::Category)
    }

    /// Parent category ID (None for categories)
    pub fn parent_id(&self) -> Option<&IngredientId> {
        match &self.kind {
            IngredientKind::Category => None,
            IngredientKind::SubIngredient { parent_id } => Some(parent_id),
        }
    }

    /// Check if this is a sub-ingredient of the given category
    pub fn belongs_to(&self, category_id: &IngredientId) -> bool {
        self.parent_id() == Some(category_id)
    }
}

impl Entity for Ingredient {
    type Id = IngredientId;

    fn id(&self) -> &IngredientId {
        &self.id
    }
}

/// Partial update for an ingredient; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub base_quantity: Option<f64>,
    pub base_unit: Option<String>,
}

impl IngredientPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.base_quantity.is_none() && self.base_unit.is_none()
    }
}

/// Stored shape of an ingredient
///
/// Legacy records also carry `quantity`/`unit`; those are ignored on read.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngredientRecord {
    id: IngredientId,
    name: String,
    #[serde(default)]
    base_quantity: f64,
    #[serde(default)]
    base_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<IngredientId>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_sub_ingredient: bool,
}

impl From<Ingredient> for IngredientRecord {
    fn from(ingredient: Ingredient) -> Self {
        let parent_id = ingredient.parent_id().cloned();
        Self {
            is_sub_ingredient: parent_id.is_some(),
            id: ingredient.id,
            name: ingredient.name,
            base_quantity: ingredient.base_quantity,
            base_unit: ingredient.base_unit,
            parent_id,
        }
    }
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = String;

    fn try_from(record: IngredientRecord) -> Result<Self, Self::Error> {
        match record.parent_id {
            Some(parent_id) => Ok(Ingredient::sub_ingredient(
                record.id,
                record.name,
                parent_id,
                record.base_quantity,
                record.base_unit,
            )),
            None if record.is_sub_ingredient => {
                Err(format!("sub-ingredient {} has no parent category", record.id))
            }
            None => Ok(Ingredient::category(record.id, record.name)),
        }
    }
}
