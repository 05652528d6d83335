//! Domain Model
//!
//! Lists, ingredients and their identifiers.
//! This layer has no dependencies beyond serde, chrono and uuid.

mod entity;
mod ingredient;
mod list;

pub use entity::{find_by_id, position_by_id, Entity, IngredientId, ListId};
pub use ingredient::{Ingredient, IngredientKind, IngredientPatch};
pub use list::IngredientList;
