//! Core Entity Trait and Identifiers
//!
//! Every entity carries an opaque, unique string identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Find an entity by ID in a slice
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &T::Id) -> Option<&'a T> {
    entities.iter().find(|e| e.id() == id)
}

/// Index of an entity by ID in a slice
pub fn position_by_id<T: Entity>(entities: &[T], id: &T::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Allocate a fresh identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(
    /// Identifier of an ingredient list
    ListId
);

opaque_id!(
    /// Identifier of a category or sub-ingredient
    IngredientId
);
