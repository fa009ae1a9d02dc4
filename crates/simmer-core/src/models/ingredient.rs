//! Ingredient model definition.

use serde::{Deserialize, Serialize};

/// An ingredient used by a recipe, referenced from instruction steps by ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Unique identifier within the recipe
    pub id: String,

    /// Display name
    pub name: String,

    /// Amount needed (must be positive)
    pub quantity: f64,

    /// Unit of the quantity (g, ml, pcs, ...)
    #[serde(default)]
    pub unit: String,
}
