//! Data models for recipes, their steps, and list summaries.
//!
//! These are the entities owned by the recipe store. The cook-session engine
//! only reads them: it snapshots step durations when a session starts and
//! never writes a recipe back. Display implementations live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Serialized shape
//!
//! Recipes are persisted as a JSON list. Field names are camelCase and the
//! step kind is an internal `"type"` tag:
//!
//! ```json
//! {
//!   "id": "4f1c...",
//!   "title": "Tomato soup",
//!   "difficulty": "Easy",
//!   "ingredients": [{ "id": "i1", "name": "Tomatoes", "quantity": 6, "unit": "pcs" }],
//!   "steps": [
//!     { "id": "s1", "description": "Chop", "type": "instruction",
//!       "durationMinutes": 2, "ingredientIds": ["i1"] },
//!     { "id": "s2", "description": "Simmer", "type": "cooking",
//!       "durationMinutes": 20, "cookingSettings": { "temperature": 95, "speed": 1 } }
//!   ],
//!   "isFavorite": false,
//!   "createdAt": "2024-05-01T10:00:00Z",
//!   "updatedAt": "2024-05-01T10:00:00Z"
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use simmer_core::models::{Difficulty, Recipe};
//!
//! let recipe: Recipe = serde_json::from_str(r#"{
//!     "id": "r1",
//!     "title": "Boiled eggs",
//!     "difficulty": "Easy",
//!     "ingredients": [{ "id": "i1", "name": "Eggs", "quantity": 2, "unit": "pcs" }],
//!     "steps": [{ "id": "s1", "description": "Boil", "type": "cooking",
//!                 "durationMinutes": 7, "cookingSettings": { "temperature": 100, "speed": 1 } }],
//!     "createdAt": "2024-05-01T10:00:00Z",
//!     "updatedAt": "2024-05-01T10:00:00Z"
//! }"#).unwrap();
//!
//! assert_eq!(recipe.difficulty, Difficulty::Easy);
//! assert_eq!(recipe.total_duration_sec(), 420);
//! ```

pub mod difficulty;
pub mod filters;
pub mod ingredient;
pub mod recipe;
pub mod step;
pub mod summary;


pub use difficulty::Difficulty;
pub use filters::{DurationSort, RecipeFilter};
pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use step::{CookSettings, RecipeStep, SPEED_RANGE, StepKind, TEMPERATURE_RANGE};
pub use summary::RecipeSummary;
