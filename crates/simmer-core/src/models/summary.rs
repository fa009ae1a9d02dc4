//! Recipe summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, Recipe};

/// Summary information about a recipe with duration statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe ID
    pub id: String,
    /// Title of the recipe
    pub title: String,
    /// Optional cuisine label
    pub cuisine: Option<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Whether the recipe is starred
    pub is_favorite: bool,
    /// Number of steps
    pub step_count: u32,
    /// Sum of all step durations in seconds
    pub total_duration_sec: u32,
    /// Last save timestamp
    pub updated_at: Timestamp,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            difficulty: recipe.difficulty,
            is_favorite: recipe.is_favorite,
            step_count: recipe.steps.len() as u32,
            total_duration_sec: recipe.total_duration_sec(),
            updated_at: recipe.updated_at,
        }
    }
}
