//! Parameter structures for simmer operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into these
//! types: the CLI via `From<...Args>` conversions, the MCP server through a
//! transparent serde wrapper that adds a JSON schema.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! [`RecipeDraft`] is the authoring input: ingredients are listed without
//! IDs and instruction steps reference them by name. Converting a draft into a
//! [`Recipe`] assigns fresh IDs, resolves the names, and runs the authoring
//! validation, so an invalid draft never reaches the store.

use std::collections::HashMap;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{CookError, Result},
    models::{CookSettings, Difficulty, DurationSort, Ingredient, Recipe, RecipeStep, StepKind},
};

/// Generic parameters for operations requiring just a recipe ID.
///
/// Accepts a full ID or, where the operation resolves it, a unique prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID (or unique ID prefix) of the recipe to operate on
    pub id: String,
}

/// Parameters for listing recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRecipes {
    /// Only show these difficulties (empty shows all)
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
    /// Only show starred recipes
    #[serde(default)]
    pub favorites: bool,
    /// Sort by total duration: "asc" (shortest first) or "desc"
    #[serde(default)]
    pub sort: DurationSort,
}

/// Kind of a drafted step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Manual work with ingredients
    #[default]
    Instruction,
    /// Appliance step with temperature and speed
    Cooking,
}

/// An ingredient as authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct IngredientDraft {
    /// Ingredient name, also used by steps to reference it
    pub name: String,
    /// Amount needed (> 0)
    pub quantity: f64,
    /// Unit of the quantity (g, ml, pcs, ...)
    #[serde(default)]
    pub unit: String,
}

/// A step as authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepDraft {
    /// "instruction" or "cooking"
    #[serde(rename = "type", default)]
    pub step_type: StepType,
    /// What to do during the step
    #[serde(default)]
    pub description: String,
    /// Duration in whole minutes (> 0)
    pub duration_minutes: u32,
    /// Cooking steps: temperature in °C (40-200)
    pub temperature: Option<u16>,
    /// Cooking steps: speed level (1-5)
    pub speed: Option<u8>,
    /// Instruction steps: names of the ingredients used
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Parameters for creating or replacing a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecipeDraft {
    /// ID of the recipe to replace; omit to create a new recipe
    pub id: Option<String>,
    /// Title of the recipe (at least 3 characters)
    pub title: String,
    /// Optional cuisine label
    pub cuisine: Option<String>,
    /// Difficulty: Easy, Medium or Hard
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Ingredients in display order (at least 1)
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
    /// Steps in cooking order (at least 1)
    #[serde(default)]
    pub steps: Vec<StepDraft>,
}

impl RecipeDraft {
    /// Build a validated recipe from the draft.
    ///
    /// Fresh IDs are generated for the ingredients and steps. When `existing`
    /// is given, its ID, creation time, and favorite flag are carried over.
    ///
    /// # Errors
    ///
    /// * `CookError::InvalidInput` - When a cooking step lacks settings
    /// * `CookError::InvalidInput` - When a step names an unknown ingredient
    /// * `CookError::InvalidInput` - When the resulting recipe fails
    ///   [`Recipe::validate`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simmer_core::params::{IngredientDraft, RecipeDraft, StepDraft, StepType};
    ///
    /// let draft = RecipeDraft {
    ///     title: "Soft boiled eggs".to_string(),
    ///     ingredients: vec![IngredientDraft {
    ///         name: "Eggs".to_string(),
    ///         quantity: 2.0,
    ///         unit: "pcs".to_string(),
    ///     }],
    ///     steps: vec![StepDraft {
    ///         step_type: StepType::Instruction,
    ///         description: "Lower the eggs into boiling water".to_string(),
    ///         duration_minutes: 6,
    ///         ingredients: vec!["eggs".to_string()],
    ///         ..Default::default()
    ///     }],
    ///     ..Default::default()
    /// };
    ///
    /// let recipe = draft.into_recipe(None)?;
    /// assert_eq!(recipe.total_duration_sec(), 360);
    /// # Ok::<(), simmer_core::CookError>(())
    /// ```
    pub fn into_recipe(self, existing: Option<&Recipe>) -> Result<Recipe> {
        let ingredients: Vec<Ingredient> = self
            .ingredients
            .into_iter()
            .map(|draft| Ingredient {
                id: Uuid::new_v4().to_string(),
                name: draft.name.trim().to_string(),
                quantity: draft.quantity,
                unit: draft.unit.trim().to_string(),
            })
            .collect();

        let by_name: HashMap<String, &str> = ingredients
            .iter()
            .map(|ingredient| (ingredient.name.to_lowercase(), ingredient.id.as_str()))
            .collect();

        let mut steps = Vec::with_capacity(self.steps.len());
        for (i, draft) in self.steps.into_iter().enumerate() {
            let kind = match draft.step_type {
                StepType::Cooking => {
                    let (Some(temperature), Some(speed)) = (draft.temperature, draft.speed) else {
                        return Err(CookError::invalid_input(format!("steps[{i}]"))
                            .with_reason("cooking steps require temperature and speed"));
                    };
                    StepKind::Cooking {
                        settings: CookSettings { temperature, speed },
                    }
                }
                StepType::Instruction => {
                    let mut ingredient_ids = Vec::with_capacity(draft.ingredients.len());
                    for name in &draft.ingredients {
                        let id = by_name.get(&name.trim().to_lowercase()).ok_or_else(|| {
                            CookError::invalid_input(format!("steps[{i}].ingredients"))
                                .with_reason(format!("unknown ingredient '{name}'"))
                        })?;
                        ingredient_ids.push((*id).to_string());
                    }
                    StepKind::Instruction { ingredient_ids }
                }
            };
            steps.push(RecipeStep {
                id: Uuid::new_v4().to_string(),
                description: draft.description.trim().to_string(),
                duration_minutes: draft.duration_minutes,
                kind,
            });
        }

        let now = Timestamp::now();
        let recipe = Recipe {
            id: existing
                .map(|r| r.id.clone())
                .or(self.id)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: self.title.trim().to_string(),
            cuisine: self
                .cuisine
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            difficulty: self.difficulty,
            ingredients,
            steps,
            is_favorite: existing.is_some_and(|r| r.is_favorite),
            created_at: existing.map_or(now, |r| r.created_at),
            updated_at: now,
        };

        recipe.validate()?;
        Ok(recipe)
    }
}
