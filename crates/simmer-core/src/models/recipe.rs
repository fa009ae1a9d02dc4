//! Recipe model definition and authoring validation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, Ingredient, RecipeStep, SPEED_RANGE, StepKind, TEMPERATURE_RANGE};
use crate::error::{CookError, Result};

/// Minimum number of characters in a trimmed recipe title.
pub const MIN_TITLE_CHARS: usize = 3;

/// Represents a complete recipe with ingredients and ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: String,

    /// Title of the recipe
    pub title: String,

    /// Optional cuisine label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    /// How demanding the recipe is
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Steps in cooking order
    #[serde(default)]
    pub steps: Vec<RecipeStep>,

    /// Whether the user starred this recipe
    #[serde(default)]
    pub is_favorite: bool,

    /// Timestamp when the recipe was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the recipe was last saved (UTC)
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Sum of all step durations, in seconds.
    pub fn total_duration_sec(&self) -> u32 {
        self.steps
            .iter()
            .fold(0u32, |acc, step| acc.saturating_add(step.duration_sec()))
    }

    /// Step durations in seconds, in cooking order.
    pub fn step_durations_sec(&self) -> Vec<u32> {
        self.steps.iter().map(RecipeStep::duration_sec).collect()
    }

    /// Looks up an ingredient by its ID.
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    /// Checks the authoring rules a recipe must satisfy before it is saved.
    ///
    /// # Errors
    ///
    /// Returns `CookError::InvalidInput` naming the first offending field:
    /// - title shorter than [`MIN_TITLE_CHARS`] after trimming
    /// - no ingredients, an unnamed ingredient, or a non-positive quantity
    /// - no steps, or a step with a zero duration
    /// - a cooking step with temperature or speed out of range
    /// - an instruction step without ingredients, or referencing an unknown one
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(CookError::invalid_input("title").with_reason(format!(
                "must be at least {MIN_TITLE_CHARS} characters"
            )));
        }

        if self.ingredients.is_empty() {
            return Err(CookError::invalid_input("ingredients")
                .with_reason("at least 1 ingredient is required"));
        }
        for (i, ingredient) in self.ingredients.iter().enumerate() {
            if ingredient.name.trim().is_empty() {
                return Err(CookError::invalid_input(format!("ingredients[{i}].name"))
                    .with_reason("must not be empty"));
            }
            if ingredient.quantity.is_nan() || ingredient.quantity <= 0.0 {
                return Err(CookError::invalid_input(format!("ingredients[{i}].quantity"))
                    .with_reason("must be greater than 0"));
            }
        }

        if self.steps.is_empty() {
            return Err(
                CookError::invalid_input("steps").with_reason("at least 1 step is required")
            );
        }
        for (i, step) in self.steps.iter().enumerate() {
            if step.duration_minutes == 0 {
                return Err(CookError::invalid_input(format!("steps[{i}].durationMinutes"))
                    .with_reason("must be greater than 0"));
            }
            match &step.kind {
                StepKind::Cooking { settings } => {
                    if !TEMPERATURE_RANGE.contains(&settings.temperature) {
                        return Err(CookError::invalid_input(format!(
                            "steps[{i}].cookingSettings.temperature"
                        ))
                        .with_reason(format!(
                            "must be between {} and {}",
                            TEMPERATURE_RANGE.start(),
                            TEMPERATURE_RANGE.end()
                        )));
                    }
                    if !SPEED_RANGE.contains(&settings.speed) {
                        return Err(CookError::invalid_input(format!(
                            "steps[{i}].cookingSettings.speed"
                        ))
                        .with_reason(format!(
                            "must be between {} and {}",
                            SPEED_RANGE.start(),
                            SPEED_RANGE.end()
                        )));
                    }
                }
                StepKind::Instruction { ingredient_ids } => {
                    if ingredient_ids.is_empty() {
                        return Err(CookError::invalid_input(format!(
                            "steps[{i}].ingredientIds"
                        ))
                        .with_reason("instruction steps need at least 1 ingredient"));
                    }
                    if let Some(unknown) = ingredient_ids
                        .iter()
                        .find(|id| self.ingredient(id).is_none())
                    {
                        return Err(CookError::invalid_input(format!(
                            "steps[{i}].ingredientIds"
                        ))
                        .with_reason(format!("unknown ingredient '{unknown}'")));
                    }
                }
            }
        }

        Ok(())
    }
}
