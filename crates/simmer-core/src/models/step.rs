//! Recipe step model definition.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed appliance temperature for cooking steps, in °C.
pub const TEMPERATURE_RANGE: RangeInclusive<u16> = 40..=200;

/// Allowed appliance speed for cooking steps.
pub const SPEED_RANGE: RangeInclusive<u8> = 1..=5;

/// Represents one timed stage of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// Unique identifier within the recipe
    pub id: String,

    /// What to do during this step
    #[serde(default)]
    pub description: String,

    /// Duration of the step in whole minutes (must be positive)
    pub duration_minutes: u32,

    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: StepKind,
}

/// Discriminated step payload, tagged as `"type"` when serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepKind {
    /// Appliance runs with the given settings
    Cooking {
        #[serde(rename = "cookingSettings")]
        settings: CookSettings,
    },

    /// Manual work with the referenced ingredients
    Instruction {
        #[serde(rename = "ingredientIds")]
        ingredient_ids: Vec<String>,
    },
}

/// Appliance settings for a cooking step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookSettings {
    /// Temperature in °C, within [`TEMPERATURE_RANGE`]
    pub temperature: u16,

    /// Speed level, within [`SPEED_RANGE`]
    pub speed: u8,
}

impl RecipeStep {
    /// Duration of the step in seconds.
    pub fn duration_sec(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    /// Short name of the step kind.
    pub fn kind_str(&self) -> &'static str {
        match self.kind {
            StepKind::Cooking { .. } => "cooking",
            StepKind::Instruction { .. } => "instruction",
        }
    }
}
