//! Views of a live cook session.
//!
//! Both views pair a recipe with a [`SessionProgress`] snapshot taken from
//! the engine. The recipe supplies names and instructions; all timing comes
//! from the snapshot.

use std::fmt;

use super::{
    duration::{format_clock, format_short_clock},
    models::meta_line,
};
use crate::{
    models::{Recipe, StepKind},
    session::SessionProgress,
};

/// Full-screen markdown view of the step being cooked.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use simmer_core::{
///     display::CookScreen,
///     models::{CookSettings, Difficulty, Ingredient, Recipe, RecipeStep, StepKind},
///     session::{CookEngine, ManualClock},
/// };
///
/// let recipe = Recipe {
///     id: "r1".to_string(),
///     title: "Soft eggs".to_string(),
///     cuisine: None,
///     difficulty: Difficulty::Easy,
///     ingredients: vec![Ingredient {
///         id: "egg".to_string(),
///         name: "Eggs".to_string(),
///         quantity: 2.0,
///         unit: String::new(),
///     }],
///     steps: vec![RecipeStep {
///         id: "s1".to_string(),
///         description: "Boil".to_string(),
///         duration_minutes: 6,
///         kind: StepKind::Cooking {
///             settings: CookSettings { temperature: 100, speed: 1 },
///         },
///     }],
///     is_favorite: false,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let mut engine = CookEngine::with_clock(ManualClock::new());
/// engine.start(&recipe);
/// let progress = engine.progress("r1").unwrap();
///
/// let screen = CookScreen::new(&recipe, &progress).to_string();
/// assert!(screen.contains("## Step 1 of 1"));
/// assert!(screen.contains("06:00"));
/// ```
pub struct CookScreen<'a> {
    pub recipe: &'a Recipe,
    pub progress: &'a SessionProgress,
}

impl<'a> CookScreen<'a> {
    pub fn new(recipe: &'a Recipe, progress: &'a SessionProgress) -> Self {
        Self { recipe, progress }
    }
}

impl fmt::Display for CookScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;
        let progress = self.progress;

        writeln!(f, "# {}", recipe.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "*{}*",
            meta_line(
                recipe.cuisine.as_deref(),
                recipe.difficulty,
                progress.total_duration_sec
            )
        )?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(
            f,
            "\n## Step {} of {}",
            progress.step_number(),
            progress.step_count
        )?;
        writeln!(f)?;

        if let Some(step) = recipe.steps.get(progress.step_index) {
            if !step.description.is_empty() {
                writeln!(f, "{}", step.description)?;
                writeln!(f)?;
            }
            match &step.kind {
                StepKind::Cooking { settings } => writeln!(
                    f,
                    "- Settings: {}°C, speed {}",
                    settings.temperature, settings.speed
                )?,
                StepKind::Instruction { ingredient_ids } => {
                    let names: Vec<&str> = ingredient_ids
                        .iter()
                        .filter_map(|id| recipe.ingredient(id))
                        .map(|ingredient| ingredient.name.as_str())
                        .collect();
                    if !names.is_empty() {
                        writeln!(f, "- Uses: {}", names.join(", "))?;
                    }
                }
            }
        }

        let state = if progress.is_running { "" } else { " (paused)" };
        writeln!(
            f,
            "- Remaining: **{}**{state}",
            format_clock(progress.step_remaining_sec)
        )?;
        writeln!(
            f,
            "- Overall: {}% complete, {} left",
            progress.overall_percent,
            format_clock(progress.overall_remaining_sec)
        )
    }
}

/// One-line status for redrawing on every tick.
pub struct MiniIndicator<'a> {
    pub recipe: &'a Recipe,
    pub progress: &'a SessionProgress,
}

impl<'a> MiniIndicator<'a> {
    pub fn new(recipe: &'a Recipe, progress: &'a SessionProgress) -> Self {
        Self { recipe, progress }
    }
}

impl fmt::Display for MiniIndicator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.progress.is_running { "▶" } else { "⏸" };
        write!(
            f,
            "{} · step {}/{} · {} {marker} · {}%",
            self.recipe.title,
            self.progress.step_number(),
            self.progress.step_count,
            format_short_clock(self.progress.step_remaining_sec),
            self.progress.step_percent
        )
    }
}
