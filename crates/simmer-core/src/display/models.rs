//! Display implementations for domain models.
//!
//! Recipes render as markdown documents and summaries as compact list
//! entries, mirroring how they appear in the CLI and MCP responses.

use std::fmt;

use super::{datetime::LocalDateTime, duration::format_minutes};
use crate::models::{Difficulty, Ingredient, Recipe, RecipeStep, RecipeSummary, StepKind};

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} {}", self.quantity, self.name)
        } else {
            write!(f, "{} {} {}", self.quantity, self.unit, self.name)
        }
    }
}

/// Renders the `cuisine • difficulty • minutes` line shared by recipes and
/// summaries.
pub(crate) fn meta_line(cuisine: Option<&str>, difficulty: Difficulty, total_sec: u32) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(cuisine) = cuisine {
        parts.push(cuisine.to_string());
    }
    parts.push(difficulty.to_string());
    parts.push(format_minutes(total_sec));
    parts.join(" • ")
}

impl Recipe {
    /// Writes one step as a markdown section.
    pub(crate) fn fmt_step(
        &self,
        f: &mut fmt::Formatter<'_>,
        number: usize,
        step: &RecipeStep,
    ) -> fmt::Result {
        writeln!(
            f,
            "### {number}. {} ({}, {})",
            if step.description.is_empty() {
                "Untitled step"
            } else {
                step.description.as_str()
            },
            step.kind_str(),
            format_minutes(step.duration_sec())
        )?;
        writeln!(f)?;

        match &step.kind {
            StepKind::Cooking { settings } => {
                writeln!(
                    f,
                    "- Settings: {}°C, speed {}",
                    settings.temperature, settings.speed
                )?;
            }
            StepKind::Instruction { ingredient_ids } => {
                let names: Vec<&str> = ingredient_ids
                    .iter()
                    .map(|id| self.ingredient(id).map_or(id.as_str(), |i| i.name.as_str()))
                    .collect();
                writeln!(f, "- Uses: {}", names.join(", "))?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.is_favorite { " ★" } else { "" };
        writeln!(f, "# {}{star}", self.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "*{}*",
            meta_line(
                self.cuisine.as_deref(),
                self.difficulty,
                self.total_duration_sec()
            )
        )?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for (index, step) in self.steps.iter().enumerate() {
                self.fmt_step(f, index + 1, step)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.is_favorite { " ★" } else { "" };
        writeln!(f, "## {}{star} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- {}",
            meta_line(
                self.cuisine.as_deref(),
                self.difficulty,
                self.total_duration_sec
            )
        )?;
        writeln!(f, "- Steps: {}", self.step_count)?;
        writeln!(f)
    }
}
