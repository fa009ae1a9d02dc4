//! Filter types for listing recipes.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Difficulty, RecipeSummary};

/// Sort order for recipe lists, by total duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DurationSort {
    /// Shortest first
    #[default]
    Asc,

    /// Longest first
    Desc,
}

impl FromStr for DurationSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "shortest" => Ok(DurationSort::Asc),
            "desc" | "longest" => Ok(DurationSort::Desc),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

/// Filter options for listing recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Keep only these difficulties; empty keeps all
    pub difficulties: Vec<Difficulty>,

    /// Keep only starred recipes
    pub favorites_only: bool,

    /// Order by total duration
    pub sort: DurationSort,
}

impl RecipeFilter {
    /// Applies the filter and sort to a list of summaries.
    ///
    /// Sorting is stable, so recipes with equal durations keep their stored
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simmer_core::models::{Difficulty, DurationSort, RecipeFilter};
    ///
    /// let filter = RecipeFilter {
    ///     difficulties: vec![Difficulty::Easy],
    ///     sort: DurationSort::Desc,
    ///     ..Default::default()
    /// };
    /// assert!(filter.apply(Vec::new()).is_empty());
    /// ```
    pub fn apply(&self, summaries: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
        let mut kept: Vec<RecipeSummary> = summaries
            .into_iter()
            .filter(|s| self.difficulties.is_empty() || self.difficulties.contains(&s.difficulty))
            .filter(|s| !self.favorites_only || s.is_favorite)
            .collect();

        match self.sort {
            DurationSort::Asc => kept.sort_by_key(|s| s.total_duration_sec),
            DurationSort::Desc => kept.sort_by(|a, b| b.total_duration_sec.cmp(&a.total_duration_sec)),
        }
        kept
    }
}

impl From<&crate::params::ListRecipes> for RecipeFilter {
    fn from(params: &crate::params::ListRecipes) -> Self {
        Self {
            difficulties: params.difficulties.clone(),
            favorites_only: params.favorites,
            sort: params.sort,
        }
    }
}
