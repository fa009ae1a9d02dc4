//! Recipe operations for the Cookbook.

use jiff::Timestamp;
use log::{debug, info};

use super::Cookbook;
use crate::{
    display::RecipeSummaries,
    error::{CookError, Result},
    models::{Recipe, RecipeFilter, RecipeSummary},
    params::{Id, ListRecipes, RecipeDraft},
};

impl Cookbook {
    /// Lists all recipes in stored order.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.with_database(|db| db.load_recipes()).await
    }

    /// Lists recipe summaries, filtered and sorted by total duration.
    pub async fn list_recipes_summary(&self, params: &ListRecipes) -> Result<RecipeSummaries> {
        let filter = RecipeFilter::from(params);
        let recipes = self.list_recipes().await?;
        let summaries = recipes.iter().map(RecipeSummary::from).collect();
        Ok(RecipeSummaries(filter.apply(summaries)))
    }

    /// Retrieves a recipe by its exact ID.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id.clone();
        self.with_database(move |db| {
            Ok(db.load_recipes()?.into_iter().find(|recipe| recipe.id == id))
        })
        .await
    }

    /// Retrieves a recipe by its exact ID or a unique ID prefix.
    ///
    /// # Errors
    ///
    /// * `CookError::RecipeNotFound` - When nothing matches
    /// * `CookError::AmbiguousRecipe` - When the prefix matches several recipes
    pub async fn resolve_recipe(&self, params: &Id) -> Result<Recipe> {
        let needle = params.id.trim().to_string();
        let recipes = self.list_recipes().await?;

        if let Some(exact) = recipes.iter().find(|recipe| recipe.id == needle) {
            return Ok(exact.clone());
        }
        if needle.is_empty() {
            return Err(CookError::RecipeNotFound { id: needle });
        }

        let mut matches: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| recipe.id.starts_with(&needle))
            .collect();
        match matches.len() {
            0 => Err(CookError::RecipeNotFound { id: needle }),
            1 => Ok(matches.remove(0)),
            count => Err(CookError::AmbiguousRecipe {
                prefix: needle,
                count,
            }),
        }
    }

    /// Creates a recipe from a draft, or replaces the one named by `draft.id`.
    ///
    /// # Errors
    ///
    /// * `CookError::RecipeNotFound` - When `draft.id` names no stored recipe
    /// * `CookError::InvalidInput` - When the draft fails authoring validation
    pub async fn save_recipe(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let draft = draft.clone();
        self.with_database(move |db| {
            let mut recipes = db.load_recipes()?;

            let recipe = match draft.id.clone() {
                Some(id) => {
                    let index = recipes
                        .iter()
                        .position(|recipe| recipe.id == id)
                        .ok_or(CookError::RecipeNotFound { id })?;
                    let recipe = draft.into_recipe(Some(&recipes[index]))?;
                    recipes[index] = recipe.clone();
                    info!("Updated recipe {}", recipe.id);
                    recipe
                }
                None => {
                    let recipe = draft.into_recipe(None)?;
                    recipes.push(recipe.clone());
                    info!("Created recipe {}", recipe.id);
                    recipe
                }
            };

            db.save_recipes(&recipes)?;
            Ok(recipe)
        })
        .await
    }

    /// Stores a complete recipe, replacing any recipe with the same ID or
    /// appending it otherwise. The recipe is validated first and its
    /// `updated_at` is set to now.
    pub async fn put_recipe(&self, recipe: Recipe) -> Result<Recipe> {
        recipe.validate()?;

        self.with_database(move |db| {
            let mut recipe = recipe;
            recipe.updated_at = Timestamp::now();

            let mut recipes = db.load_recipes()?;
            match recipes.iter_mut().find(|stored| stored.id == recipe.id) {
                Some(stored) => *stored = recipe.clone(),
                None => recipes.push(recipe.clone()),
            }

            db.save_recipes(&recipes)?;
            debug!("Stored recipe {}", recipe.id);
            Ok(recipe)
        })
        .await
    }

    /// Permanently removes a recipe. Returns the removed recipe, or None if
    /// no recipe had that ID.
    pub async fn remove_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id.clone();
        self.with_database(move |db| {
            let mut recipes = db.load_recipes()?;
            let Some(index) = recipes.iter().position(|recipe| recipe.id == id) else {
                return Ok(None);
            };

            let removed = recipes.remove(index);
            db.save_recipes(&recipes)?;
            info!("Removed recipe {}", removed.id);
            Ok(Some(removed))
        })
        .await
    }

    /// Flips the favorite flag of a recipe. Returns the updated recipe, or
    /// None if no recipe had that ID.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id.clone();
        self.with_database(move |db| {
            let mut recipes = db.load_recipes()?;
            let Some(recipe) = recipes.iter_mut().find(|recipe| recipe.id == id) else {
                return Ok(None);
            };

            recipe.is_favorite = !recipe.is_favorite;
            let updated = recipe.clone();
            db.save_recipes(&recipes)?;
            Ok(Some(updated))
        })
        .await
    }
}
