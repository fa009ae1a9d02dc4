//! Recipe commands: clap argument types and their handlers.
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types with `From`, so `simmer_core::params` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Cookbook / CookEngine
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use simmer_core::{
    Cookbook,
    display::{CreateResult, DeleteResult, OperationStatus},
    models::{Difficulty, DurationSort},
    params::{Id, IngredientDraft, ListRecipes, RecipeDraft, StepDraft, StepType},
};

use crate::{cook, renderer::TerminalRenderer};

// ============================================================================
// Argument types
// ============================================================================

/// An ingredient given as `NAME:QUANTITY[:UNIT]`, e.g. `Flour:250:g`.
#[derive(Debug, Clone)]
pub struct IngredientSpec(pub IngredientDraft);

impl FromStr for IngredientSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        let quantity = parts
            .next()
            .ok_or_else(|| format!("'{s}': expected NAME:QUANTITY[:UNIT]"))?;
        let quantity: f64 = quantity
            .trim()
            .parse()
            .map_err(|_| format!("'{s}': quantity '{quantity}' is not a number"))?;
        let unit = parts.next().unwrap_or_default().trim();

        Ok(Self(IngredientDraft {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }))
    }
}

/// A step given in one of two forms:
///
/// - `instruction:MINUTES:DESCRIPTION:INGREDIENT[,INGREDIENT...]`
/// - `cooking:MINUTES:DESCRIPTION:TEMPERATURE:SPEED`
#[derive(Debug, Clone)]
pub struct StepSpec(pub StepDraft);

impl FromStr for StepSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let minutes = |raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| format!("'{s}': duration '{raw}' is not a whole number of minutes"))
        };

        let draft = match parts.as_slice() {
            ["instruction", duration, description, ingredients] => StepDraft {
                step_type: StepType::Instruction,
                description: description.to_string(),
                duration_minutes: minutes(*duration)?,
                ingredients: ingredients
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
                ..Default::default()
            },
            ["cooking", duration, description, temperature, speed] => StepDraft {
                step_type: StepType::Cooking,
                description: description.to_string(),
                duration_minutes: minutes(*duration)?,
                temperature: Some(
                    temperature
                        .parse()
                        .map_err(|_| format!("'{s}': temperature '{temperature}' is invalid"))?,
                ),
                speed: Some(
                    speed
                        .parse()
                        .map_err(|_| format!("'{s}': speed '{speed}' is invalid"))?,
                ),
                ..Default::default()
            },
            _ => {
                return Err(format!(
                    "'{s}': expected instruction:MINUTES:DESCRIPTION:INGREDIENTS \
                     or cooking:MINUTES:DESCRIPTION:TEMPERATURE:SPEED"
                ));
            }
        };
        Ok(Self(draft))
    }
}

/// Create a new recipe
#[derive(Args)]
pub struct CreateRecipeArgs {
    /// Title of the recipe (at least 3 characters)
    pub title: String,
    /// Cuisine label, e.g. Italian
    #[arg(long)]
    pub cuisine: Option<String>,
    /// Difficulty: easy, medium or hard
    #[arg(short, long, default_value = "easy")]
    pub difficulty: Difficulty,
    /// Ingredient as NAME:QUANTITY[:UNIT]; repeat for each ingredient
    #[arg(short, long = "ingredient", value_name = "SPEC", required = true)]
    pub ingredients: Vec<IngredientSpec>,
    /// Step as instruction:MIN:DESC:ING1,ING2 or cooking:MIN:DESC:TEMP:SPEED;
    /// repeat in cooking order
    #[arg(short, long = "step", value_name = "SPEC", required = true)]
    pub steps: Vec<StepSpec>,
}

impl From<CreateRecipeArgs> for RecipeDraft {
    fn from(val: CreateRecipeArgs) -> Self {
        RecipeDraft {
            id: None,
            title: val.title,
            cuisine: val.cuisine,
            difficulty: val.difficulty,
            ingredients: val.ingredients.into_iter().map(|spec| spec.0).collect(),
            steps: val.steps.into_iter().map(|spec| spec.0).collect(),
        }
    }
}

/// List recipes
///
/// Recipes are sorted by total cooking time, shortest first unless
/// `--sort desc` is given.
#[derive(Args)]
pub struct ListRecipesArgs {
    /// Only show these difficulties (comma-separated)
    #[arg(short, long = "difficulty", value_delimiter = ',')]
    pub difficulties: Vec<Difficulty>,
    /// Only show favorites
    #[arg(short, long)]
    pub favorites: bool,
    /// Sort by total duration: asc or desc
    #[arg(short, long, default_value = "asc")]
    pub sort: DurationSort,
}

impl From<ListRecipesArgs> for ListRecipes {
    fn from(val: ListRecipesArgs) -> Self {
        ListRecipes {
            difficulties: val.difficulties,
            favorites: val.favorites,
            sort: val.sort,
        }
    }
}

/// Identifies a recipe by ID or unique ID prefix
#[derive(Args)]
pub struct RecipeIdArgs {
    /// Recipe ID (a unique prefix is enough)
    pub id: String,
}

impl From<RecipeIdArgs> for Id {
    fn from(val: RecipeIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a recipe permanently
#[derive(Args)]
pub struct DeleteRecipeArgs {
    /// Recipe ID (a unique prefix is enough)
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Cook a recipe with live step timers
///
/// Keys (type, then Enter): p pause/resume, n next step, s show the full
/// step, q quit. Ctrl-C also ends the session.
#[derive(Args)]
pub struct CookArgs {
    /// Recipe ID (a unique prefix is enough)
    pub id: String,
    /// Timer refresh period in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Create a new recipe
    #[command(alias = "c")]
    Create(CreateRecipeArgs),
    /// List recipes
    #[command(aliases = ["l", "ls"])]
    List(ListRecipesArgs),
    /// Show a recipe
    #[command(alias = "s")]
    Show(RecipeIdArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
    /// Star or unstar a recipe
    #[command(alias = "f")]
    Favorite(RecipeIdArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs CLI commands against a cookbook and prints through the renderer.
pub struct Cli {
    cookbook: Cookbook,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(cookbook: Cookbook, renderer: TerminalRenderer) -> Self {
        Self { cookbook, renderer }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Create(args) => self.create_recipe(args.into()).await,
            RecipeCommands::List(args) => self.list_recipes(&args.into()).await,
            RecipeCommands::Show(args) => self.show_recipe(&args.into()).await,
            RecipeCommands::Delete(args) => self.delete_recipe(args).await,
            RecipeCommands::Favorite(args) => self.toggle_favorite(&args.into()).await,
        }
    }

    async fn create_recipe(&self, draft: RecipeDraft) -> Result<()> {
        let recipe = self
            .cookbook
            .save_recipe(&draft)
            .await
            .context("Failed to create recipe")?;
        self.renderer.render(&CreateResult::new(recipe).to_string())
    }

    pub async fn list_recipes(&self, params: &ListRecipes) -> Result<()> {
        let summaries = self
            .cookbook
            .list_recipes_summary(params)
            .await
            .context("Failed to list recipes")?;

        let title = if params.favorites {
            "Favorite Recipes"
        } else {
            "Recipes"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    async fn show_recipe(&self, id: &Id) -> Result<()> {
        let recipe = self.cookbook.resolve_recipe(id).await?;
        self.renderer.render(&recipe.to_string())
    }

    async fn delete_recipe(&self, args: DeleteRecipeArgs) -> Result<()> {
        let recipe = self.cookbook.resolve_recipe(&Id { id: args.id }).await?;
        if !args.confirm {
            bail!(
                "Refusing to delete recipe '{}' without --confirm",
                recipe.title
            );
        }

        let removed = self
            .cookbook
            .remove_recipe(&Id {
                id: recipe.id.clone(),
            })
            .await
            .context("Failed to delete recipe")?
            .with_context(|| format!("Recipe with ID {} not found", recipe.id))?;
        self.renderer.render(&DeleteResult::new(removed).to_string())
    }

    async fn toggle_favorite(&self, id: &Id) -> Result<()> {
        let recipe = self.cookbook.resolve_recipe(id).await?;
        let updated = self
            .cookbook
            .toggle_favorite(&Id { id: recipe.id })
            .await
            .context("Failed to update favorite")?
            .context("Recipe disappeared while updating")?;

        let message = if updated.is_favorite {
            format!("Added '{}' to favorites", updated.title)
        } else {
            format!("Removed '{}' from favorites", updated.title)
        };
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    pub async fn cook(&self, args: CookArgs) -> Result<()> {
        let recipe = self.cookbook.resolve_recipe(&Id { id: args.id }).await?;
        cook::run(&recipe, &self.renderer, args.tick_ms).await
    }
}
