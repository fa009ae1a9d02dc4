//! MCP tool handlers implementation

use std::sync::Arc;

use log::{debug, info};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use simmer_core::{
    CookError, Cookbook, Recipe,
    display::{CookScreen, CreateResult, DeleteResult, MiniIndicator, OperationStatus, UpdateResult},
    params as core,
    session::{Advance, Clock, CookEngine, MonotonicClock, PollOutcome, StartOutcome},
};
use tokio::sync::Mutex;

use super::to_mcp_error;

// ============================================================================
// Parameter wrapper
// ============================================================================
//
// Core parameter types derive JsonSchema behind the `schema` feature. The
// wrapper is transparent to serde and forwards the schema, so tool signatures
// stay in terms of the core types.

/// Transparent MCP wrapper around a core parameter type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type ListRecipes = McpParams<core::ListRecipes>;
pub type RecipeDraft = McpParams<core::RecipeDraft>;

pub type McpResult = Result<CallToolResult, ErrorData>;

const IDLE: &str = "No recipe is being cooked. Use start_cooking to begin.";

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

fn finished(recipe: &Recipe) -> String {
    OperationStatus::success(format!("Finished cooking '{}'", recipe.title)).to_string()
}

fn screen<C: Clock>(recipe: &Recipe, engine: &CookEngine<C>) -> String {
    engine
        .progress(&recipe.id)
        .map(|progress| CookScreen::new(recipe, &progress).to_string())
        .unwrap_or_else(|| finished(recipe))
}

fn indicator<C: Clock>(recipe: &Recipe, engine: &CookEngine<C>) -> String {
    engine
        .progress(&recipe.id)
        .map(|progress| MiniIndicator::new(recipe, &progress).to_string())
        .unwrap_or_default()
}

/// Handler implementations for the MCP server
///
/// Tools that touch both the engine and the cookbook lock the engine first.
pub struct McpHandlers<C: Clock = MonotonicClock> {
    cookbook: Arc<Mutex<Cookbook>>,
    engine: Arc<Mutex<CookEngine<C>>>,
}

impl<C: Clock> McpHandlers<C> {
    pub fn new(cookbook: Arc<Mutex<Cookbook>>, engine: Arc<Mutex<CookEngine<C>>>) -> Self {
        Self { cookbook, engine }
    }

    /// Load the recipe behind the active session.
    ///
    /// Saving or deleting the active recipe is refused, so a missing recipe
    /// here means the store changed underneath the server.
    async fn active_recipe(&self, recipe_id: &str) -> Result<Recipe, ErrorData> {
        self.cookbook
            .lock()
            .await
            .get_recipe(&core::Id {
                id: recipe_id.to_string(),
            })
            .await
            .map_err(|e| to_mcp_error("Failed to load recipe", &e))?
            .ok_or_else(|| {
                ErrorData::internal_error(format!("Recipe with ID {recipe_id} not found"), None)
            })
    }

    // ------------------------------------------------------------------------
    // Recipes
    // ------------------------------------------------------------------------

    pub async fn list_recipes(&self, Parameters(params): Parameters<ListRecipes>) -> McpResult {
        debug!("list_recipes: {:?}", params);

        let inner_params = params.as_ref();
        let summaries = self
            .cookbook
            .lock()
            .await
            .list_recipes_summary(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list recipes", &e))?;

        let title = if inner_params.favorites {
            "Favorite Recipes"
        } else {
            "Recipes"
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_recipe(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_recipe: {:?}", params);

        let recipe = self
            .cookbook
            .lock()
            .await
            .resolve_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get recipe", &e))?;
        text(recipe.to_string())
    }

    pub async fn save_recipe(&self, Parameters(params): Parameters<RecipeDraft>) -> McpResult {
        debug!("save_recipe: {:?}", params);

        let engine = self.engine.lock().await;
        let draft = params.as_ref();
        if let Some(id) = &draft.id
            && engine.is_active(id)
        {
            return Err(to_mcp_error(
                "Cannot save recipe",
                &CookError::RecipeInUse { id: id.clone() },
            ));
        }

        let recipe = self
            .cookbook
            .lock()
            .await
            .save_recipe(draft)
            .await
            .map_err(|e| to_mcp_error("Failed to save recipe", &e))?;

        if draft.id.is_some() {
            text(UpdateResult::new(recipe).to_string())
        } else {
            text(CreateResult::new(recipe).to_string())
        }
    }

    pub async fn delete_recipe(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_recipe: {:?}", params);

        let engine = self.engine.lock().await;
        let cookbook = self.cookbook.lock().await;
        let recipe = cookbook
            .resolve_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete recipe", &e))?;

        if engine.is_active(&recipe.id) {
            return Err(to_mcp_error(
                "Cannot delete recipe",
                &CookError::RecipeInUse { id: recipe.id },
            ));
        }

        let removed = cookbook
            .remove_recipe(&core::Id { id: recipe.id })
            .await
            .map_err(|e| to_mcp_error("Failed to delete recipe", &e))?
            .ok_or_else(|| ErrorData::internal_error("Recipe disappeared while deleting", None))?;
        text(DeleteResult::new(removed).to_string())
    }

    pub async fn toggle_favorite(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_favorite: {:?}", params);

        let cookbook = self.cookbook.lock().await;
        let recipe = cookbook
            .resolve_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update favorite", &e))?;
        let updated = cookbook
            .toggle_favorite(&core::Id { id: recipe.id })
            .await
            .map_err(|e| to_mcp_error("Failed to update favorite", &e))?
            .ok_or_else(|| ErrorData::internal_error("Recipe disappeared while updating", None))?;

        let change = if updated.is_favorite {
            "Marked as favorite"
        } else {
            "Removed from favorites"
        };
        text(UpdateResult::with_changes(updated, vec![change.to_string()]).to_string())
    }

    // ------------------------------------------------------------------------
    // Cooking
    //
    // Every cooking tool polls the active session first, so time that passed
    // between calls is charged and expired steps move on before anything else
    // happens.
    // ------------------------------------------------------------------------

    pub async fn start_cooking(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("start_cooking: {:?}", params);

        let mut engine = self.engine.lock().await;
        let recipe = self
            .cookbook
            .lock()
            .await
            .resolve_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to start cooking", &e))?;

        // A session whose time ran out since the last call must not block
        // the new start
        if let Some(active) = engine.active_recipe_id().map(str::to_string)
            && active != recipe.id
            && let PollOutcome::Finished { .. } = engine.poll(&active)
        {
            info!("Session for {active} finished while unattended");
        }

        match engine.start(&recipe) {
            StartOutcome::Started => {
                info!("Cooking {}", recipe.id);
                text(screen(&recipe, &engine))
            }
            StartOutcome::AlreadyStarted => {
                if let PollOutcome::Finished { .. } = engine.poll(&recipe.id) {
                    return text(finished(&recipe));
                }
                text(format!(
                    "Already cooking '{}'.\n\n{}",
                    recipe.title,
                    screen(&recipe, &engine)
                ))
            }
            StartOutcome::Conflict { active } => Err(ErrorData::invalid_params(
                format!("Already cooking recipe {active}. Use stop_cooking first."),
                None,
            )),
            StartOutcome::NoSteps => Err(ErrorData::invalid_params(
                format!("Recipe '{}' has no steps to cook", recipe.title),
                None,
            )),
        }
    }

    pub async fn cook_status(&self) -> McpResult {
        debug!("cook_status");

        let mut engine = self.engine.lock().await;
        let Some(recipe_id) = engine.active_recipe_id().map(str::to_string) else {
            return text(IDLE);
        };
        let recipe = self.active_recipe(&recipe_id).await?;

        match engine.poll(&recipe_id) {
            PollOutcome::Finished { .. } => text(finished(&recipe)),
            _ => text(screen(&recipe, &engine)),
        }
    }

    pub async fn pause_cooking(&self) -> McpResult {
        debug!("pause_cooking");
        self.set_running(false).await
    }

    pub async fn resume_cooking(&self) -> McpResult {
        debug!("resume_cooking");
        self.set_running(true).await
    }

    async fn set_running(&self, is_running: bool) -> McpResult {
        let mut engine = self.engine.lock().await;
        let Some(recipe_id) = engine.active_recipe_id().map(str::to_string) else {
            return text(IDLE);
        };
        let recipe = self.active_recipe(&recipe_id).await?;

        if let PollOutcome::Finished { .. } = engine.poll(&recipe_id) {
            return text(finished(&recipe));
        }

        let was_running = engine
            .session(&recipe_id)
            .is_some_and(|session| session.is_running);
        let message = match (was_running, is_running) {
            (true, false) => format!("Paused cooking '{}'", recipe.title),
            (false, false) => format!("'{}' is already paused", recipe.title),
            (false, true) => format!("Resumed cooking '{}'", recipe.title),
            (true, true) => format!("'{}' is already running", recipe.title),
        };
        if was_running != is_running {
            engine.pause_resume(&recipe_id, is_running);
        }
        text(format!(
            "{}\n{}\n",
            OperationStatus::success(message).to_string().trim_end(),
            indicator(&recipe, &engine)
        ))
    }

    pub async fn next_step(&self) -> McpResult {
        debug!("next_step");

        let mut engine = self.engine.lock().await;
        let Some(recipe_id) = engine.active_recipe_id().map(str::to_string) else {
            return text(IDLE);
        };
        let recipe = self.active_recipe(&recipe_id).await?;

        if let PollOutcome::Finished { .. } = engine.poll(&recipe_id) {
            return text(finished(&recipe));
        }

        match engine.advance_or_end(&recipe_id) {
            Advance::Moved { .. } => text(screen(&recipe, &engine)),
            Advance::Ended | Advance::Ignored => text(finished(&recipe)),
        }
    }

    pub async fn stop_cooking(&self) -> McpResult {
        debug!("stop_cooking");

        let mut engine = self.engine.lock().await;
        let Some(recipe_id) = engine.active_recipe_id().map(str::to_string) else {
            return text(IDLE);
        };
        let recipe = self.active_recipe(&recipe_id).await?;

        engine.end_session(&recipe_id);
        text(OperationStatus::success(format!("Stopped cooking '{}'", recipe.title)).to_string())
    }
}
