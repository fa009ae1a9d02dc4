//! MCP server for simmer
//!
//! Exposes the cookbook and a single cook-session engine as MCP tools over
//! stdio. The engine lives as long as the server; there is no background
//! ticker, so every cooking tool reconciles elapsed time when it runs.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use simmer_core::{Cookbook, session::CookEngine};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{Id, ListRecipes, McpResult, RecipeDraft};

/// MCP server for simmer
#[derive(Clone)]
pub struct SimmerMcpServer {
    cookbook: Arc<Mutex<Cookbook>>,
    engine: Arc<Mutex<CookEngine>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SimmerMcpServer {
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            cookbook: Arc::new(Mutex::new(cookbook)),
            engine: Arc::new(Mutex::new(CookEngine::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.cookbook.clone(), self.engine.clone())
    }

    #[tool(
        name = "list_recipes",
        description = "List saved recipes with cuisine, difficulty, total time and step count. Filter by difficulties (Easy, Medium, Hard) or favorites=true; sort is 'asc' (shortest first, default) or 'desc'."
    )]
    async fn list_recipes(&self, params: Parameters<ListRecipes>) -> McpResult {
        self.handlers().list_recipes(params).await
    }

    #[tool(
        name = "show_recipe",
        description = "Show a recipe in full: ingredients with quantities and every step with its duration, settings or ingredients. Accepts the recipe ID or a unique prefix of it."
    )]
    async fn show_recipe(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_recipe(params).await
    }

    #[tool(
        name = "save_recipe",
        description = "Create a recipe, or replace an existing one by passing its id. Needs a title of at least 3 characters, at least one ingredient with a positive quantity and at least one step. Instruction steps list the ingredient names they use; cooking steps need temperature (40-200 °C) and speed (1-5). Durations are whole minutes. The recipe being cooked cannot be replaced."
    )]
    async fn save_recipe(&self, params: Parameters<RecipeDraft>) -> McpResult {
        self.handlers().save_recipe(params).await
    }

    #[tool(
        name = "delete_recipe",
        description = "Delete a recipe permanently by ID or unique prefix. The recipe being cooked cannot be deleted; stop cooking first."
    )]
    async fn delete_recipe(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_recipe(params).await
    }

    #[tool(
        name = "toggle_favorite",
        description = "Star a recipe, or unstar it if it is already a favorite."
    )]
    async fn toggle_favorite(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().toggle_favorite(params).await
    }

    #[tool(
        name = "start_cooking",
        description = "Start cooking a recipe step by step with live timers. Only one recipe can be cooked at a time. Returns the first step with its countdown."
    )]
    async fn start_cooking(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().start_cooking(params).await
    }

    #[tool(
        name = "cook_status",
        description = "Show the current step of the recipe being cooked with remaining step time and overall progress. Steps whose time ran out since the last call move on automatically."
    )]
    async fn cook_status(&self) -> McpResult {
        self.handlers().cook_status().await
    }

    #[tool(
        name = "pause_cooking",
        description = "Pause the step timer of the recipe being cooked."
    )]
    async fn pause_cooking(&self) -> McpResult {
        self.handlers().pause_cooking().await
    }

    #[tool(
        name = "resume_cooking",
        description = "Resume the paused step timer of the recipe being cooked."
    )]
    async fn resume_cooking(&self) -> McpResult {
        self.handlers().resume_cooking().await
    }

    #[tool(
        name = "next_step",
        description = "Skip to the next step of the recipe being cooked. On the last step this finishes cooking."
    )]
    async fn next_step(&self) -> McpResult {
        self.handlers().next_step().await
    }

    #[tool(
        name = "stop_cooking",
        description = "Stop cooking and discard the session timers."
    )]
    async fn stop_cooking(&self) -> McpResult {
        self.handlers().stop_cooking().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SimmerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "simmer".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Simmer keeps a cookbook of recipes and guides cooking them step by step with timers.

## Core Concepts
- **Recipes**: a title, optional cuisine, difficulty, ingredients and ordered steps
- **Steps**: either an instruction using some of the ingredients, or a cooking step with temperature and speed. Every step lasts a whole number of minutes
- **Cook session**: countdowns for the current step and the whole recipe. Only one recipe is cooked at a time

## Workflow
1. Find a recipe with `list_recipes`, read it with `show_recipe`, or author one with `save_recipe`
2. Begin with `start_cooking`
3. Check in with `cook_status`; when a step's time is up the session moves to the next step on its own
4. Use `pause_cooking`/`resume_cooking` while away, `next_step` to skip ahead, `stop_cooking` to give up

## Tool Categories
- **Recipes**: list_recipes, show_recipe, save_recipe, delete_recipe, toggle_favorite
- **Cooking**: start_cooking, cook_status, pause_cooking, resume_cooking, next_step, stop_cooking"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SimmerMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting simmer MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
