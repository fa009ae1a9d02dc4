//! simmer CLI application
//!
//! Command-line interface for managing recipes and cooking them step by step,
//! plus an MCP server mode for assistants.

mod args;
mod cli;
mod cook;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands::*};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{SimmerMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use simmer_core::{CookbookBuilder, params::ListRecipes};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let cookbook = CookbookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open recipe store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("simmer started");

    match command {
        Some(Recipe { command }) => {
            Cli::new(cookbook, renderer)
                .handle_recipe_command(command)
                .await
        }
        Some(Cook(args)) => Cli::new(cookbook, renderer).cook(args).await,
        Some(Serve) => {
            info!("Starting simmer MCP server");
            run_stdio_server(SimmerMcpServer::new(cookbook))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(cookbook, renderer)
                .list_recipes(&ListRecipes::default())
                .await
        }
    }
}
