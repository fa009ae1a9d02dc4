use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CookArgs, RecipeCommands};

/// Guided, timed cooking from the terminal
///
/// simmer keeps a local recipe collection and walks you through a recipe one
/// timed step at a time. It can also run as an MCP (Model Context Protocol)
/// server so an assistant can manage recipes and drive a cook session.
#[derive(Parser)]
#[command(version, about, name = "simmer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/simmer/simmer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, simmer lists your recipes.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Cook a recipe step by step with live timers
    #[command(alias = "c")]
    Cook(CookArgs),
    /// Start the MCP server
    Serve,
}
