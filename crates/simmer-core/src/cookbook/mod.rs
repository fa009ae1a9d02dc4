//! High-level recipe store API.
//!
//! [`Cookbook`] is the recipe store used by every interface. It owns the path
//! to the SQLite database and runs each operation as one blocking unit of work
//! on tokio's blocking pool, so a read-modify-write of the recipe list is
//! never interleaved with another operation from the same process.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │    Cookbook     │    │    Database     │
//! │  presentation   │───▶│  (recipe_ops)   │───▶│  (kv + recipes) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Cookbook`] instances with configuration
//! - [`recipe_ops`]: List, lookup, save, remove, and favorite operations
//!
//! # Usage
//!
//! ```rust,no_run
//! use simmer_core::{CookbookBuilder, params::ListRecipes};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("/tmp/simmer.db"))
//!     .build()
//!     .await?;
//!
//! let summaries = cookbook.list_recipes_summary(&ListRecipes::default()).await?;
//! for summary in &summaries {
//!     println!("{}", summary.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{CookError, Result},
};

pub mod builder;
pub mod recipe_ops;


pub use builder::CookbookBuilder;

/// Recipe store backed by a SQLite key-value table.
#[derive(Debug, Clone)]
pub struct Cookbook {
    pub(crate) db_path: PathBuf,
}

impl Cookbook {
    /// Creates a new cookbook with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(CookError::join)?
    }
}
