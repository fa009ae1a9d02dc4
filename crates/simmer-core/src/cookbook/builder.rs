//! Builder for creating and configuring Cookbook instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Cookbook;
use crate::{
    db::Database,
    error::{CookError, Result},
};

/// Builder for creating and configuring Cookbook instances.
#[derive(Debug, Clone)]
pub struct CookbookBuilder {
    database_path: Option<PathBuf>,
}

impl CookbookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/simmer/simmer.db` or `~/.local/share/simmer/simmer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured cookbook instance.
    ///
    /// # Errors
    ///
    /// Returns `CookError::FileSystem` if the database directory cannot be created
    /// Returns `CookError::Database` if database initialization fails
    pub async fn build(self) -> Result<Cookbook> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening recipe store at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CookError>(())
        })
        .await
        .map_err(CookError::join)??;

        Ok(Cookbook::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("simmer")
            .place_data_file("simmer.db")
            .map_err(|e| CookError::XdgDirectory(e.to_string()))
    }
}

impl Default for CookbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
