//! Database operations and SQLite management for the recipe store.
//!
//! The store is a small key-value table. Each key holds one serialized
//! document, and the whole recipe list lives under a single versioned key
//! (see [`recipe_queries::RECIPES_KEY`]).

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;
pub mod recipe_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
