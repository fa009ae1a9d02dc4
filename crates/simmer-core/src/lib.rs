//! Core library for the simmer recipe and cook-along application.
//!
//! The crate has two halves:
//!
//! - A **recipe store** ([`Cookbook`]) that persists recipes as one JSON
//!   document in a SQLite key-value table, with authoring validation and
//!   defensive loading.
//! - A **cook-session engine** ([`session::CookEngine`]) that runs step and
//!   overall countdowns for the recipe being cooked, reconciling them against
//!   a monotonic clock on every tick.
//!
//! Presentation lives in [`display`]: domain models implement
//! [`std::fmt::Display`] as markdown, and the cook views pair a recipe with a
//! progress snapshot from the engine.
//!
//! # Quick Start
//!
//! ```rust
//! use simmer_core::{
//!     CookbookBuilder,
//!     params::{IngredientDraft, RecipeDraft, StepDraft, StepType},
//!     session::{CookEngine, StartOutcome},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let recipe = cookbook
//!     .save_recipe(&RecipeDraft {
//!         title: "Porridge".to_string(),
//!         ingredients: vec![IngredientDraft {
//!             name: "Oats".to_string(),
//!             quantity: 50.0,
//!             unit: "g".to_string(),
//!         }],
//!         steps: vec![StepDraft {
//!             step_type: StepType::Cooking,
//!             description: "Simmer".to_string(),
//!             duration_minutes: 5,
//!             temperature: Some(90),
//!             speed: Some(1),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let mut engine = CookEngine::new();
//! assert_eq!(engine.start(&recipe), StartOutcome::Started);
//! println!("{:?}", engine.progress(&recipe.id));
//! # Ok(())
//! # }
//! ```

pub mod cookbook;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use cookbook::{Cookbook, CookbookBuilder};
pub use db::Database;
pub use display::{
    CookScreen, CreateResult, DeleteResult, LocalDateTime, MiniIndicator, OperationStatus,
    RecipeSummaries, UpdateResult,
};
pub use error::{CookError, Result};
pub use models::{
    CookSettings, Difficulty, DurationSort, Ingredient, Recipe, RecipeFilter, RecipeStep,
    RecipeSummary, StepKind,
};
pub use params::{Id, IngredientDraft, ListRecipes, RecipeDraft, StepDraft, StepType};
pub use session::{
    Advance, CookEngine, CookSession, NextStep, PollOutcome, SessionProgress, StartOutcome,
};
