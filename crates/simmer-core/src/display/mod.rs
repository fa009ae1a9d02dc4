//! Display formatting for recipes, listings, operation results, and cook
//! sessions.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! collections and operation outcomes are wrapped in newtypes, and live
//! session views borrow the recipe together with a
//! [`SessionProgress`](crate::session::SessionProgress) snapshot. Everything
//! renders as markdown so the CLI can hand it to a terminal renderer and the
//! MCP server can return it verbatim.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RecipeSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`duration`]: Countdown and duration formatting
//! - [`cook`]: Cook screen and mini indicator
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use simmer_core::display::{OperationStatus, format_clock};
//!
//! assert_eq!(format_clock(125), "02:05");
//!
//! let done = OperationStatus::success("Recipe finished".to_string());
//! assert_eq!(done.to_string(), "Success: Recipe finished\n");
//! ```

pub mod collections;
pub mod cook;
pub mod datetime;
pub mod duration;
pub mod models;
pub mod results;
pub mod status;

pub use collections::RecipeSummaries;
pub use cook::{CookScreen, MiniIndicator};
pub use datetime::LocalDateTime;
pub use duration::{format_clock, format_minutes, format_short_clock};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
