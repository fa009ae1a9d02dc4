//! Recipe list persistence.
//!
//! The whole list is serialized as one JSON array under [`RECIPES_KEY`].
//! Loading is tolerant: a missing key, unparseable JSON, or a non-array
//! document all load as an empty list, and individual entries that lack an ID
//! or title (or otherwise fail to deserialize) are dropped. A damaged store
//! must never prevent startup.

use log::warn;
use serde_json::Value;

use crate::{error::Result, models::Recipe};

/// Versioned key holding the serialized recipe list.
pub const RECIPES_KEY: &str = "recipes:v1";

impl super::Database {
    /// Loads the stored recipe list, dropping unreadable entries.
    pub fn load_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self
            .get_value(RECIPES_KEY)?
            .map(|raw| decode_recipes(&raw))
            .unwrap_or_default())
    }

    /// Replaces the stored recipe list.
    pub fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        let raw = serde_json::to_string(recipes)?;
        self.put_value(RECIPES_KEY, &raw)
    }
}

/// Decodes a serialized recipe list, keeping every entry that is usable.
///
/// # Examples
///
/// ```rust
/// use simmer_core::db::recipe_queries::decode_recipes;
///
/// assert!(decode_recipes("not json").is_empty());
/// assert!(decode_recipes(r#"{"id": "r1"}"#).is_empty());
/// assert!(decode_recipes(r#"[{"title": "no id"}]"#).is_empty());
/// ```
pub fn decode_recipes(raw: &str) -> Vec<Recipe> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("Stored recipe list is not an array; starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!("Stored recipe list is not valid JSON ({e}); starting empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !has_text(&entry, "id") || !has_text(&entry, "title") {
                warn!("Dropping stored recipe #{index}: missing id or title");
                return None;
            }
            match serde_json::from_value::<Recipe>(entry) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Dropping stored recipe #{index}: {e}");
                    None
                }
            }
        })
        .collect()
}

fn has_text(entry: &Value, field: &str) -> bool {
    entry
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}
