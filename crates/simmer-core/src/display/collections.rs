//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::RecipeSummary;

/// Newtype wrapper for displaying a recipe listing.
///
/// # Examples
///
/// ```rust
/// use simmer_core::display::RecipeSummaries;
///
/// let empty = RecipeSummaries(vec![]);
/// assert_eq!(empty.to_string(), "No recipes found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeSummaries(pub Vec<RecipeSummary>);

impl RecipeSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&RecipeSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeSummaries {
    type Output = RecipeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RecipeSummaries {
    type Item = RecipeSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSummaries {
    type Item = &'a RecipeSummary;
    type IntoIter = std::slice::Iter<'a, RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecipeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Difficulty;

    fn summary(id: &str, title: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            title: title.to_string(),
            cuisine: None,
            difficulty: Difficulty::Medium,
            is_favorite: false,
            step_count: 3,
            total_duration_sec: 900,
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_recipe_summaries_display() {
        let summaries = RecipeSummaries(vec![summary("a", "Soup"), summary("b", "Bread")]);
        let output = summaries.to_string();

        assert!(output.contains("## Soup (ID: a)"));
        assert!(output.contains("## Bread (ID: b)"));
        assert!(output.find("Soup") < output.find("Bread"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_recipe_summaries_accessors() {
        let summaries = RecipeSummaries(vec![summary("a", "Soup")]);
        assert_eq!(summaries.len(), 1);
        assert!(!summaries.is_empty());
        assert_eq!(summaries[0].id, "a");
        assert!(summaries.get(1).is_none());
        assert_eq!(summaries.iter().count(), 1);
    }
}
