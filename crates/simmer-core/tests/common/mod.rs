#![allow(dead_code)]

use simmer_core::{
    Cookbook, CookbookBuilder,
    params::{IngredientDraft, RecipeDraft, StepDraft, StepType},
};
use tempfile::TempDir;

/// Helper function to create a test cookbook
pub async fn create_test_cookbook() -> (TempDir, Cookbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let cookbook = CookbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create cookbook");
    (temp_dir, cookbook)
}

/// A two-step pancake recipe: 1 minute of mixing, then 2 minutes of frying.
pub fn pancake_draft() -> RecipeDraft {
    RecipeDraft {
        title: "Pancakes".to_string(),
        cuisine: Some("French".to_string()),
        ingredients: vec![
            IngredientDraft {
                name: "Flour".to_string(),
                quantity: 250.0,
                unit: "g".to_string(),
            },
            IngredientDraft {
                name: "Milk".to_string(),
                quantity: 500.0,
                unit: "ml".to_string(),
            },
        ],
        steps: vec![
            StepDraft {
                step_type: StepType::Instruction,
                description: "Mix flour and milk".to_string(),
                duration_minutes: 1,
                ingredients: vec!["Flour".to_string(), "Milk".to_string()],
                ..Default::default()
            },
            StepDraft {
                step_type: StepType::Cooking,
                description: "Fry".to_string(),
                duration_minutes: 2,
                temperature: Some(180),
                speed: Some(2),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
