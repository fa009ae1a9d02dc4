use simmer_core::{Database, db::recipe_queries::RECIPES_KEY};
use tempfile::NamedTempFile;

mod common;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), 1);
}

#[test]
fn test_reopen_keeps_schema_and_data() {
    let (temp_file, mut db) = create_test_db();
    db.put_value("greeting", "hello").unwrap();
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.get_value("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_kv_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.get_value("k").unwrap().is_none());
    db.put_value("k", "one").unwrap();
    db.put_value("k", "two").unwrap();
    assert_eq!(db.get_value("k").unwrap().as_deref(), Some("two"));

    assert!(db.delete_value("k").unwrap());
    assert!(!db.delete_value("k").unwrap());
    assert!(db.get_value("k").unwrap().is_none());
}

#[test]
fn test_empty_store_loads_no_recipes() {
    let (_temp_file, db) = create_test_db();
    assert!(db.load_recipes().unwrap().is_empty());
}

#[test]
fn test_recipes_persist_as_json_array() {
    let (_temp_file, mut db) = create_test_db();

    let recipe = common::pancake_draft().into_recipe(None).unwrap();
    db.save_recipes(std::slice::from_ref(&recipe)).unwrap();

    let raw = db.get_value(RECIPES_KEY).unwrap().expect("list is stored");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["title"], "Pancakes");
    assert_eq!(json[0]["steps"][1]["type"], "cooking");

    assert_eq!(db.load_recipes().unwrap(), vec![recipe]);
}

#[test]
fn test_corrupt_store_loads_empty() {
    let (_temp_file, mut db) = create_test_db();

    db.put_value(RECIPES_KEY, "{ definitely not json").unwrap();
    assert!(db.load_recipes().unwrap().is_empty());

    db.put_value(RECIPES_KEY, r#"{"recipes": []}"#).unwrap();
    assert!(db.load_recipes().unwrap().is_empty());
}

#[test]
fn test_partial_entries_are_dropped() {
    let (_temp_file, mut db) = create_test_db();

    let recipe = common::pancake_draft().into_recipe(None).unwrap();
    let good = serde_json::to_value(&recipe).unwrap();
    let raw = serde_json::json!([
        { "title": "No id" },
        { "id": "no-title" },
        { "id": "", "title": "Empty id" },
        good,
        "garbage"
    ])
    .to_string();
    db.put_value(RECIPES_KEY, &raw).unwrap();

    let loaded = db.load_recipes().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, recipe.id);
}
