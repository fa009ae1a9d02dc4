use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn simmer_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("simmer").expect("Failed to find simmer binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Create the pancake recipe and return its ID
fn create_pancakes(db_path: &Path) -> String {
    let output = simmer_cmd(db_path)
        .args([
            "recipe",
            "create",
            "Pancakes",
            "--cuisine",
            "French",
            "--ingredient",
            "Flour:250:g",
            "--ingredient",
            "Milk:500:ml",
            "--step",
            "instruction:1:Mix flour and milk:Flour,Milk",
            "--step",
            "cooking:2:Fry:180:2",
        ])
        .output()
        .expect("Failed to run simmer");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created recipe with ID: "))
        .expect("No recipe ID in output")
        .trim()
        .to_string()
}

#[test]
fn test_cli_create_recipe() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args([
            "recipe",
            "create",
            "Omelette",
            "-d",
            "medium",
            "-i",
            "Eggs:3",
            "-s",
            "cooking:4:Cook gently:120:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recipe with ID:"))
        .stdout(predicate::str::contains("# Omelette"))
        .stdout(predicate::str::contains("- 3 Eggs"))
        .stdout(predicate::str::contains("- Settings: 120°C, speed 1"));
}

#[test]
fn test_cli_create_invalid_recipe_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args(["recipe", "create", "Ab", "-i", "Eggs:3", "-s", "cooking:4:Cook:120:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create recipe"));

    simmer_cmd(&db_path)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_bad_step_spec_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args(["recipe", "create", "Omelette", "-i", "Eggs:3", "-s", "baking:4:Bake"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected instruction:MINUTES"));
}

#[test]
fn test_cli_list_empty_recipes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Recipes"))
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_default_command_lists_recipes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("## Pancakes (ID: {id})")))
        .stdout(predicate::str::contains("- French • Easy • 3 min"))
        .stdout(predicate::str::contains("- Steps: 2"));
}

#[test]
fn test_cli_show_recipe_by_prefix() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["recipe", "show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pancakes"))
        .stdout(predicate::str::contains("## Ingredients"))
        .stdout(predicate::str::contains("- Uses: Flour, Milk"));
}

#[test]
fn test_cli_show_unknown_recipe_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args(["recipe", "show", "does-not-exist"])
        .assert()
        .failure();
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["recipe", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without --confirm"));

    simmer_cmd(&db_path)
        .args(["recipe", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 'Pancakes'"));

    simmer_cmd(&db_path)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_favorite_toggles_and_filters() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["recipe", "favorite", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Pancakes' to favorites"));

    simmer_cmd(&db_path)
        .args(["recipe", "list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Favorite Recipes"))
        .stdout(predicate::str::contains("## Pancakes ★"));

    simmer_cmd(&db_path)
        .args(["recipe", "favorite", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Pancakes' from favorites"));
}

#[test]
fn test_cli_list_filters_by_difficulty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["recipe", "list", "-d", "medium,hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_cook_quit() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["cook", &id])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 1 of 2"))
        .stdout(predicate::str::contains("- Remaining: **01:00**"))
        .stdout(predicate::str::contains("Stopped cooking 'Pancakes'"));
}

#[test]
fn test_cli_cook_skip_to_finish() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_pancakes(&db_path);

    simmer_cmd(&db_path)
        .args(["cook", &id])
        .write_stdin("p\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Paused"))
        .stdout(predicate::str::contains("## Step 2 of 2"))
        .stdout(predicate::str::contains("- Settings: 180°C, speed 2"))
        .stdout(predicate::str::contains("Finished cooking 'Pancakes'"));
}

#[test]
fn test_cli_cook_unknown_recipe_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    simmer_cmd(&db_path)
        .args(["cook", "nothing"])
        .assert()
        .failure();
}
