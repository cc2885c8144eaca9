mod support;

use assert_cmd::Command;
use predicates::prelude::*;

use support::write_config;

fn smartchef(dir: &std::path::Path) -> Command {
    let data_dir = dir.join("data");
    let config = write_config(dir, &data_dir);
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smartchef"));
    cmd.arg("--config").arg(config).env_remove("SMARTCHEF_DATA_DIR");
    cmd
}

#[test]
fn generate_prints_recipe_with_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    smartchef(dir.path())
        .args(["generate", "chicken", "rice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chicken, prepared as needed"))
        .stdout(predicate::str::contains("rice, prepared as needed"));
}

#[test]
fn generate_with_one_ingredient_fails() {
    let dir = tempfile::tempdir().unwrap();
    smartchef(dir.path())
        .args(["generate", "chicken", "CHICKEN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please add at least 2 ingredients"));
}

#[test]
fn unknown_preference_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    smartchef(dir.path())
        .args(["generate", "egg", "ham", "--pref", "carnivore"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dietary preference"));
}

#[test]
fn favorited_recipe_is_listed_after_restart() {
    let dir = tempfile::tempdir().unwrap();

    let output = smartchef(dir.path())
        .args(["generate", "tofu", "broccoli", "--pref", "vegan", "--favorite", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let recipe: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(recipe["isFavorite"], true);
    let id = recipe["id"].as_str().unwrap().to_string();

    smartchef(dir.path())
        .args(["favorites", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id));
}

#[test]
fn favorites_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    smartchef(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite recipes yet"));
}
