use std::sync::Arc;
use std::time::Duration;

use smartchef::adapter::generator::TemplateGenerator;
use smartchef::adapter::storage::FileStorage;
use smartchef::app::{decode, encode, PersistedState, Persister, RecipeStore};
use smartchef::domain::DietaryPreference;
use smartchef::port::Storage;
use smartchef::testkit::domain::{params, recipe};

const KEY: &str = "smartchef-storage";

fn open(dir: &std::path::Path) -> RecipeStore {
    let storage = Arc::new(FileStorage::new(dir));
    RecipeStore::with_persister(
        Arc::new(TemplateGenerator::with_delay(Duration::ZERO)),
        Persister::spawn(storage, KEY),
    )
}

#[tokio::test]
async fn favorites_and_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let favorite_id = {
        let store = open(dir.path());
        store.toggle_preference(DietaryPreference::DairyFree);
        store.toggle_preference(DietaryPreference::Keto);
        store.add_ingredient("leek");
        let recipe = store.generate_recipe(params(&["leek", "potato"])).await.unwrap();
        store.toggle_favorite_recipe(&recipe.id);
        store.flush().await;
        recipe.id
    };

    let store = open(dir.path());
    assert_eq!(
        store.preferences(),
        [DietaryPreference::DairyFree, DietaryPreference::Keto]
    );
    let favorites = store.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, favorite_id);
    assert!(favorites[0].is_favorite);
    assert!(store.ingredients().is_empty());
    assert!(store.history().is_empty());
    assert!(!store.is_generating());
}

#[tokio::test]
async fn corrupt_file_falls_back_to_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.save(KEY, "{\"state\": {\"favoriteRecipes\": 12}").unwrap();

    let store = open(dir.path());
    assert!(store.favorites().is_empty());
    assert!(store.preferences().is_empty());

    // The next write replaces the corrupt value.
    store.toggle_preference(DietaryPreference::Paleo);
    store.flush().await;
    let raw = storage.load(KEY).unwrap().unwrap();
    assert_eq!(
        decode(&raw).unwrap().dietary_preferences.as_slice(),
        [DietaryPreference::Paleo]
    );
}

#[test]
fn persisted_state_round_trips_exactly() {
    let mut a = recipe("Roasted leek and potato Salad");
    a.is_favorite = true;
    let mut b = recipe("Pasta with egg and ham");
    b.is_favorite = true;

    let state = PersistedState {
        favorite_recipes: vec![a, b],
        dietary_preferences: [DietaryPreference::Vegan, DietaryPreference::LowCarb]
            .into_iter()
            .collect(),
    };

    assert_eq!(decode(&encode(&state).unwrap()).unwrap(), state);
}

#[test]
fn reads_state_written_with_reordered_keys() {
    let raw = r#"{
        "version": 0,
        "state": {
            "dietaryPreferences": ["vegetarian"],
            "favoriteRecipes": [{
                "createdAt": "2024-05-01T12:00:00Z",
                "isFavorite": true,
                "tags": ["salad"],
                "imageUrl": "https://example.com/x.jpg",
                "difficulty": "medium",
                "servings": 2,
                "cookTime": 25,
                "prepTime": 15,
                "healthTips": [],
                "instructions": ["Roast."],
                "ingredients": ["leek, prepared as needed"],
                "description": "Hearty",
                "title": "Roasted leek Salad",
                "id": "6f1c"
            }]
        }
    }"#;

    let state = decode(raw).unwrap();
    assert_eq!(state.favorite_recipes[0].id.as_str(), "6f1c");
    assert_eq!(state.favorite_recipes[0].total_time(), 40);
    assert_eq!(
        state.dietary_preferences.as_slice(),
        [DietaryPreference::Vegetarian]
    );
}
