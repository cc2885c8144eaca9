//! Generated recipes and the request that produces them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::RecipeId;
use super::ingredient::Ingredient;
use super::preference::DietaryPreference;
use crate::error::GenerationError;

/// Minimum number of ingredients a generation request must carry.
pub const MIN_INGREDIENTS: usize = 2;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(DomainError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// Meal the user is cooking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl MealType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "dessert" => Ok(Self::Dessert),
            "snack" => Ok(Self::Snack),
            _ => Err(DomainError::UnknownMealType {
                value: s.to_string(),
            }),
        }
    }
}

/// A generated recipe.
///
/// Everything except `is_favorite` is fixed once the generator returns it.
/// Field names serialize in camelCase to stay compatible with previously
/// persisted favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub health_tips: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Total minutes from start to table.
    #[must_use]
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// Request passed to a [`RecipeGenerator`](crate::port::RecipeGenerator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeParams {
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<Vec<DietaryPreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl GenerateRecipeParams {
    pub fn new(ingredients: impl Into<Vec<Ingredient>>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..Self::default()
        }
    }

    /// Attach preferences. An empty list is stored as `None`.
    #[must_use]
    pub fn with_preferences(mut self, prefs: &[DietaryPreference]) -> Self {
        self.dietary_preferences = (!prefs.is_empty()).then(|| prefs.to_vec());
        self
    }

    #[must_use]
    pub fn with_exclusions(mut self, exclude: Vec<String>) -> Self {
        self.exclude_ingredients = (!exclude.is_empty()).then_some(exclude);
        self
    }

    #[must_use]
    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Check the request carries enough ingredients to generate from.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRequest`] when fewer than
    /// [`MIN_INGREDIENTS`] ingredients are supplied.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.ingredients.len() < MIN_INGREDIENTS {
            return Err(GenerationError::too_few_ingredients());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: RecipeId::from("r-1"),
            title: "Chicken and Rice Stir-Fry".into(),
            description: "Quick".into(),
            ingredients: vec!["chicken".into(), "rice".into()],
            instructions: vec!["Cook.".into()],
            health_tips: vec![],
            prep_time: 15,
            cook_time: 10,
            servings: 4,
            difficulty: Difficulty::Easy,
            image_url: "https://example.com/a.jpg".into(),
            tags: vec!["quick".into()],
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_time_sums_prep_and_cook() {
        assert_eq!(sample_recipe().total_time(), 25);
    }

    #[test]
    fn recipe_serializes_camel_case() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert_eq!(json["prepTime"], 15);
        assert_eq!(json["healthTips"].as_array().unwrap().len(), 0);
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["difficulty"], "easy");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn missing_is_favorite_defaults_to_false() {
        let json = r#"{
            "id": "r-2",
            "title": "t",
            "description": "d",
            "ingredients": [],
            "instructions": [],
            "healthTips": [],
            "prepTime": 1,
            "cookTime": 2,
            "servings": 1,
            "difficulty": "hard",
            "imageUrl": "",
            "tags": [],
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
    }

    #[test]
    fn validate_requires_two_ingredients() {
        let one = GenerateRecipeParams::new(vec![Ingredient::new("rice")]);
        assert!(matches!(
            one.validate(),
            Err(GenerationError::InvalidRequest { .. })
        ));

        let two = GenerateRecipeParams::new(vec![Ingredient::new("rice"), Ingredient::new("egg")]);
        assert!(two.validate().is_ok());
    }

    #[test]
    fn empty_preferences_are_omitted() {
        let params = GenerateRecipeParams::new(vec![]).with_preferences(&[]);
        assert!(params.dietary_preferences.is_none());
    }

    #[test]
    fn meal_type_parses() {
        assert_eq!("Dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("brunch".parse::<MealType>().is_err());
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    }
}
