//! Template-based recipe generator.
//!
//! Stands in for a model-backed service: waits a configurable delay, picks
//! one of a handful of recipe templates at random and fills it with the
//! first two ingredients.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::domain::{Difficulty, GenerateRecipeParams, Recipe, RecipeId};
use crate::error::GenerationError;
use crate::port::RecipeGenerator;

/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Staple entries every generated recipe lists after the two main ingredients.
static STAPLES: [&str; 4] = [
    "Salt and pepper to taste",
    "Olive oil",
    "2 cloves garlic, minced",
    "1 onion, diced",
];

static IMAGES: [&str; 6] = [
    "https://images.pexels.com/photos/1640772/pexels-photo-1640772.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1527603/pexels-photo-1527603.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/958545/pexels-photo-958545.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1256875/pexels-photo-1256875.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/699953/pexels-photo-699953.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
];

/// A recipe skeleton. `{0}` and `{1}` are replaced by the first and second
/// ingredient names.
struct Template {
    title: &'static str,
    description: &'static str,
    instructions: &'static [&'static str],
    health_tips: &'static [&'static str],
    difficulty: Difficulty,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    tags: &'static [&'static str],
}

static TEMPLATES: [Template; 3] = [
    Template {
        title: "Pasta with {0} and {1}",
        description: "A delicious pasta dish made with fresh {0} and {1}, perfect for a quick weeknight dinner.",
        instructions: &[
            "Bring a large pot of salted water to a boil.",
            "Add pasta and cook according to package instructions until al dente.",
            "While pasta is cooking, heat olive oil in a large pan over medium heat.",
            "Add {0} and cook until softened, about 5 minutes.",
            "Add {1} and cook for another 2-3 minutes.",
            "Drain pasta, reserving 1/4 cup of pasta water.",
            "Add pasta to the pan with the vegetables, along with the reserved pasta water.",
            "Toss to combine, season with salt and pepper to taste.",
            "Serve hot, garnished with fresh herbs if desired.",
        ],
        health_tips: &[
            "Use whole grain pasta for added fiber and nutrients.",
            "Add more vegetables for extra vitamins and minerals.",
            "Use olive oil instead of butter for heart-healthy fats.",
        ],
        difficulty: Difficulty::Easy,
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        tags: &["pasta", "quick", "dinner", "vegetarian"],
    },
    Template {
        title: "{0} and {1} Stir-Fry",
        description: "A quick and healthy stir-fry featuring {0} and {1}, ready in under 30 minutes.",
        instructions: &[
            "Prepare all ingredients before cooking. Slice {0} and {1} into bite-sized pieces.",
            "Heat oil in a wok or large frying pan over high heat.",
            "Add {0} and stir-fry for 2-3 minutes until beginning to soften.",
            "Add {1} and continue to stir-fry for another 2 minutes.",
            "Add sauce ingredients and toss to coat.",
            "Cook for 1-2 more minutes until everything is hot and well combined.",
            "Serve immediately over rice or noodles, garnished with green onions.",
        ],
        health_tips: &[
            "Use brown rice instead of white rice for more fiber and nutrients.",
            "Add a variety of colorful vegetables for a wider range of vitamins.",
            "Limit sodium by using low-sodium soy sauce or tamari.",
        ],
        difficulty: Difficulty::Easy,
        prep_time: 15,
        cook_time: 10,
        servings: 4,
        tags: &["stir-fry", "quick", "dinner", "Asian"],
    },
    Template {
        title: "Roasted {0} and {1} Salad",
        description: "A hearty salad featuring roasted {0} and fresh {1}, perfect for lunch or a light dinner.",
        instructions: &[
            "Preheat oven to 425°F (220°C).",
            "Toss {0} with olive oil, salt, and pepper on a baking sheet.",
            "Roast for 20-25 minutes until golden and tender, stirring halfway through.",
            "While {0} is roasting, prepare the dressing by whisking together olive oil, lemon juice, mustard, and honey.",
            "In a large bowl, combine fresh greens, {1}, and any other fresh vegetables.",
            "Add the roasted {0} to the salad while still warm.",
            "Drizzle with dressing, toss gently, and serve immediately.",
        ],
        health_tips: &[
            "Add seeds or nuts for healthy fats and extra protein.",
            "Use a variety of colorful vegetables to maximize nutrient intake.",
            "Make your own dressing to control sugar and sodium content.",
        ],
        difficulty: Difficulty::Medium,
        prep_time: 15,
        cook_time: 25,
        servings: 2,
        tags: &["salad", "healthy", "lunch", "vegetables"],
    },
];

fn fill(text: &str, first: &str, second: &str) -> String {
    text.replace("{0}", first).replace("{1}", second)
}

/// Generator backed by built-in templates.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    delay: Duration,
}

impl TemplateGenerator {
    /// Create a generator with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Create a generator with a custom simulated latency.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn build(params: &GenerateRecipeParams) -> Recipe {
        let mut rng = rand::thread_rng();
        let template = TEMPLATES
            .choose(&mut rng)
            .unwrap_or(&TEMPLATES[0]);
        let image_url = IMAGES.choose(&mut rng).copied().unwrap_or(IMAGES[0]);

        let first = params.ingredients[0].name.as_str();
        let second = params.ingredients[1].name.as_str();

        let excluded: Vec<String> = params
            .exclude_ingredients
            .iter()
            .flatten()
            .map(|e| e.trim().to_lowercase())
            .collect();

        let mut ingredients = vec![
            format!("{first}, prepared as needed"),
            format!("{second}, prepared as needed"),
        ];
        ingredients.extend(STAPLES.iter().map(|s| (*s).to_string()));
        ingredients.extend(
            params.ingredients[2..]
                .iter()
                .filter(|i| !excluded.contains(&i.name.to_lowercase()))
                .map(|i| format!("{}, to taste", i.name)),
        );

        let mut tags: Vec<String> = template.tags.iter().map(|t| (*t).to_string()).collect();
        tags.push(first.to_string());
        tags.push(second.to_string());
        if let Some(prefs) = &params.dietary_preferences {
            for pref in prefs {
                let tag = pref.as_str().to_string();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        if let Some(meal) = params.meal_type {
            let tag = meal.as_str().to_string();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Recipe {
            id: RecipeId::new(),
            title: fill(template.title, first, second),
            description: fill(template.description, first, second),
            ingredients,
            instructions: template
                .instructions
                .iter()
                .map(|step| fill(step, first, second))
                .collect(),
            health_tips: template.health_tips.iter().map(|t| (*t).to_string()).collect(),
            prep_time: template.prep_time,
            cook_time: template.cook_time,
            servings: template.servings,
            difficulty: template.difficulty,
            image_url: image_url.to_string(),
            tags,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeGenerator for TemplateGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerationError> {
        params.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let recipe = Self::build(params);
        debug!(recipe_id = %recipe.id, title = %recipe.title, "Template recipe built");
        Ok(recipe)
    }
}
