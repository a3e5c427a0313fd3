use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    suggestion::entities::{Recipe, SuggestionRequest},
};

/// One persisted suggestion interaction: the request snapshot, the generated
/// recipes, and the recipe count frozen at write time. Append-only; nothing
/// updates or deletes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_input: SuggestionRequest,
    pub generated_recipes: Vec<Recipe>,
    pub recipe_count: i32,
    /// Server-assigned. Legacy rows may lack it; sorting treats a missing
    /// timestamp as the earliest possible.
    pub created_at: Option<DateTime<Utc>>,
}

impl SearchRecord {
    pub fn new(user_id: Uuid, user_input: SuggestionRequest, generated_recipes: Vec<Recipe>) -> Self {
        let recipe_count = generated_recipes.len() as i32;

        Self {
            id: generate_uuid_v7(),
            user_id,
            user_input,
            generated_recipes,
            recipe_count,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::entities::Nutrition;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            ingredients: "Tofu, Broccoli".to_string(),
            instructions: "1. Cook.".to_string(),
            time_to_cook: "30 mins".to_string(),
            nutrition: Nutrition {
                calories: "300 kcal".to_string(),
                protein: "20g".to_string(),
                carbs: "15g".to_string(),
                fats: "12g".to_string(),
            },
        }
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            meal_type: "Dinner".to_string(),
            dietary_preference: "Vegan".to_string(),
            allergies: "None".to_string(),
            available_ingredients: "Tofu, Broccoli".to_string(),
            cooking_time_preference: "30 mins".to_string(),
            goal: "Quick dinner".to_string(),
        }
    }

    #[test]
    fn recipe_count_is_frozen_at_creation() {
        let recipes = vec![recipe("A"), recipe("B")];
        let record = SearchRecord::new(Uuid::new_v4(), request(), recipes);

        assert_eq!(record.recipe_count, 2);
        assert_eq!(record.recipe_count as usize, record.generated_recipes.len());
        assert!(record.created_at.is_some());
    }
}
