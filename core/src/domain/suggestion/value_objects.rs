use uuid::Uuid;

use crate::domain::suggestion::entities::SuggestionRequest;

/// Raw form fields for one suggestion. `allergies` and `goal` may be blank;
/// normalization fills in the sentinels the prompt expects.
#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub meal_type: String,
    pub dietary_preference: String,
    pub allergies: Option<String>,
    pub available_ingredients: String,
    pub cooking_time_preference: String,
    pub goal: Option<String>,
}

const DEFAULT_GOAL: &str = "A delicious meal that fits my preferences.";

impl SuggestRecipesInput {
    pub fn into_request(self) -> SuggestionRequest {
        let allergies = match self.allergies {
            Some(a) if !a.trim().is_empty() => a,
            _ => "None".to_string(),
        };
        let goal = match self.goal {
            Some(g) if !g.trim().is_empty() => g,
            _ => DEFAULT_GOAL.to_string(),
        };
        let available_ingredients = if self.available_ingredients.trim().is_empty() {
            "None".to_string()
        } else {
            self.available_ingredients
        };

        SuggestionRequest {
            meal_type: self.meal_type,
            dietary_preference: self.dietary_preference,
            allergies,
            available_ingredients,
            cooking_time_preference: self.cooking_time_preference,
            goal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSearchesFilter {
    pub user_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SuggestRecipesInput {
        SuggestRecipesInput {
            meal_type: "Dinner".to_string(),
            dietary_preference: "Vegan".to_string(),
            allergies: None,
            available_ingredients: "Tofu, Broccoli".to_string(),
            cooking_time_preference: "30 mins".to_string(),
            goal: None,
        }
    }

    #[test]
    fn blank_optional_fields_get_their_sentinels() {
        let request = input().into_request();
        assert_eq!(request.allergies, "None");
        assert_eq!(request.goal, DEFAULT_GOAL);
    }

    #[test]
    fn whitespace_only_ingredients_become_none() {
        let mut raw = input();
        raw.available_ingredients = "   ".to_string();
        assert_eq!(raw.into_request().available_ingredients, "None");
    }

    #[test]
    fn provided_values_pass_through_unchanged() {
        let mut raw = input();
        raw.allergies = Some("Peanuts, Shellfish".to_string());
        raw.goal = Some("High protein".to_string());

        let request = raw.into_request();
        assert_eq!(request.allergies, "Peanuts, Shellfish");
        assert_eq!(request.goal, "High protein");
    }
}
