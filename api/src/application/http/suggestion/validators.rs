use quickbite_core::domain::suggestion::value_objects::SuggestRecipesInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of a suggestion request. Field names follow the client form,
/// hence the camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRecipesValidator {
    #[validate(length(min = 1, message = "mealType is required"))]
    pub meal_type: String,
    #[validate(length(min = 1, message = "dietaryPreference is required"))]
    pub dietary_preference: String,
    #[serde(default)]
    pub allergies: Option<String>,
    #[validate(length(min = 1, message = "availableIngredients is required"))]
    pub available_ingredients: String,
    #[validate(length(min = 1, message = "cookingTimePreference is required"))]
    pub cooking_time_preference: String,
    #[serde(default)]
    pub goal: Option<String>,
}

impl From<SuggestRecipesValidator> for SuggestRecipesInput {
    fn from(value: SuggestRecipesValidator) -> Self {
        SuggestRecipesInput {
            meal_type: value.meal_type,
            dietary_preference: value.dietary_preference,
            allergies: value.allergies,
            available_ingredients: value.available_ingredients,
            cooking_time_preference: value.cooking_time_preference,
            goal: value.goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_meal_type() {
        let validator = SuggestRecipesValidator {
            meal_type: "".to_string(),
            dietary_preference: "Anything".to_string(),
            allergies: None,
            available_ingredients: "Eggs".to_string(),
            cooking_time_preference: "15 mins".to_string(),
            goal: None,
        };

        assert!(validator.validate().is_err());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let validator: SuggestRecipesValidator = serde_json::from_value(serde_json::json!({
            "mealType": "Dinner",
            "dietaryPreference": "Vegan",
            "availableIngredients": "Tofu",
            "cookingTimePreference": "30 mins"
        }))
        .unwrap();

        assert!(validator.validate().is_ok());
        assert_eq!(validator.allergies, None);
        assert_eq!(validator.goal, None);
    }
}
