use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One generated recipe, exactly as the model must shape it. Every field is
/// an opaque display string; nutrition values embed their own units and are
/// never parsed into numbers. `deny_unknown_fields` makes the reply schema
/// strict: an extra or missing field rejects the whole reply instead of
/// being coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub title: String,
    /// Comma-delimited ingredient list.
    pub ingredients: String,
    /// Numbered, step-by-step instructions.
    pub instructions: String,
    pub time_to_cook: String,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

/// The model's reply: an ordered list of up to 3 recipes. An empty list is a
/// valid parse; the service decides what to tell the user about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SuggestionReply {
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_recipe() -> serde_json::Value {
        json!({
            "title": "Tofu Broccoli Stir-Fry",
            "ingredients": "Tofu, Broccoli, Soy Sauce, Garlic",
            "instructions": "1. Press the tofu. 2. Stir-fry the broccoli. 3. Combine and serve.",
            "time_to_cook": "25 mins",
            "nutrition": {
                "calories": "320 kcal",
                "protein": "22g",
                "carbs": "18g",
                "fats": "14g"
            }
        })
    }

    #[test]
    fn well_formed_reply_parses() {
        let reply: SuggestionReply =
            serde_json::from_value(json!({ "recipes": [valid_recipe()] })).unwrap();
        assert_eq!(reply.recipes.len(), 1);
        assert_eq!(reply.recipes[0].nutrition.protein, "22g");
    }

    #[test]
    fn missing_nutrition_block_is_rejected() {
        let mut recipe = valid_recipe();
        recipe.as_object_mut().unwrap().remove("nutrition");

        let result: Result<SuggestionReply, _> =
            serde_json::from_value(json!({ "recipes": [recipe] }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_nutrition_subfield_is_rejected() {
        let mut recipe = valid_recipe();
        recipe["nutrition"].as_object_mut().unwrap().remove("fats");

        let result: Result<SuggestionReply, _> =
            serde_json::from_value(json!({ "recipes": [recipe] }));
        assert!(result.is_err());
    }

    #[test]
    fn extra_fields_are_rejected_not_coerced() {
        let mut recipe = valid_recipe();
        recipe
            .as_object_mut()
            .unwrap()
            .insert("rating".to_string(), json!(5));

        let result: Result<SuggestionReply, _> =
            serde_json::from_value(json!({ "recipes": [recipe] }));
        assert!(result.is_err());
    }

    #[test]
    fn non_string_types_are_rejected() {
        let mut recipe = valid_recipe();
        recipe["nutrition"]["calories"] = json!(320);

        let result: Result<SuggestionReply, _> =
            serde_json::from_value(json!({ "recipes": [recipe] }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_recipe_list_is_a_valid_parse() {
        let reply: SuggestionReply = serde_json::from_value(json!({ "recipes": [] })).unwrap();
        assert!(reply.recipes.is_empty());
    }
}
