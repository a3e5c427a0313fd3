use crate::domain::suggestion::entities::SuggestionRequest;

/// Renders the fixed QuickBite chef instruction for a request. Deterministic:
/// the same request always produces the same prompt.
pub fn render_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are a smart and friendly AI chef named QuickBite. Your goal is to help users create \
delicious meals from the ingredients they already have.

Based on the user's available ingredients and preferences, recommend up to 3 creative and tasty \
recipes.

Available Ingredients: {available_ingredients}
Meal type: {meal_type}
Dietary Preference: {dietary_preference}
Allergies/Dislikes: {allergies}
Cooking Time Preference: {cooking_time_preference}
Goal: {goal}

For each recipe, provide:
   - A creative and appealing Recipe Title.
   - A comma-separated list of all Ingredients required.
   - Numbered, step-by-step Instructions.
   - The total Time to Cook.
   - Nutritional Info (Calories, Protein, Carbs, Fats).

Return your response as a clean JSON object. Make the recipes sound delicious and easy to \
follow. If the user provides very few or \"none\" ingredients, be creative and suggest recipes \
that fit their other preferences.",
        available_ingredients = request.available_ingredients,
        meal_type = request.meal_type,
        dietary_preference = request.dietary_preference,
        allergies = request.allergies,
        cooking_time_preference = request.cooking_time_preference,
        goal = request.goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_all_six_fields() {
        let request = SuggestionRequest {
            meal_type: "Dinner".to_string(),
            dietary_preference: "Vegan".to_string(),
            allergies: "Peanuts".to_string(),
            available_ingredients: "Tofu, Broccoli".to_string(),
            cooking_time_preference: "30 mins".to_string(),
            goal: "Quick dinner".to_string(),
        };

        let prompt = render_prompt(&request);
        assert!(prompt.contains("Available Ingredients: Tofu, Broccoli"));
        assert!(prompt.contains("Meal type: Dinner"));
        assert!(prompt.contains("Dietary Preference: Vegan"));
        assert!(prompt.contains("Allergies/Dislikes: Peanuts"));
        assert!(prompt.contains("Cooking Time Preference: 30 mins"));
        assert!(prompt.contains("Goal: Quick dinner"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let request = SuggestionRequest {
            meal_type: "Lunch".to_string(),
            dietary_preference: "None".to_string(),
            allergies: "None".to_string(),
            available_ingredients: "None".to_string(),
            cooking_time_preference: "Any".to_string(),
            goal: "Healthy meal".to_string(),
        };

        assert_eq!(render_prompt(&request), render_prompt(&request));
    }
}
