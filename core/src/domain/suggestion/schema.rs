use serde_json::json;

/// Returns the JSON schema handed to the model as its response contract.
/// Mirrors `SuggestionReply` exactly; the strict serde parse on our side is
/// what actually enforces it.
pub fn recipe_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "maxItems": 3,
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "ingredients": { "type": "string" },
                        "instructions": { "type": "string" },
                        "time_to_cook": { "type": "string" },
                        "nutrition": {
                            "type": "object",
                            "properties": {
                                "calories": { "type": "string" },
                                "protein": { "type": "string" },
                                "carbs": { "type": "string" },
                                "fats": { "type": "string" }
                            },
                            "required": ["calories", "protein", "carbs", "fats"]
                        }
                    },
                    "required": [
                        "title", "ingredients", "instructions", "time_to_cook", "nutrition"
                    ]
                }
            }
        },
        "required": ["recipes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_caps_recipes_at_three() {
        let schema = recipe_suggestions_schema();
        assert_eq!(schema["properties"]["recipes"]["maxItems"], 3);
        assert_eq!(schema["required"][0], "recipes");
    }
}
