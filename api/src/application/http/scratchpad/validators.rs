use quickbite_core::domain::{
    suggestion::entities::Recipe, user::value_objects::UpdateScratchpadInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScratchpadValidator {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Version the client last read. A stale value yields a conflict.
    #[validate(range(min = 0, message = "expectedVersion must be non-negative"))]
    pub expected_version: i64,
}

impl From<UpdateScratchpadValidator> for UpdateScratchpadInput {
    fn from(value: UpdateScratchpadValidator) -> Self {
        UpdateScratchpadInput {
            ingredients: value.ingredients,
            recipes: value.recipes,
            expected_version: value.expected_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_expected_version() {
        let validator = UpdateScratchpadValidator {
            ingredients: vec![],
            recipes: vec![],
            expected_version: -1,
        };

        assert!(validator.validate().is_err());
    }

    #[test]
    fn lists_default_to_empty() {
        let validator: UpdateScratchpadValidator =
            serde_json::from_value(serde_json::json!({ "expectedVersion": 3 })).unwrap();

        assert!(validator.ingredients.is_empty());
        assert!(validator.recipes.is_empty());
        assert_eq!(validator.expected_version, 3);
    }
}
