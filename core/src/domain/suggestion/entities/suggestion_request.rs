use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A normalized, validated suggestion request. Immutable once built; a new
/// form submission builds a fresh one. Field names stay camelCase in JSON to
/// match the persisted `userInput` snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub meal_type: String,
    pub dietary_preference: String,
    pub allergies: String,
    pub available_ingredients: String,
    pub cooking_time_preference: String,
    pub goal: String,
}
