use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, suggestion::entities::SearchRecord,
};
use crate::entity::recipe_searches::Model as SearchModel;

impl TryFrom<SearchModel> for SearchRecord {
    type Error = CoreError;

    fn try_from(model: SearchModel) -> Result<Self, Self::Error> {
        let user_input = serde_json::from_value(model.user_input).map_err(|e| {
            error!("Stored search {} has a malformed userInput: {}", model.id, e);
            CoreError::InternalServerError
        })?;
        let generated_recipes = serde_json::from_value(model.generated_recipes).map_err(|e| {
            error!(
                "Stored search {} has malformed generatedRecipes: {}",
                model.id, e
            );
            CoreError::InternalServerError
        })?;

        Ok(SearchRecord {
            id: model.id,
            user_id: model.user_id,
            user_input,
            generated_recipes,
            recipe_count: model.recipe_count,
            created_at: model.created_at.map(|dt| Utc.from_utc_datetime(&dt)),
        })
    }
}
