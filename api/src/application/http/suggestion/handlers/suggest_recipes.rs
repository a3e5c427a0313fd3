use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    suggestion::{entities::Recipe, ports::SuggestionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};
use crate::application::http::suggestion::validators::SuggestRecipesValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SuggestRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "recipes",
    summary = "Generate recipe suggestions",
    request_body = SuggestRecipesValidator,
    responses(
        (status = 200, body = SuggestRecipesResponse),
        (status = 404, description = "No recipes matched the criteria"),
        (status = 503, description = "The generation backend is unavailable")
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<SuggestRecipesValidator>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    let reply = state
        .service
        .suggest_recipes(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestRecipesResponse {
        recipes: reply.recipes,
    }))
}
