use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::Scratchpad, ports::UserService},
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
use crate::application::http::scratchpad::validators::UpdateScratchpadValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateScratchpadResponse {
    pub scratchpad: Scratchpad,
}

#[utoipa::path(
    put,
    path = "",
    tag = "scratchpad",
    summary = "Replace the caller's scratchpad",
    request_body = UpdateScratchpadValidator,
    responses(
        (status = 200, body = UpdateScratchpadResponse),
        (status = 409, description = "expectedVersion no longer matches the stored state")
    )
)]
pub async fn update_scratchpad(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateScratchpadValidator>,
) -> Result<Response<UpdateScratchpadResponse>, ApiError> {
    let scratchpad = state
        .service
        .update_scratchpad(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateScratchpadResponse { scratchpad }))
}
