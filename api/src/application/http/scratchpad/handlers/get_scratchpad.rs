use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::Scratchpad, ports::UserService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScratchpadResponse {
    pub scratchpad: Scratchpad,
}

#[utoipa::path(
    get,
    path = "",
    tag = "scratchpad",
    summary = "Fetch the caller's scratchpad",
    responses(
        (status = 200, body = GetScratchpadResponse)
    )
)]
pub async fn get_scratchpad(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetScratchpadResponse>, ApiError> {
    let scratchpad = state
        .service
        .get_scratchpad(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScratchpadResponse { scratchpad }))
}
