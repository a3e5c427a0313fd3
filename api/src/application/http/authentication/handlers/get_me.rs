use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::UserProfile, ports::UserService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub user: UserProfile,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Get the current profile",
    responses(
        (status = 200, body = GetMeResponse)
    )
)]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetMeResponse>, ApiError> {
    let user = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMeResponse { user }))
}
