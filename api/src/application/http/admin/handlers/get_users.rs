use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    stats::ports::StatsService,
    user::entities::UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsersResponse {
    pub users: Vec<UserProfile>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "admin",
    summary = "List every registered user",
    responses(
        (status = 200, body = GetUsersResponse),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .list_users(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse { users }))
}
