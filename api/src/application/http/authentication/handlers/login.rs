use axum::extract::State;
use quickbite_core::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    user::entities::UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Sign in",
    description = "Verifies credentials and returns the profile with an access token. The role on the profile tells the client which screen to show.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let session = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        user: session.user,
        token: session.token,
    }))
}
