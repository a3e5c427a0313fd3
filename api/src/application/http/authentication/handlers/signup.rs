use axum::extract::State;
use quickbite_core::domain::{
    authentication::{ports::AuthService, value_objects::SignupInput},
    user::entities::UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::SignupValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignupResponse {
    pub user: UserProfile,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Create an account",
    description = "Registers a new user and returns the profile with an access token. The caller decides where to navigate next.",
    responses(
        (status = 201, body = SignupResponse),
        (status = 409, description = "Email already registered")
    ),
    request_body = SignupValidator
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignupValidator>,
) -> Result<Response<SignupResponse>, ApiError> {
    let session = state
        .service
        .signup(SignupInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SignupResponse {
        user: session.user,
        token: session.token,
    }))
}
