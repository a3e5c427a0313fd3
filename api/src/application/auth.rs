use axum::{
    RequestPartsExt,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use quickbite_core::domain::authentication::ports::AuthService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Resolves the Bearer token into an [`Identity`] and attaches it as a
/// request extension. Every protected route reads that explicit value; no
/// ambient auth state exists anywhere else.
///
/// [`Identity`]: quickbite_core::domain::authentication::value_objects::Identity
pub async fn auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let identity = state
        .service
        .authenticate(bearer.token().to_string())
        .await
        .map_err(ApiError::from)?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
