use axum::{
    Extension,
    extract::{Query, State},
};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    stats::ports::StatsService,
    suggestion::entities::SearchRecord,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::admin::validators::GetSearchesParams;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSearchesResponse {
    pub searches: Vec<SearchRecord>,
}

#[utoipa::path(
    get,
    path = "/searches",
    tag = "admin",
    summary = "List recorded searches, newest first",
    params(GetSearchesParams),
    responses(
        (status = 200, body = GetSearchesResponse),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_searches(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<GetSearchesParams>,
) -> Result<Response<GetSearchesResponse>, ApiError> {
    let searches = state
        .service
        .list_searches(identity, params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSearchesResponse { searches }))
}
