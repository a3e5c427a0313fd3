use axum::{Extension, extract::State};
use quickbite_core::domain::{
    authentication::value_objects::Identity,
    stats::{ports::StatsService, value_objects::OverviewStats},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/overview",
    tag = "admin",
    summary = "Aggregate counts for the dashboard header",
    responses(
        (status = 200, body = OverviewStats),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<OverviewStats>, ApiError> {
    let stats = state
        .service
        .get_overview(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
