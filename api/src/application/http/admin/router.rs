use axum::routing::get;
use axum::{Router, middleware};
use utoipa::OpenApi;

use super::handlers::get_overview::{__path_get_overview, get_overview};
use super::handlers::get_searches::{__path_get_searches, get_searches};
use super::handlers::get_users::{__path_get_users, get_users};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_overview, get_users, get_searches))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root_path}/admin/overview"), get(get_overview))
        .route(&format!("{root_path}/admin/users"), get(get_users))
        .route(&format!("{root_path}/admin/searches"), get(get_searches))
        .layer(middleware::from_fn_with_state(state, auth))
}
