use axum::routing::get;
use axum::{Router, middleware};
use utoipa::OpenApi;

use super::handlers::get_scratchpad::{__path_get_scratchpad, get_scratchpad};
use super::handlers::update_scratchpad::{__path_update_scratchpad, update_scratchpad};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_scratchpad, update_scratchpad))]
pub struct ScratchpadApiDoc;

pub fn scratchpad_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .route(
            &format!("{root_path}/scratchpad"),
            get(get_scratchpad).put(update_scratchpad),
        )
        .layer(middleware::from_fn_with_state(state, auth))
}
