use axum::routing::post;
use axum::{Router, middleware};
use utoipa::OpenApi;

use super::handlers::suggest_recipes::{__path_suggest_recipes, suggest_recipes};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes))]
pub struct SuggestionApiDoc;

pub fn suggestion_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .route(
            &format!("{root_path}/recipes/suggestions"),
            post(suggest_recipes),
        )
        .layer(middleware::from_fn_with_state(state, auth))
}
