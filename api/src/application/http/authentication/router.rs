use axum::routing::{get, post};
use axum::{Router, middleware};
use utoipa::OpenApi;

use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::login::{__path_login, login};
use super::handlers::signup::{__path_signup, signup};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(signup, login, get_me))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    let public = Router::new()
        .route(&format!("{root_path}/auth/signup"), post(signup))
        .route(&format!("{root_path}/auth/login"), post(login));

    let protected = Router::new()
        .route(&format!("{root_path}/auth/me"), get(get_me))
        .layer(middleware::from_fn_with_state(state, auth));

    public.merge(protected)
}
