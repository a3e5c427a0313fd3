use utoipa::OpenApi;

use crate::application::http::{
    admin::router::AdminApiDoc, authentication::router::AuthenticationApiDoc,
    scratchpad::router::ScratchpadApiDoc, suggestion::router::SuggestionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "QuickBite API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/recipes", api = SuggestionApiDoc),
        (path = "/scratchpad", api = ScratchpadApiDoc),
        (path = "/admin", api = AdminApiDoc),
    )
)]
pub struct ApiDoc;
