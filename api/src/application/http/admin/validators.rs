use quickbite_core::domain::stats::value_objects::GetSearchesInput;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use uuid::Uuid;

/// Query parameters for the search listing. All optional; no filter means
/// every recorded search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetSearchesParams {
    /// Restrict to one user's searches.
    pub user_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<GetSearchesParams> for GetSearchesInput {
    fn from(value: GetSearchesParams) -> Self {
        GetSearchesInput {
            user_id: value.user_id,
            limit: value.limit,
            offset: value.offset,
        }
    }
}
