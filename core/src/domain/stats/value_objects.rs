use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Aggregates over all registered users and recorded searches. The average
/// is pre-formatted to one decimal place; zero records reads "0.0", never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverviewStats {
    pub total_users: u64,
    pub total_searches: u64,
    pub avg_recipes_per_search: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetSearchesInput {
    pub user_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
