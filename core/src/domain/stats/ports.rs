use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    stats::value_objects::{GetSearchesInput, OverviewStats},
    suggestion::entities::SearchRecord,
    user::entities::UserProfile,
};

/// Service trait for the admin dashboard reads
#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn get_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<OverviewStats, CoreError>> + Send;

    fn list_users(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;

    fn list_searches(
        &self,
        identity: Identity,
        input: GetSearchesInput,
    ) -> impl Future<Output = Result<Vec<SearchRecord>, CoreError>> + Send;
}
