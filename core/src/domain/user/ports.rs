use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::{Scratchpad, UserCredentials, UserProfile},
        value_objects::UpdateScratchpadInput,
    },
};

/// Repository trait for user profiles and their scratchpad state
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: UserProfile,
        password_hash: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn find_credentials_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<UserCredentials>, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;

    fn get_scratchpad(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Scratchpad>, CoreError>> + Send;

    /// Compare-and-swap write. Returns `None` when `expected_version` no
    /// longer matches the stored row.
    fn update_scratchpad(
        &self,
        user_id: Uuid,
        input: UpdateScratchpadInput,
    ) -> impl Future<Output = Result<Option<Scratchpad>, CoreError>> + Send;
}

/// Service trait for profile and scratchpad operations
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_scratchpad(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Scratchpad, CoreError>> + Send;

    fn update_scratchpad(
        &self,
        identity: Identity,
        input: UpdateScratchpadInput,
    ) -> impl Future<Output = Result<Scratchpad, CoreError>> + Send;
}
