use std::future::Future;

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        value_objects::{AuthSession, Identity, LoginInput, SignupInput},
    },
    common::entities::app_errors::CoreError,
};

/// Password hashing port
#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify_password(
        &self,
        password: String,
        hash: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Access-token issuing and verification port
#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn issue(&self, claim: JwtClaim) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify(&self, token: String) -> impl Future<Output = Result<JwtClaim, CoreError>> + Send;
}

/// Service trait for signup, login and token authentication
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn signup(
        &self,
        input: SignupInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
