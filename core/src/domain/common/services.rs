use crate::domain::{
    authentication::ports::{HasherRepository, TokenRepository},
    common::AuthConfig,
    health::ports::HealthCheckRepository,
    suggestion::ports::{LLMClient, SearchRepository},
    user::ports::UserRepository,
};

/// The service container. Each domain module implements its service trait for
/// this struct against the ports it needs; the concrete repository types are
/// picked once, in `application::create_service`.
#[derive(Clone)]
pub struct Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    pub user_repository: U,
    pub search_repository: S,
    pub hasher_repository: H,
    pub token_repository: T,
    pub llm_client: L,
    pub health_check_repository: HC,
    pub auth_config: AuthConfig,
}

impl<U, S, H, T, L, HC> Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        search_repository: S,
        hasher_repository: H,
        token_repository: T,
        llm_client: L,
        health_check_repository: HC,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            user_repository,
            search_repository,
            hasher_repository,
            token_repository,
            llm_client,
            health_check_repository,
            auth_config,
        }
    }
}
