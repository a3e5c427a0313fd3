use crate::domain::{
    authentication::ports::{HasherRepository, TokenRepository},
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    suggestion::ports::{LLMClient, SearchRepository},
    user::ports::UserRepository,
};

impl<U, S, H, T, L, HC> HealthCheckService for Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
