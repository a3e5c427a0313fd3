use crate::domain::common::{QuickBiteConfig, services::Service};
use crate::infrastructure::{
    crypto::argon2_hasher::Argon2Hasher,
    db::postgres::{Postgres, PostgresConfig},
    health::repository::PostgresHealthCheckRepository,
    jwt::token_repository::JwtTokenRepository,
    llm::gemini_client::GeminiLLMClient,
    suggestion::repository::PostgresSearchRepository,
    user::repository::PostgresUserRepository,
};

pub type QuickBiteService = Service<
    PostgresUserRepository,
    PostgresSearchRepository,
    Argon2Hasher,
    JwtTokenRepository,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: QuickBiteConfig) -> Result<QuickBiteService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    let llm_client = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresSearchRepository::new(db.clone()),
        Argon2Hasher::new(),
        JwtTokenRepository::new(&config.auth.jwt_secret),
        llm_client,
        PostgresHealthCheckRepository::new(db),
        config.auth,
    ))
}
