use chrono::Utc;

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        ports::{AuthService, HasherRepository, TokenRepository},
        value_objects::{AuthSession, Identity, LoginInput, SignupInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    suggestion::ports::{LLMClient, SearchRepository},
    user::{
        entities::{Role, UserProfile},
        ports::UserRepository,
    },
};

impl<U, S, H, T, L, HC> Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn issue_session(&self, user: UserProfile) -> Result<AuthSession, CoreError> {
        let now = Utc::now().timestamp();
        let claim = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now,
            exp: now + self.auth_config.token_ttl_secs as i64,
        };
        let token = self.token_repository.issue(claim).await?;

        Ok(AuthSession { user, token })
    }
}

impl<U, S, H, T, L, HC> AuthService for Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn signup(&self, input: SignupInput) -> Result<AuthSession, CoreError> {
        let existing = self
            .user_repository
            .find_credentials_by_email(input.email.clone())
            .await?;
        if existing.is_some() {
            return Err(CoreError::EmailAlreadyExists);
        }

        // Role comes from configuration, never from literals in code.
        let role = if self.auth_config.is_admin_email(&input.email) {
            Role::Admin
        } else {
            Role::User
        };

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = UserProfile::new(input.name, input.email, role);
        let user = self.user_repository.create_user(user, password_hash).await?;

        self.issue_session(user).await
    }

    async fn login(&self, input: LoginInput) -> Result<AuthSession, CoreError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let credentials = self
            .user_repository
            .find_credentials_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(input.password, credentials.password_hash)
            .await?;
        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        self.issue_session(credentials.user).await
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claim = self.token_repository.verify(token).await?;

        let user = self
            .user_repository
            .get_by_id(claim.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::User(user))
    }
}
