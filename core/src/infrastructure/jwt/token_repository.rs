use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenRepository},
    common::entities::app_errors::CoreError,
};

/// HS256 access tokens signed with the configured shared secret.
#[derive(Clone)]
pub struct JwtTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenRepository {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    async fn issue(&self, claim: JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), &claim, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn verify(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<JwtClaim>(&token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => CoreError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn claim(exp_offset: i64) -> JwtClaim {
        let now = Utc::now().timestamp();
        JwtClaim {
            sub: Uuid::new_v4(),
            email: "asha@example.com".to_string(),
            role: "user".to_string(),
            iat: now,
            exp: now + exp_offset,
        }
    }

    #[tokio::test]
    async fn issue_then_verify_round_trips() {
        let repo = JwtTokenRepository::new("test-secret");
        let claim = claim(3600);

        let token = repo.issue(claim.clone()).await.unwrap();
        let verified = repo.verify(token).await.unwrap();

        assert_eq!(verified, claim);
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_expired() {
        let repo = JwtTokenRepository::new("test-secret");

        let token = repo.issue(claim(-3600)).await.unwrap();
        let result = repo.verify(token).await;

        assert_eq!(result.err(), Some(CoreError::TokenExpired));
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_invalid() {
        let issuer = JwtTokenRepository::new("secret-a");
        let verifier = JwtTokenRepository::new("secret-b");

        let token = issuer.issue(claim(3600)).await.unwrap();
        let result = verifier.verify(token).await;

        assert_eq!(result.err(), Some(CoreError::InvalidToken));
    }
}
