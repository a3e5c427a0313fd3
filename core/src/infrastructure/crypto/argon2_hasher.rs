use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{
    authentication::ports::HasherRepository, common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2Hasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(hash.to_string())
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(&hash).map_err(|e| {
            tracing::error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2Hasher::new();
        let hash = hasher
            .hash_password("hunter2hunter2".to_string())
            .await
            .unwrap();

        assert!(
            hasher
                .verify_password("hunter2hunter2".to_string(), hash.clone())
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify_password("wrong".to_string(), hash)
                .await
                .unwrap()
        );
    }
}
