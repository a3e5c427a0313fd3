use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod services;

#[derive(Clone, Debug)]
pub struct QuickBiteConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    /// Emails granted the admin role at signup, matched case-insensitively.
    pub admin_emails: Vec<String>,
}

impl AuthConfig {
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.admin_emails
            .iter()
            .any(|admin| admin.to_lowercase() == email)
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_email_match_is_case_insensitive() {
        let config = AuthConfig {
            jwt_secret: "secret".to_string(),
            token_ttl_secs: 3600,
            admin_emails: vec!["Chef@QuickBite.app".to_string()],
        };

        assert!(config.is_admin_email("chef@quickbite.app"));
        assert!(config.is_admin_email("CHEF@QUICKBITE.APP"));
        assert!(!config.is_admin_email("someone@quickbite.app"));
    }
}
