use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignupValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginValidator {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn short_password_fails_signup_validation() {
        let signup = SignupValidator {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(signup.validate().is_err());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let login = LoginValidator {
            email: "not-an-email".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(login.validate().is_err());
    }
}
