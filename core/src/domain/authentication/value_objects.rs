use uuid::Uuid;

use crate::domain::user::entities::{Role, UserProfile};

/// The authenticated caller, resolved once by the auth middleware and passed
/// explicitly into every service operation. Login itself never navigates or
/// stashes anything ambient; callers decide what to do with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(UserProfile),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn is_admin(&self) -> bool {
        match self {
            Identity::User(user) => user.role == Role::Admin,
        }
    }

    pub fn user(&self) -> &UserProfile {
        match self {
            Identity::User(user) => user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful signup or login: the profile and a bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserProfile,
    pub token: String,
}
