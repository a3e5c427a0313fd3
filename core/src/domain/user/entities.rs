use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, suggestion::entities::Recipe};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub signup_date: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: String, email: String, role: Role) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            email,
            role,
            signup_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Profile plus the stored password hash. Only the authentication service
/// sees this shape; `UserProfile` is what everything else passes around.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: UserProfile,
    pub password_hash: String,
}

/// Per-user in-progress dashboard state: the ingredient list being assembled
/// and the last set of generated recipes. Reloading the page restores it.
/// `version` increments on every successful write and guards against a stale
/// overwrite from another tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scratchpad {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub version: i64,
}

impl Default for Scratchpad {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            recipes: Vec::new(),
            version: 0,
        }
    }
}
