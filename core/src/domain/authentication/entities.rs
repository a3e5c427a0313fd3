use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a QuickBite access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}
