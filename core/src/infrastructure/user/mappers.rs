use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{Role, Scratchpad, UserCredentials, UserProfile};
use crate::entity::users::Model as UserModel;

impl From<&UserModel> for UserProfile {
    fn from(model: &UserModel) -> Self {
        UserProfile {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            role: Role::from(model.role.as_str()),
            signup_date: Utc.from_utc_datetime(&model.signup_date),
        }
    }
}

impl From<UserModel> for UserProfile {
    fn from(model: UserModel) -> Self {
        UserProfile::from(&model)
    }
}

impl From<UserModel> for UserCredentials {
    fn from(model: UserModel) -> Self {
        let user = UserProfile::from(&model);
        UserCredentials {
            user,
            password_hash: model.password_hash,
        }
    }
}

impl From<&UserModel> for Scratchpad {
    fn from(model: &UserModel) -> Self {
        // A row written before the scratchpad existed, or a hand-edited one,
        // decodes to the empty pad rather than poisoning the read.
        let ingredients = model
            .scratch_ingredients
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        let recipes = model
            .scratch_recipes
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        Scratchpad {
            ingredients,
            recipes,
            version: model.scratch_version,
        }
    }
}
