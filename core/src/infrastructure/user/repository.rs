use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Statement,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{Scratchpad, UserCredentials, UserProfile},
        ports::UserRepository,
        value_objects::UpdateScratchpadInput,
    },
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(
        &self,
        user: UserProfile,
        password_hash: String,
    ) -> Result<UserProfile, CoreError> {
        let created = UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(password_hash),
            role: Set(user.role.as_str().to_string()),
            signup_date: Set(user.signup_date.naive_utc()),
            scratch_ingredients: Set(None),
            scratch_recipes: Set(None),
            scratch_version: Set(0),
        })
        .exec_with_returning(&self.db)
        .await
        .map(UserProfile::from)
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserProfile::from);

        Ok(user)
    }

    async fn find_credentials_by_email(
        &self,
        email: String,
    ) -> Result<Option<UserCredentials>, CoreError> {
        let credentials = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserCredentials::from);

        Ok(credentials)
    }

    async fn find_all(&self) -> Result<Vec<UserProfile>, CoreError> {
        let users = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(UserProfile::from)
            .collect();

        Ok(users)
    }

    async fn get_scratchpad(&self, user_id: Uuid) -> Result<Option<Scratchpad>, CoreError> {
        let scratchpad = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load scratchpad: {}", e);
                CoreError::InternalServerError
            })?
            .map(|model| Scratchpad::from(&model));

        Ok(scratchpad)
    }

    async fn update_scratchpad(
        &self,
        user_id: Uuid,
        input: UpdateScratchpadInput,
    ) -> Result<Option<Scratchpad>, CoreError> {
        let ingredients = serde_json::to_value(&input.ingredients).map_err(|e| {
            error!("Failed to encode scratchpad ingredients: {}", e);
            CoreError::InternalServerError
        })?;
        let recipes = serde_json::to_value(&input.recipes).map_err(|e| {
            error!("Failed to encode scratchpad recipes: {}", e);
            CoreError::InternalServerError
        })?;

        // Compare-and-swap: the row only moves if the caller's version is
        // still current. No match means another session already wrote.
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            UPDATE users
            SET scratch_ingredients = $3,
                scratch_recipes = $4,
                scratch_version = scratch_version + 1
            WHERE id = $1 AND scratch_version = $2
            RETURNING scratch_version
            "#,
            [
                user_id.into(),
                input.expected_version.into(),
                ingredients.into(),
                recipes.into(),
            ],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to update scratchpad: {}", e);
            CoreError::InternalServerError
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let version = row.try_get::<i64>("", "scratch_version").map_err(|e| {
            error!("Failed to read scratchpad version: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Some(Scratchpad {
            ingredients: input.ingredients,
            recipes: input.recipes,
            version,
        }))
    }
}
