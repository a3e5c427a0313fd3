use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{
        entities::SearchRecord, ports::SearchRepository, value_objects::GetSearchesFilter,
    },
};
use crate::entity::recipe_searches::{
    ActiveModel as SearchActiveModel, Column as SearchColumn, Entity as SearchEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSearchRepository {
    pub db: DatabaseConnection,
}

impl PostgresSearchRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SearchRepository for PostgresSearchRepository {
    async fn create_search(&self, record: SearchRecord) -> Result<SearchRecord, CoreError> {
        let user_input = serde_json::to_value(&record.user_input).map_err(|e| {
            error!("Failed to encode search input: {}", e);
            CoreError::InternalServerError
        })?;
        let generated_recipes = serde_json::to_value(&record.generated_recipes).map_err(|e| {
            error!("Failed to encode generated recipes: {}", e);
            CoreError::InternalServerError
        })?;

        SearchEntity::insert(SearchActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            user_input: Set(user_input),
            generated_recipes: Set(generated_recipes),
            recipe_count: Set(record.recipe_count),
            created_at: Set(record.created_at.map(|dt| dt.naive_utc())),
        })
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to insert search record: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(record)
    }

    async fn find_searches(
        &self,
        filter: GetSearchesFilter,
    ) -> Result<Vec<SearchRecord>, CoreError> {
        let mut query = SearchEntity::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(SearchColumn::UserId.eq(user_id));
        }

        query = query.order_by_desc(SearchColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let records = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch search records: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(SearchRecord::try_from)
            .collect::<Result<Vec<SearchRecord>, CoreError>>()?;

        Ok(records)
    }
}
