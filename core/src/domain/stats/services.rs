use crate::domain::{
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    stats::{
        ports::StatsService,
        value_objects::{GetSearchesInput, OverviewStats},
    },
    suggestion::{
        entities::SearchRecord,
        ports::{LLMClient, SearchRepository},
        value_objects::GetSearchesFilter,
    },
    user::{entities::UserProfile, ports::UserRepository},
};

/// Mean of the frozen per-record recipe counts, one decimal place. Zero
/// records is "0.0".
pub(crate) fn average_recipes_per_search(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return "0.0".to_string();
    }
    let total: i64 = records.iter().map(|r| r.recipe_count as i64).sum();
    format!("{:.1}", total as f64 / records.len() as f64)
}

/// Descending by creation time; a record without a timestamp sorts as the
/// earliest possible (key 0), landing last.
pub(crate) fn sort_searches_newest_first(records: &mut [SearchRecord]) {
    records.sort_by_key(|record| {
        std::cmp::Reverse(
            record
                .created_at
                .map(|t| t.timestamp_millis())
                .unwrap_or(0),
        )
    });
}

impl<U, S, H, T, L, HC> StatsService for Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_overview(&self, identity: Identity) -> Result<OverviewStats, CoreError> {
        ensure_policy(
            identity.is_admin(),
            "insufficient permissions to view the admin dashboard",
        )?;

        let users = self.user_repository.find_all().await?;
        let searches = self
            .search_repository
            .find_searches(GetSearchesFilter::default())
            .await?;

        Ok(OverviewStats {
            total_users: users.len() as u64,
            total_searches: searches.len() as u64,
            avg_recipes_per_search: average_recipes_per_search(&searches),
        })
    }

    async fn list_users(&self, identity: Identity) -> Result<Vec<UserProfile>, CoreError> {
        ensure_policy(
            identity.is_admin(),
            "insufficient permissions to list users",
        )?;

        self.user_repository.find_all().await
    }

    async fn list_searches(
        &self,
        identity: Identity,
        input: GetSearchesInput,
    ) -> Result<Vec<SearchRecord>, CoreError> {
        ensure_policy(
            identity.is_admin(),
            "insufficient permissions to list searches",
        )?;

        let mut searches = self
            .search_repository
            .find_searches(GetSearchesFilter {
                user_id: input.user_id,
                limit: input.limit,
                offset: input.offset,
            })
            .await?;

        sort_searches_newest_first(&mut searches);

        Ok(searches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::{MockHasherRepository, MockTokenRepository},
        common::AuthConfig,
        health::ports::MockHealthCheckRepository,
        suggestion::{
            entities::{Nutrition, Recipe, SuggestionRequest},
            ports::{MockLLMClient, MockSearchRepository},
        },
        user::{entities::Role, ports::MockUserRepository},
    };
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
            admin_emails: Vec::new(),
        }
    }

    fn admin() -> Identity {
        Identity::User(UserProfile::new(
            "Chef".to_string(),
            "chef@quickbite.app".to_string(),
            Role::Admin,
        ))
    }

    fn member() -> Identity {
        Identity::User(UserProfile::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            Role::User,
        ))
    }

    fn recipe() -> Recipe {
        Recipe {
            title: "Tofu Bowl".to_string(),
            ingredients: "Tofu".to_string(),
            instructions: "1. Cook.".to_string(),
            time_to_cook: "20 mins".to_string(),
            nutrition: Nutrition {
                calories: "300 kcal".to_string(),
                protein: "20g".to_string(),
                carbs: "15g".to_string(),
                fats: "12g".to_string(),
            },
        }
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            meal_type: "Dinner".to_string(),
            dietary_preference: "Vegan".to_string(),
            allergies: "None".to_string(),
            available_ingredients: "Tofu".to_string(),
            cooking_time_preference: "30 mins".to_string(),
            goal: "Quick dinner".to_string(),
        }
    }

    fn record(recipes: usize, created_at_secs: Option<i64>) -> SearchRecord {
        let mut record = SearchRecord::new(
            Uuid::new_v4(),
            request(),
            std::iter::repeat_with(recipe).take(recipes).collect(),
        );
        record.created_at = created_at_secs.map(|s| Utc.timestamp_opt(s, 0).unwrap());
        record
    }

    #[test]
    fn average_over_zero_records_is_zero_not_nan() {
        assert_eq!(average_recipes_per_search(&[]), "0.0");
    }

    #[test]
    fn average_is_formatted_to_one_decimal() {
        let records = vec![record(3, Some(1)), record(2, Some(2)), record(3, Some(3))];
        assert_eq!(average_recipes_per_search(&records), "2.7");
    }

    #[test]
    fn searches_sort_strictly_descending_by_created_at() {
        let mut records = vec![
            record(1, Some(100)),
            record(1, Some(300)),
            record(1, Some(200)),
        ];
        sort_searches_newest_first(&mut records);

        let times: Vec<i64> = records
            .iter()
            .map(|r| r.created_at.unwrap().timestamp())
            .collect();
        assert_eq!(times, vec![300, 200, 100]);
    }

    #[test]
    fn missing_timestamps_sort_as_earliest() {
        let mut records = vec![record(1, None), record(1, Some(100))];
        sort_searches_newest_first(&mut records);

        assert!(records[0].created_at.is_some());
        assert!(records[1].created_at.is_none());
    }

    #[tokio::test]
    async fn overview_requires_the_admin_role() {
        let service = Service::new(
            MockUserRepository::new(),
            MockSearchRepository::new(),
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let result = service.get_overview(member()).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn overview_counts_users_and_searches() {
        let mut user_repository = MockUserRepository::new();
        user_repository.expect_find_all().returning(|| {
            let users = vec![
                UserProfile::new("A".to_string(), "a@example.com".to_string(), Role::User),
                UserProfile::new("B".to_string(), "b@example.com".to_string(), Role::User),
            ];
            Box::pin(async move { Ok(users) })
        });

        let mut search_repository = MockSearchRepository::new();
        search_repository.expect_find_searches().returning(|_| {
            let records = vec![record(2, Some(1)), record(3, Some(2))];
            Box::pin(async move { Ok(records) })
        });

        let service = Service::new(
            user_repository,
            search_repository,
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let overview = service.get_overview(admin()).await.unwrap();
        assert_eq!(overview.total_users, 2);
        assert_eq!(overview.total_searches, 2);
        assert_eq!(overview.avg_recipes_per_search, "2.5");
    }

    #[tokio::test]
    async fn list_searches_filters_by_user_and_sorts() {
        let target = Uuid::new_v4();

        let mut search_repository = MockSearchRepository::new();
        search_repository
            .expect_find_searches()
            .withf(move |filter| filter.user_id == Some(target))
            .returning(|_| {
                let records = vec![record(1, Some(10)), record(1, None), record(1, Some(20))];
                Box::pin(async move { Ok(records) })
            });

        let service = Service::new(
            MockUserRepository::new(),
            search_repository,
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let searches = service
            .list_searches(
                admin(),
                GetSearchesInput {
                    user_id: Some(target),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let keys: Vec<i64> = searches
            .iter()
            .map(|r| r.created_at.map(|t| t.timestamp()).unwrap_or(0))
            .collect();
        assert_eq!(keys, vec![20, 10, 0]);
    }
}
