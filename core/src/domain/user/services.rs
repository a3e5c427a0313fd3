use crate::domain::{
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    suggestion::ports::{LLMClient, SearchRepository},
    user::{
        entities::{Scratchpad, UserProfile},
        ports::{UserRepository, UserService},
        value_objects::UpdateScratchpadInput,
    },
};

impl<U, S, H, T, L, HC> UserService for Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_profile(&self, identity: Identity) -> Result<UserProfile, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_scratchpad(&self, identity: Identity) -> Result<Scratchpad, CoreError> {
        // A user who never saved anything gets the empty pad at version 0.
        let scratchpad = self
            .user_repository
            .get_scratchpad(identity.id())
            .await?
            .unwrap_or_default();

        Ok(scratchpad)
    }

    async fn update_scratchpad(
        &self,
        identity: Identity,
        input: UpdateScratchpadInput,
    ) -> Result<Scratchpad, CoreError> {
        self.user_repository
            .update_scratchpad(identity.id(), input)
            .await?
            .ok_or(CoreError::ScratchpadConflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::{MockHasherRepository, MockTokenRepository},
        common::AuthConfig,
        health::ports::MockHealthCheckRepository,
        suggestion::ports::{MockLLMClient, MockSearchRepository},
        user::{entities::Role, ports::MockUserRepository},
    };

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
            admin_emails: Vec::new(),
        }
    }

    fn identity() -> Identity {
        Identity::User(UserProfile::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            Role::User,
        ))
    }

    #[tokio::test]
    async fn missing_scratchpad_defaults_to_empty_version_zero() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_scratchpad()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = Service::new(
            user_repository,
            MockSearchRepository::new(),
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let scratchpad = service.get_scratchpad(identity()).await.unwrap();
        assert!(scratchpad.ingredients.is_empty());
        assert!(scratchpad.recipes.is_empty());
        assert_eq!(scratchpad.version, 0);
    }

    #[tokio::test]
    async fn stale_scratchpad_version_is_a_conflict() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_update_scratchpad()
            .withf(|_, input| input.expected_version == 3)
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = Service::new(
            user_repository,
            MockSearchRepository::new(),
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let result = service
            .update_scratchpad(
                identity(),
                UpdateScratchpadInput {
                    ingredients: vec!["Tofu".to_string()],
                    recipes: Vec::new(),
                    expected_version: 3,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::ScratchpadConflict));
    }

    #[tokio::test]
    async fn matching_version_returns_the_bumped_pad() {
        let mut user_repository = MockUserRepository::new();
        user_repository.expect_update_scratchpad().returning(|_, input| {
            let pad = Scratchpad {
                ingredients: input.ingredients.clone(),
                recipes: input.recipes.clone(),
                version: input.expected_version + 1,
            };
            Box::pin(async move { Ok(Some(pad)) })
        });

        let service = Service::new(
            user_repository,
            MockSearchRepository::new(),
            MockHasherRepository::new(),
            MockTokenRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            auth_config(),
        );

        let pad = service
            .update_scratchpad(
                identity(),
                UpdateScratchpadInput {
                    ingredients: vec!["Tofu".to_string(), "Broccoli".to_string()],
                    recipes: Vec::new(),
                    expected_version: 0,
                },
            )
            .await
            .unwrap();

        assert_eq!(pad.version, 1);
        assert_eq!(pad.ingredients.len(), 2);
    }
}
