use crate::domain::{
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    suggestion::{
        entities::{SearchRecord, SuggestionReply},
        ports::{LLMClient, SearchRepository, SuggestionService},
        prompt::render_prompt,
        schema::recipe_suggestions_schema,
        value_objects::SuggestRecipesInput,
    },
    user::ports::UserRepository,
};

impl<U, S, H, T, L, HC> SuggestionService for Service<U, S, H, T, L, HC>
where
    U: UserRepository,
    S: SearchRepository,
    H: HasherRepository,
    T: TokenRepository,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    /// The one error-translation boundary of the system. Whatever goes wrong
    /// between submitting the prompt and validating the reply, the caller
    /// sees exactly one of two fixed messages; the detail goes to the log.
    async fn suggest_recipes(
        &self,
        identity: Identity,
        input: SuggestRecipesInput,
    ) -> Result<SuggestionReply, CoreError> {
        let request = input.into_request();
        let prompt = render_prompt(&request);

        let raw = self
            .llm_client
            .generate_with_text(prompt, recipe_suggestions_schema())
            .await
            .map_err(|e| {
                tracing::error!("Recipe suggestion model call failed: {}", e);
                CoreError::SuggestionFailed
            })?;

        // Output validation failures become the generic failure, never a
        // field-level diagnostic.
        let reply: SuggestionReply = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Model reply failed schema validation: {}", e);
            CoreError::SuggestionFailed
        })?;

        if reply.recipes.is_empty() {
            return Err(CoreError::NoRecipesFound);
        }

        // Side-write of the search record. A failed write is an operator
        // problem, not a user-facing one.
        let record = SearchRecord::new(identity.id(), request, reply.recipes.clone());
        if let Err(e) = self.search_repository.create_search(record).await {
            tracing::error!("Failed to record recipe search: {}", e);
        }

        Ok(reply)
    }
}
