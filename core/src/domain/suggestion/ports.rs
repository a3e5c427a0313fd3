use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    suggestion::{
        entities::{SearchRecord, SuggestionReply},
        value_objects::{GetSearchesFilter, SuggestRecipesInput},
    },
};

/// LLM Client trait for calling the generative model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Repository trait for the append-only searches collection
#[cfg_attr(test, mockall::automock)]
pub trait SearchRepository: Send + Sync {
    fn create_search(
        &self,
        record: SearchRecord,
    ) -> impl Future<Output = Result<SearchRecord, CoreError>> + Send;

    fn find_searches(
        &self,
        filter: GetSearchesFilter,
    ) -> impl Future<Output = Result<Vec<SearchRecord>, CoreError>> + Send;
}

/// Service trait for the suggestion round trip
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    fn suggest_recipes(
        &self,
        identity: Identity,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<SuggestionReply, CoreError>> + Send;
}
