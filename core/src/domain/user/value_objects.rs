use crate::domain::suggestion::entities::Recipe;

#[derive(Debug, Clone)]
pub struct UpdateScratchpadInput {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
    /// Version the caller last read. The write only lands if it still matches.
    pub expected_version: i64,
}
