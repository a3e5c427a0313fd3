pub mod recipe_searches;
pub mod users;
