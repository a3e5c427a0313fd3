pub mod get_overview;
pub mod get_searches;
pub mod get_users;
