pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod suggestion;
pub mod user;
