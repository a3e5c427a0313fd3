pub mod authentication;
pub mod common;
pub mod health;
pub mod stats;
pub mod suggestion;
pub mod user;
