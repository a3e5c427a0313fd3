pub mod admin;
pub mod authentication;
pub mod health;
pub mod scratchpad;
pub mod server;
pub mod suggestion;
