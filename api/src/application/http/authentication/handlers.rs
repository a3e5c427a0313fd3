pub mod get_me;
pub mod login;
pub mod signup;
