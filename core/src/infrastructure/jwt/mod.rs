pub mod token_repository;
