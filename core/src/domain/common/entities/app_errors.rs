use thiserror::Error;

/// Domain-level errors. The two suggestion variants carry the only messages a
/// suggestion caller is ever allowed to see; everything the model or the
/// network actually said stays in the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error(
        "We couldn't find any recipes matching your criteria. Please try being less specific."
    )]
    NoRecipesFound,

    #[error(
        "Failed to generate recipe suggestions. The AI chef might be busy. Please try again later."
    )]
    SuggestionFailed,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("{0}")]
    Forbidden(String),

    #[error("Not found")]
    NotFound,

    #[error("Scratchpad was changed by another session")]
    ScratchpadConflict,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
