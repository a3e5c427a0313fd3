use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use quickbite_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION")
            }
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.parts();
        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NoRecipesFound => ApiError::NotFound(error.to_string()),
            CoreError::SuggestionFailed => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::InvalidCredentials
            | CoreError::InvalidToken
            | CoreError::TokenExpired => ApiError::Unauthorized(error.to_string()),
            CoreError::EmailAlreadyExists | CoreError::ScratchpadConflict => {
                ApiError::Conflict(error.to_string())
            }
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            // Operator detail never reaches the client.
            CoreError::ExternalServiceError(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs `validator` rules after deserialization and
/// reports failures as field-level messages.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::UnprocessableEntity(flatten_validation_errors(&e)))?;

        Ok(ValidateJson(value))
    }
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                match &error.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value", field),
                }
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_errors_map_to_their_fixed_statuses() {
        let empty = ApiError::from(CoreError::NoRecipesFound);
        assert_eq!(empty.parts().0, StatusCode::NOT_FOUND);
        assert!(empty.to_string().contains("less specific"));

        let busy = ApiError::from(CoreError::SuggestionFailed);
        assert_eq!(busy.parts().0, StatusCode::SERVICE_UNAVAILABLE);
        assert!(busy.to_string().contains("AI chef might be busy"));
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "gemini said: quota exceeded for key AIza...".to_string(),
        ));
        assert_eq!(error.to_string(), "Internal server error");
    }
}
