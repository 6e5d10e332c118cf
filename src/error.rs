use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::catalog::CatalogError;
use crate::recommendation::RecommendError;
use crate::util::ErrorResponse;

/// Every failure a route can report. Rendered as `{error, message}` JSON with
/// a machine-readable `error` code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(#[from] validator::ValidationErrors),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("movie {0} not found")]
    MovieNotFound(i64),
    #[error("no movies match the requested filters")]
    NoRecommendations,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest(_) => "VALIDATION_ERROR",
            ApiError::MovieNotFound(_) => "MOVIE_NOT_FOUND",
            ApiError::NoRecommendations => "NO_RECOMMENDATIONS",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::CatalogUnavailable(_) => "CATALOG_UNAVAILABLE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(errors) => first_validation_message(errors)
                .unwrap_or_else(|| "Request validation failed.".to_string()),
            ApiError::MalformedRequest(reason) => reason.clone(),
            ApiError::MovieNotFound(_) => "The requested movie could not be found.".to_string(),
            ApiError::NoRecommendations => {
                "No movies match the requested conditions.".to_string()
            }
            ApiError::InvalidCredentials => "Email or password does not match.".to_string(),
            ApiError::CatalogUnavailable(_) => {
                "The movie catalog is currently unavailable.".to_string()
            }
            ApiError::Internal(_) => "Something went wrong.".to_string(),
        }
    }
}

fn first_validation_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::NoRecommendations => ApiError::NoRecommendations,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::MovieNotFound(_) | ApiError::NoRecommendations => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::CatalogUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.status_code() {
            status if status.is_server_error() => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }
        let details = match self {
            ApiError::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.message(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
