use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Startup-time corpus loading failures. Fatal: the process must not serve
/// traffic if the catalog cannot be read in full.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus file not readable at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed corpus row: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Corpus row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
}

/// Errors from the similarity core. `EmptyCorpus` is fatal at startup;
/// `Tokenization` is a per-request input error; `InvariantViolation` marks a
/// programming error (an empty vector set can only exist if `fit` was bypassed).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot fit a vector space over an empty corpus")]
    EmptyCorpus,

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, "INVALID_QUERY", msg.clone()),
            AppError::Engine(EngineError::Tokenization(msg)) => {
                (StatusCode::BAD_REQUEST, "TOKENIZATION_ERROR", msg.clone())
            }
            AppError::Engine(e) => {
                tracing::error!("Engine error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENGINE_ERROR",
                    "A recommendation engine error occurred".to_string(),
                )
            }
            AppError::Corpus(e) => {
                tracing::error!("Corpus error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CORPUS_ERROR",
                    "A corpus error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_maps_to_400() {
        let resp = AppError::InvalidQuery("interest is required".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_tokenization_error_maps_to_400() {
        let resp =
            AppError::Engine(EngineError::Tokenization("NUL byte".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invariant_violation_maps_to_500() {
        let resp = AppError::Engine(EngineError::InvariantViolation(
            "empty vector set".to_string(),
        ))
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_field_message_names_row_and_field() {
        let err = CorpusError::MissingField {
            row: 3,
            field: "career",
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("career"));
    }
}
