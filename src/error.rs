use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// Catalog and generation failures carry separate variants so callers can
/// always tell which upstream service failed. Nothing here is retried.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing credential {name}. {hint}")]
    MissingCredential {
        name: &'static str,
        hint: &'static str,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog request failed: {0}")]
    CatalogTransport(#[source] reqwest::Error),

    #[error("Catalog API returned status {status}: {body}")]
    CatalogApi { status: u16, body: String },

    #[error("Failed to parse catalog response: {0}")]
    CatalogDecode(#[source] serde_json::Error),

    #[error("Generation request failed: {0}")]
    GenerationTransport(#[source] reqwest::Error),

    #[error("Generation API returned status {status}: {message}")]
    GenerationApi { status: u16, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingCredential { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::CatalogTransport(_)
            | AppError::CatalogApi { .. }
            | AppError::CatalogDecode(_)
            | AppError::GenerationTransport(_)
            | AppError::GenerationApi { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
