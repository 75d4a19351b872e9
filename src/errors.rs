use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the Pokemon catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record is stored under the requested id
    #[error("Pokemon {0} does not exist")]
    NotFound(u32),
    /// A record with this id is already stored
    #[error("Pokemon {0} already exists")]
    AlreadyExists(u32),
    /// A search produced no records
    #[error("No Pokemon matches the search criteria")]
    NoMatch,
    /// A path id outside `1..=u32::MAX`, rejected before any lookup
    #[error("Pokemon id must be a positive integer, got {0}")]
    InvalidId(i64),
    /// A path, query string or body the boundary could not parse
    #[error("Invalid request: {0}")]
    InvalidInput(String),
    /// The seed dataset could not be turned into a collection
    #[error("Malformed dataset: {0}")]
    Dataset(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("SQLite error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Duplicate creates report 404, not 409.
            CatalogError::NotFound(_) | CatalogError::AlreadyExists(_) | CatalogError::NoMatch => {
                StatusCode::NOT_FOUND
            }
            CatalogError::InvalidId(_) | CatalogError::InvalidInput(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CatalogError::Dataset(_)
            | CatalogError::Io(_)
            | CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for CatalogError {
    fn from(rejection: PathRejection) -> Self {
        CatalogError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::InvalidInput(rejection.body_text())
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
