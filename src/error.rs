use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Cannot derive a value from an empty list")]
    EmptyInput,
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Missing or unknown user role")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::EmptyInput) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Catalog(CatalogError::EmptyInput) => "EI-00422",
            ApiError::Catalog(CatalogError::NotFound { .. }) => "NF-00404",
            ApiError::Catalog(CatalogError::Conflict(_)) => "CF-00409",
            ApiError::Catalog(CatalogError::Validation(_)) => "VE-00400",
            ApiError::Unauthorized => "UA-00401",
            ApiError::Forbidden => "FB-00403",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub code: String,
    pub timestamp: i64,
}

impl From<&ApiError> for ErrorResponse {
    fn from(value: &ApiError) -> Self {
        Self {
            message: value.to_string(),
            status: value.status_code().as_u16(),
            code: value.error_code().to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
