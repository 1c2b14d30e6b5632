use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Every variant is a 400 with a plain-text body; analysis failures are
/// reported to the caller verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingUpload,

    #[error("Please upload a PDF file.")]
    NotPdf,

    #[error("{0}")]
    Validation(String),

    #[error("Error: {0}")]
    Extraction(#[from] ExtractError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingUpload | AppError::NotPdf | AppError::Validation(_) => {
                tracing::warn!("Rejected upload: {self}");
            }
            AppError::Extraction(e) => {
                tracing::warn!("Error while analyzing: {e}");
            }
        }

        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
