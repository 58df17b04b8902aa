//! Error types for catalog-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ProductId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Unauthorized")]
    Unauthorized,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::ProductNotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for Error {
    // Error bodies stay empty; the status code carries the whole answer.
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, status = status.as_u16(), "Request failed");
        status.into_response()
    }
}
