//! Error type shared by the handlers.

use axum::{
    http::{StatusCode, uri::InvalidUri},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HugoError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path escapes the site root: {}", .0.display())]
    Forbidden(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid uri: {0}")]
    InvalidUri(#[from] InvalidUri),

    #[error("request body exceeds {0} bytes")]
    TooLarge(usize),

    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
}

impl HugoError {
    pub fn status(&self) -> StatusCode {
        match self {
            HugoError::NotFound(_) => StatusCode::NOT_FOUND,
            HugoError::Forbidden(_) => StatusCode::FORBIDDEN,
            HugoError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            HugoError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HugoError::InvalidUri(_) | HugoError::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HugoError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        status.into_response()
    }
}
