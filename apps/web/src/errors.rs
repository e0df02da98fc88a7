use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::jobs::backend::BackendError;
use crate::jobs::card::CardError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CardError> for AppError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::Busy { .. } => AppError::Busy(err.to_string()),
            CardError::Backend(e) => AppError::Backend(e),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Please sign in to continue".to_string(),
            ),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            AppError::Busy(msg) => {
                tracing::warn!("Rejected duplicate request: {msg}");
                (
                    StatusCode::CONFLICT,
                    "This action is already in progress".to_string(),
                )
            }
            AppError::Backend(BackendError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Job {id} not found"))
            }
            AppError::Backend(e) => {
                tracing::error!("Backend error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The job service is unavailable".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let page = ErrorPage {
            status: status.as_u16(),
            message: &message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}
