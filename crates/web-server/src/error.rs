use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use views::ViewError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("View error: {0}")]
    View(#[from] ViewError),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::View(ViewError::UnknownView(view)) => {
                (StatusCode::NOT_FOUND, format!("Unknown view: {}", view))
            }
            AppError::View(
                err @ (ViewError::UnknownSymbol(_)
                | ViewError::InvalidControl(..)
                | ViewError::Analytics(analytics::AnalyticsError::UnknownSymbol(_))),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::View(view_err) => {
                tracing::error!(error = ?view_err, "Page rendering failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while rendering the page".to_string(),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
