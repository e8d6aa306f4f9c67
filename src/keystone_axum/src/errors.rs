use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use keystone_adapters::{handlers::HandlerError, views::ErrorPage};
use thiserror::Error;

/// Failures that end a request with the generic error page.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Handler(#[from] HandlerError),
    #[error("Failed to resolve session: {0}")]
    Session(String),
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = ErrorPage::default()
            .render()
            .unwrap_or_else(|_| "Error interno del servidor".to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
