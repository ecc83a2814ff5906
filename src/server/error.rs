//! Request errors and the page shown for them

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::admin::{AdminError, FormError};
use crate::helpers::html_escape;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("no page at {0}")]
    PageNotFound(String),

    /// Template rendering failed
    #[error("render error: {0}")]
    Render(#[from] anyhow::Error),
}

/// The message behind an error page, left on the response so the page can be
/// rebuilt with the site's own links
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Validation(e) => AppError::Validation(e),
            AdminError::Store(e) => AppError::Store(e),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(StoreError::DuplicateIdentifier(_)) => StatusCode::CONFLICT,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details stay in the log
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self);
            "Something went wrong while loading this page. Please try again later.".to_string()
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
            self.to_string()
        };

        let mut response = (status, Html(error_page(status, &message, "/"))).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

/// Standalone error page; it must render even when templates cannot
pub fn error_page(status: StatusCode, message: &str, home: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{code} {reason}</title>
    <style>
        body {{ font-family: 'Inter', sans-serif; margin: 0; padding: 4rem 2rem; color: #111111; background: #ffffff; }}
        .box {{ max-width: 600px; margin: 0 auto; }}
        h1 {{ font-size: 2rem; margin-bottom: 0.5rem; }}
        p {{ color: #666666; line-height: 1.6; }}
        a {{ color: #111111; font-weight: 600; }}
    </style>
</head>
<body>
    <div class="box">
        <h1>{code} {reason}</h1>
        <p>{message}</p>
        <a href="{home}">Back to Home</a>
    </div>
</body>
</html>
"#,
        code = status.as_u16(),
        reason = html_escape(reason),
        message = html_escape(message),
        home = html_escape(home),
    )
}
