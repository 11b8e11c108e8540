use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use magazine_core::SourceError;
use magazine_render::{error_page, not_found_page};

/// Why a page could not be served.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Unknown article or tag slug, or a slug that cannot exist.
    #[error("page not found")]
    NotFound,
    /// The content source failed.
    #[error("content source failed: {0}")]
    Source(#[from] SourceError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(not_found_page().into_string())).into_response()
            }
            PageError::Source(e) => {
                tracing::error!(error = %e, "content source failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(error_page().into_string()),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_error_is_wrapped_as_source() {
        let err = PageError::from(SourceError::Request("connection refused".into()));
        assert!(err.to_string().starts_with("content source failed: "));
        assert!(err.source().is_some());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_has_no_source() {
        let err = PageError::NotFound;
        assert!(err.source().is_none());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
