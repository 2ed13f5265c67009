//! Maps verification failures to HTTP responses.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keygate_license::VerifyError;

use crate::routes::VerifyResponse;

/// A refused verification, rendered as a status code and JSON body.
///
/// Only the reason code and the fixed public message are sent. Detail
/// from [`VerifyError::Internal`] is logged and dropped.
#[derive(Debug)]
pub struct ApiError(pub VerifyError);

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            VerifyError::InvalidRequest => StatusCode::BAD_REQUEST,
            VerifyError::NotFound => StatusCode::NOT_FOUND,
            VerifyError::Disabled | VerifyError::Expired(_) | VerifyError::UnauthorizedBot(_) => {
                StatusCode::FORBIDDEN
            }
            VerifyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let VerifyError::Internal(_) = self.0 {
            tracing::error!(error = %self.0, "error verifying license");
        }
        (self.status(), Json(VerifyResponse::rejected(&self.0))).into_response()
    }
}

/// Converts a caught handler panic into a `server_error` response.
pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError(VerifyError::Internal(format!("handler panicked: {detail}"))).into_response()
}
