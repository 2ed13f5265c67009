//! Request handlers and their response bodies.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{SecondsFormat, Utc};
use keygate_license::{LicenseStore, Verified, VerifyError, VerifyRequest, verify};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Body of every `/api/verify` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl VerifyResponse {
    pub fn accepted(verified: &Verified) -> Self {
        Self {
            valid: true,
            reason: None,
            message: None,
            expires_at: Some(verified.expires_at.to_string()),
        }
    }

    pub fn rejected(err: &VerifyError) -> Self {
        Self {
            valid: false,
            reason: Some(err.reason().to_string()),
            message: Some(err.message().to_string()),
            expires_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// `POST /api/verify`
///
/// A body that is not a JSON object with string fields is treated the
/// same as one with the fields missing. License keys are never logged.
pub async fn verify_handler(
    State(store): State<Arc<LicenseStore>>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable verification body");
            return Err(VerifyError::InvalidRequest.into());
        }
    };

    match verify(&store, &request) {
        Ok(verified) => {
            debug!(bot_id = ?request.bot_id, "license verified");
            Ok(Json(VerifyResponse::accepted(&verified)))
        }
        Err(err) => {
            debug!(bot_id = ?request.bot_id, reason = err.reason(), "license rejected: {err}");
            Err(err.into())
        }
    }
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
