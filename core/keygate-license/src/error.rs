//! Error types for license loading and verification.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the license table. All of them are fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The license file could not be read.
    #[error("failed to read license file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The license data is not valid JSON or does not have the expected shape.
    #[error("invalid license data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a verification request was refused.
///
/// `Display` carries diagnostic detail for logs. The text returned to
/// callers comes from [`VerifyError::message`] and never includes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// `key` or `botId` was missing or empty.
    #[error("both 'key' and 'botId' are required")]
    InvalidRequest,

    /// No license exists for the key.
    #[error("license key not found")]
    NotFound,

    /// The license has been administratively disabled.
    #[error("license is disabled")]
    Disabled,

    /// The license expired at the given instant.
    #[error("license expired at {0}")]
    Expired(String),

    /// The bot is not in the license's bot list.
    #[error("bot {0:?} is not authorized for this license")]
    UnauthorizedBot(String),

    /// Unanticipated failure while handling the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VerifyError {
    /// Stable machine-readable reason code.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::Disabled => "disabled",
            Self::Expired(_) => "expired",
            Self::UnauthorizedBot(_) => "unauthorized_bot",
            Self::Internal(_) => "server_error",
        }
    }

    /// Human-readable message safe to return to callers.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "Both 'key' and 'botId' are required",
            Self::NotFound => "License key not found",
            Self::Disabled => "License is disabled",
            Self::Expired(_) => "License has expired",
            Self::UnauthorizedBot(_) => "Bot is not authorized for this license",
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Result type for verification.
pub type VerifyResult<T> = Result<T, VerifyError>;
